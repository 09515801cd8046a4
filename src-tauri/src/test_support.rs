// Recording fakes for the controller's capabilities.
use std::sync::Mutex;

use http::StatusCode;
use serde_json::Value;
use tokio::sync::oneshot;

use crate::api::{daemon_set_list_path, DashboardApi, DEPLOY_FROM_CHART_PATH, DEPLOY_FROM_FILE_PATH};
use crate::error::ApiError;
use crate::models::deploy::{
    AppDeploymentFromChartResponse, AppDeploymentFromChartSpec, AppDeploymentFromFileResponse,
    AppDeploymentFromFileSpec,
};
use crate::models::k8s::DaemonSetList;
use crate::services::{ErrorDialog, HistoryService};

#[derive(Default)]
pub struct RecordingApi {
    calls: Mutex<Vec<String>>,
    daemon_sets: Mutex<Option<Value>>,
    file_specs: Mutex<Vec<AppDeploymentFromFileSpec>>,
    chart_specs: Mutex<Vec<AppDeploymentFromChartSpec>>,
    partial_errors: Mutex<Vec<String>>,
    failure: Mutex<Option<(StatusCode, String)>>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl RecordingApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn file_specs(&self) -> Vec<AppDeploymentFromFileSpec> {
        self.file_specs.lock().unwrap().clone()
    }

    pub fn chart_specs(&self) -> Vec<AppDeploymentFromChartSpec> {
        self.chart_specs.lock().unwrap().clone()
    }

    pub fn set_daemon_sets(&self, payload: Value) {
        *self.daemon_sets.lock().unwrap() = Some(payload);
    }

    /// Successful deployments report these application-level errors.
    pub fn set_partial_errors(&self, errors: &[&str]) {
        *self.partial_errors.lock().unwrap() = errors.iter().map(|e| e.to_string()).collect();
    }

    /// The next call answers with `status` and `body`.
    pub fn fail_next(&self, status: StatusCode, body: &str) {
        *self.failure.lock().unwrap() = Some((status, body.to_string()));
    }

    /// The next call does not settle until the returned sender fires.
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.lock().unwrap() = Some(rx);
        tx
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    async fn settle(&self) -> Result<(), ApiError> {
        let gate = self.gate.lock().unwrap().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        match self.failure.lock().unwrap().take() {
            Some((status, body)) => Err(ApiError::Status { status, body }),
            None => Ok(()),
        }
    }
}

impl DashboardApi for RecordingApi {
    async fn daemon_set_list(&self, namespace: Option<&str>) -> Result<DaemonSetList, ApiError> {
        self.record(format!("GET {}", daemon_set_list_path(namespace)));
        self.settle().await?;
        let payload = self.daemon_sets.lock().unwrap().clone();
        Ok(DaemonSetList(payload.unwrap_or_else(|| {
            serde_json::json!({"listMeta": {"totalItems": 0}, "daemonSets": []})
        })))
    }

    async fn deploy_from_file(
        &self,
        spec: &AppDeploymentFromFileSpec,
    ) -> Result<AppDeploymentFromFileResponse, ApiError> {
        self.record(format!("POST {DEPLOY_FROM_FILE_PATH}"));
        self.file_specs.lock().unwrap().push(spec.clone());
        self.settle().await?;
        Ok(AppDeploymentFromFileResponse {
            name: spec.name.clone(),
            content: spec.content.clone(),
            error: self.partial_errors.lock().unwrap().clone(),
        })
    }

    async fn deploy_from_chart(
        &self,
        spec: &AppDeploymentFromChartSpec,
    ) -> Result<AppDeploymentFromChartResponse, ApiError> {
        self.record(format!("POST {DEPLOY_FROM_CHART_PATH}"));
        self.chart_specs.lock().unwrap().push(spec.clone());
        self.settle().await?;
        Ok(AppDeploymentFromChartResponse {
            chart_name: spec.chart_name.clone(),
            release_name: spec.release_name.clone(),
            namespace: spec.namespace.clone(),
            error: self.partial_errors.lock().unwrap().join(", "),
        })
    }
}

#[derive(Default)]
pub struct RecordingDialog {
    opened: Mutex<Vec<(String, String)>>,
}

impl RecordingDialog {
    pub fn opened(&self) -> Vec<(String, String)> {
        self.opened.lock().unwrap().clone()
    }
}

impl ErrorDialog for RecordingDialog {
    fn open(&self, title: &str, message: &str) {
        self.opened
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingHistory {
    backs: Mutex<Vec<String>>,
}

impl RecordingHistory {
    pub fn backs(&self) -> Vec<String> {
        self.backs.lock().unwrap().clone()
    }
}

impl HistoryService for RecordingHistory {
    fn back(&self, default_state: &str) {
        self.backs.lock().unwrap().push(default_state.to_string());
    }
}
