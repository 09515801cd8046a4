// Deploy form: chart repository and chart picking, file submission, and
// chart submission against the dashboard backend.
mod form;
mod progress;

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::api::DashboardApi;
use crate::error::ApiError;
use crate::models::chart::{ChartCatalogEntry, ChartRepository, SELECTED_CLASS};
use crate::models::deploy::{AppDeploymentFromChartSpec, AppDeploymentFromFileSpec, DeploymentErrors};
use crate::routes::WORKLOADS_STATE;
use crate::services::{ErrorDialog, HistoryService};

pub use form::{DeployFormView, DeploymentFile, DeploymentFormState};
pub use progress::{DeployProgress, ProgressGuard};

pub const PARTIAL_FAILURE_TITLE: &str = "Deployment has been partly completed";
pub const FILE_FAILURE_TITLE: &str = "Deploying file has failed";
pub const CHART_FAILURE_TITLE: &str = "Deploying chart has failed";

/// Namespace a chart release lands in when the form leaves it blank.
const DEFAULT_NAMESPACE: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    InvalidForm,
    NoChartSelected,
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DeployOutcome {
    /// Nothing was sent.
    Skipped { reason: SkipReason },
    /// The backend accepted the deployment; `partial_errors` lists the parts
    /// it could not create.
    Deployed { partial_errors: Vec<String> },
    /// The request itself failed. The form stays open.
    Failed { message: String },
}

pub struct DeployFromChartController<A, D, H> {
    api: A,
    error_dialog: D,
    history: H,
    form: Mutex<DeploymentFormState>,
    progress: DeployProgress,
}

impl<A, D, H> DeployFromChartController<A, D, H>
where
    A: DashboardApi,
    D: ErrorDialog,
    H: HistoryService,
{
    pub fn new(api: A, error_dialog: D, history: H) -> Self {
        Self {
            api,
            error_dialog,
            history,
            form: Mutex::new(DeploymentFormState::default()),
            progress: DeployProgress::default(),
        }
    }

    fn form(&self) -> MutexGuard<'_, DeploymentFormState> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> DeployFormView {
        DeployFormView {
            form: self.form().clone(),
            repositories: ChartRepository::ALL.to_vec(),
            deploy_disabled: self.is_deploy_disabled(),
        }
    }

    /// True while a deployment is in flight.
    pub fn is_deploy_disabled(&self) -> bool {
        self.progress.is_active()
    }

    /// Starts the form over, as when the view is first opened.
    pub fn reset(&self) {
        *self.form() = DeploymentFormState::default();
    }

    pub fn set_file(&self, name: String, content: String) {
        self.form().file = DeploymentFile { name, content };
    }

    pub fn set_form_valid(&self, valid: bool) {
        self.form().valid = valid;
    }

    pub fn set_release(&self, release_name: String, namespace: String) {
        let mut form = self.form();
        form.release_name = release_name;
        form.namespace = namespace;
    }

    /// Replaces the chart list with `repo_name`'s catalog and clears the
    /// chart selection.
    pub fn select_repo(&self, repo_name: &str) -> Vec<ChartCatalogEntry> {
        let repository = ChartRepository::from_name(repo_name);
        let mut form = self.form();
        form.selected_repository = repository;
        form.charts = repository.charts();
        form.selected_chart = None;
        form.charts.clone()
    }

    /// Marks the chart called `chart_name` as selected and unmarks the rest.
    ///
    /// The name is recorded even when no chart in the list carries it.
    pub fn select_chart(&self, chart_name: &str) -> Vec<ChartCatalogEntry> {
        let mut form = self.form();
        for chart in form.charts.iter_mut() {
            chart.selected = if chart.name == chart_name {
                SELECTED_CLASS.to_string()
            } else {
                String::new()
            };
        }
        form.selected_chart = Some(chart_name.to_string());
        form.charts.clone()
    }

    /// Leaves the form without deploying. The form state is discarded.
    pub fn cancel(&self) {
        self.reset();
        self.history.back(WORKLOADS_STATE);
    }

    /// Submits the picked file to `api/v1/appdeploymentfromfile`.
    pub async fn deploy(&self) -> DeployOutcome {
        let spec = {
            let form = self.form();
            if !form.valid {
                log::debug!("deploy: form is invalid, nothing sent");
                return skipped(SkipReason::InvalidForm);
            }
            AppDeploymentFromFileSpec {
                name: form.file.name.clone(),
                content: form.file.content.clone(),
            }
        };

        let Some(guard) = self.progress.begin() else {
            log::debug!("deploy: already in progress, nothing sent");
            return skipped(SkipReason::InProgress);
        };
        let result = self.api.deploy_from_file(&spec).await;
        drop(guard);

        self.settle(result, FILE_FAILURE_TITLE)
    }

    /// Installs the selected chart as a release.
    pub async fn deploy_chart(&self) -> DeployOutcome {
        let spec = {
            let form = self.form();
            if !form.valid {
                log::debug!("deploy: form is invalid, nothing sent");
                return skipped(SkipReason::InvalidForm);
            }
            let Some(chart_name) = form.selected_chart.clone() else {
                log::debug!("deploy: no chart selected, nothing sent");
                return skipped(SkipReason::NoChartSelected);
            };
            let namespace = match form.namespace.trim() {
                "" => DEFAULT_NAMESPACE.to_string(),
                ns => ns.to_string(),
            };
            AppDeploymentFromChartSpec {
                chart_name,
                release_name: form.release_name.trim().to_string(),
                namespace,
            }
        };

        let Some(guard) = self.progress.begin() else {
            log::debug!("deploy: already in progress, nothing sent");
            return skipped(SkipReason::InProgress);
        };
        let result = self.api.deploy_from_chart(&spec).await;
        drop(guard);

        self.settle(result, CHART_FAILURE_TITLE)
    }

    /// Reports a settled request. Runs after the in-progress flag is
    /// released. A successful deployment closes and discards the form.
    fn settle<R>(&self, result: Result<R, ApiError>, failure_title: &str) -> DeployOutcome
    where
        R: DeploymentErrors,
    {
        match result {
            Ok(response) => {
                let partial_errors = response.deployment_errors();
                log::info!(
                    "Deployment of {} is completed ({} error(s))",
                    response.deployment_name(),
                    partial_errors.len()
                );
                if !partial_errors.is_empty() {
                    self.error_dialog
                        .open(PARTIAL_FAILURE_TITLE, &partial_errors.join("\n"));
                }
                self.reset();
                self.history.back(WORKLOADS_STATE);
                DeployOutcome::Deployed { partial_errors }
            }
            Err(err) => {
                log::error!("Error deploying application: {err}");
                let message = err.payload();
                self.error_dialog.open(failure_title, &message);
                DeployOutcome::Failed { message }
            }
        }
    }
}

fn skipped(reason: SkipReason) -> DeployOutcome {
    DeployOutcome::Skipped { reason }
}
