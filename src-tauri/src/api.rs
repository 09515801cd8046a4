// Dashboard backend REST client.
use std::future::Future;
use std::sync::Arc;

use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use crate::config::DashboardConfig;
use crate::error::ApiError;
use crate::models::deploy::{
    AppDeploymentFromChartResponse, AppDeploymentFromChartSpec, AppDeploymentFromFileResponse,
    AppDeploymentFromFileSpec,
};
use crate::models::k8s::DaemonSetList;

pub const DEPLOY_FROM_FILE_PATH: &str = "api/v1/appdeploymentfromfile";
pub const DEPLOY_FROM_CHART_PATH: &str = "api/v1/appdeploymentfromchart";

/// `api/v1/daemonset/{namespace}`; the segment is empty when no namespace
/// is given.
pub fn daemon_set_list_path(namespace: Option<&str>) -> String {
    format!("api/v1/daemonset/{}", namespace.unwrap_or(""))
}

/// Backend calls the views depend on. Each call is issued once; there is no
/// retry, timeout or cancellation.
pub trait DashboardApi: Send + Sync {
    fn daemon_set_list(
        &self,
        namespace: Option<&str>,
    ) -> impl Future<Output = Result<DaemonSetList, ApiError>> + Send;

    fn deploy_from_file(
        &self,
        spec: &AppDeploymentFromFileSpec,
    ) -> impl Future<Output = Result<AppDeploymentFromFileResponse, ApiError>> + Send;

    fn deploy_from_chart(
        &self,
        spec: &AppDeploymentFromChartSpec,
    ) -> impl Future<Output = Result<AppDeploymentFromChartResponse, ApiError>> + Send;
}

impl<T: DashboardApi> DashboardApi for Arc<T> {
    fn daemon_set_list(
        &self,
        namespace: Option<&str>,
    ) -> impl Future<Output = Result<DaemonSetList, ApiError>> + Send {
        (**self).daemon_set_list(namespace)
    }

    fn deploy_from_file(
        &self,
        spec: &AppDeploymentFromFileSpec,
    ) -> impl Future<Output = Result<AppDeploymentFromFileResponse, ApiError>> + Send {
        (**self).deploy_from_file(spec)
    }

    fn deploy_from_chart(
        &self,
        spec: &AppDeploymentFromChartSpec,
    ) -> impl Future<Output = Result<AppDeploymentFromChartResponse, ApiError>> + Send {
        (**self).deploy_from_chart(spec)
    }
}

/// `DashboardApi` over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpDashboardApi {
    pub fn new(config: &DashboardConfig) -> Result<Self, ApiError> {
        let base = config.normalized_base_url();
        let base_url = Url::parse(&base).map_err(|e| ApiError::InvalidUrl(format!("{base}: {e}")))?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    /// Non-2xx answers become `ApiError::Status` carrying the raw body.
    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status { status, body });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl DashboardApi for HttpDashboardApi {
    async fn daemon_set_list(&self, namespace: Option<&str>) -> Result<DaemonSetList, ApiError> {
        let url = self.endpoint(&daemon_set_list_path(namespace))?;
        log::info!("daemonset: GET {url}");
        let response = self.client.get(url).send().await?;
        Self::read_json(response).await
    }

    async fn deploy_from_file(
        &self,
        spec: &AppDeploymentFromFileSpec,
    ) -> Result<AppDeploymentFromFileResponse, ApiError> {
        let url = self.endpoint(DEPLOY_FROM_FILE_PATH)?;
        log::info!("deploy: POST {url} ({})", spec.name);
        let response = self.client.post(url).json(spec).send().await?;
        Self::read_json(response).await
    }

    async fn deploy_from_chart(
        &self,
        spec: &AppDeploymentFromChartSpec,
    ) -> Result<AppDeploymentFromChartResponse, ApiError> {
        let url = self.endpoint(DEPLOY_FROM_CHART_PATH)?;
        log::info!(
            "deploy: POST {url} (chart {} as {:?})",
            spec.chart_name,
            spec.release_name
        );
        let response = self.client.post(url).json(spec).send().await?;
        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_segment_is_substituted_verbatim() {
        assert_eq!(daemon_set_list_path(None), "api/v1/daemonset/");
        assert_eq!(daemon_set_list_path(Some("")), "api/v1/daemonset/");
        assert_eq!(daemon_set_list_path(Some("kube-system")), "api/v1/daemonset/kube-system");
    }

    #[test]
    fn endpoints_join_under_base_path() {
        let api = HttpDashboardApi::new(&DashboardConfig {
            api_base_url: "https://example.com/dashboard".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            api.endpoint(DEPLOY_FROM_FILE_PATH).unwrap().as_str(),
            "https://example.com/dashboard/api/v1/appdeploymentfromfile"
        );
        assert_eq!(
            api.endpoint(&daemon_set_list_path(None)).unwrap().as_str(),
            "https://example.com/dashboard/api/v1/daemonset/"
        );
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = HttpDashboardApi::new(&DashboardConfig {
            api_base_url: "not a url".to_string(),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
