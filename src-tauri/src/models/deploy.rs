// Request/response bodies for the deployment endpoints.
use serde::{Deserialize, Serialize};

/// Body of `POST api/v1/appdeploymentfromfile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDeploymentFromFileSpec {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDeploymentFromFileResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
    /// Sub-resources the backend failed to create. Non-empty means the
    /// deployment went through only partly.
    #[serde(default)]
    pub error: Vec<String>,
}

/// Body of `POST api/v1/appdeploymentfromchart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDeploymentFromChartSpec {
    pub chart_name: String,
    pub release_name: String,
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDeploymentFromChartResponse {
    #[serde(default)]
    pub chart_name: String,
    #[serde(default)]
    pub release_name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub error: String,
}

/// Application-level errors carried by a successful deployment response.
pub trait DeploymentErrors {
    /// What was deployed, for logs.
    fn deployment_name(&self) -> &str;

    fn deployment_errors(&self) -> Vec<String>;
}

impl DeploymentErrors for AppDeploymentFromFileResponse {
    fn deployment_name(&self) -> &str {
        &self.name
    }

    fn deployment_errors(&self) -> Vec<String> {
        self.error.clone()
    }
}

impl DeploymentErrors for AppDeploymentFromChartResponse {
    fn deployment_name(&self) -> &str {
        if self.release_name.is_empty() {
            &self.chart_name
        } else {
            &self.release_name
        }
    }

    fn deployment_errors(&self) -> Vec<String> {
        if self.error.is_empty() {
            Vec::new()
        } else {
            vec![self.error.clone()]
        }
    }
}
