use serde::{Deserialize, Serialize};

use crate::models::chart::{ChartCatalogEntry, ChartRepository};

/// File picked in the deploy form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentFile {
    pub name: String,
    pub content: String,
}

/// Everything the deploy form binds to, except the in-progress flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentFormState {
    pub file: DeploymentFile,
    pub selected_repository: ChartRepository,
    pub selected_chart: Option<String>,
    pub charts: Vec<ChartCatalogEntry>,
    pub release_name: String,
    pub namespace: String,
    /// Validity reported by the bound form.
    pub valid: bool,
}

/// Form state as the frontend renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployFormView {
    #[serde(flatten)]
    pub form: DeploymentFormState,
    pub repositories: Vec<ChartRepository>,
    pub deploy_disabled: bool,
}
