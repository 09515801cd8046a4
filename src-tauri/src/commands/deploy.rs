// Deploy form operations. One controller lives in managed state; its form
// starts over on `open_deploy_form` and whenever the controller navigates
// away (cancel or successful deploy).
use tauri::State;

use crate::deploy::{DeployFormView, DeployOutcome};
use crate::models::chart::{ChartCatalogEntry, ChartRepositoryInfo};
use crate::AppDeployController;

#[tauri::command]
pub fn list_chart_repositories() -> Vec<ChartRepositoryInfo> {
    ChartRepositoryInfo::all()
}

/// Called by the view when it is created; returns the fresh form.
#[tauri::command]
pub fn open_deploy_form(controller: State<'_, AppDeployController>) -> DeployFormView {
    controller.reset();
    controller.snapshot()
}

#[tauri::command]
pub fn select_repo(
    repo_name: String,
    controller: State<'_, AppDeployController>,
) -> Vec<ChartCatalogEntry> {
    controller.select_repo(&repo_name)
}

#[tauri::command]
pub fn select_chart(
    chart_name: String,
    controller: State<'_, AppDeployController>,
) -> Vec<ChartCatalogEntry> {
    controller.select_chart(&chart_name)
}

#[tauri::command]
pub fn set_deploy_file(name: String, content: String, controller: State<'_, AppDeployController>) {
    controller.set_file(name, content);
}

/// Called by the view whenever the bound form's validity changes.
#[tauri::command]
pub fn set_deploy_form_validity(valid: bool, controller: State<'_, AppDeployController>) {
    controller.set_form_valid(valid);
}

#[tauri::command]
pub fn set_chart_release(
    release_name: String,
    namespace: String,
    controller: State<'_, AppDeployController>,
) {
    controller.set_release(release_name, namespace);
}

#[tauri::command]
pub fn get_deploy_form(controller: State<'_, AppDeployController>) -> DeployFormView {
    controller.snapshot()
}

#[tauri::command]
pub fn is_deploy_disabled(controller: State<'_, AppDeployController>) -> bool {
    controller.is_deploy_disabled()
}

/// Outcomes are reported to the user through `error-dialog` and
/// `history-back` events; the returned value is informational.
#[tauri::command]
pub async fn deploy(controller: State<'_, AppDeployController>) -> Result<DeployOutcome, String> {
    Ok(controller.deploy().await)
}

#[tauri::command]
pub async fn deploy_chart(
    controller: State<'_, AppDeployController>,
) -> Result<DeployOutcome, String> {
    Ok(controller.deploy_chart().await)
}

#[tauri::command]
pub fn cancel_deploy(controller: State<'_, AppDeployController>) {
    controller.cancel();
}
