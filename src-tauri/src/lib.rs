pub mod api;
pub mod commands;
pub mod config;
pub mod deploy;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod test_support;

use tauri::Manager;

use crate::api::HttpDashboardApi;
use crate::config::DashboardConfig;
use crate::deploy::DeployFromChartController;
use crate::routes::StateRegistry;
use crate::services::{EventErrorDialog, EventHistory};

/// Tauri managed state shared by the view commands.
pub struct DashboardState {
    pub api: HttpDashboardApi,
    pub registry: StateRegistry,
}

pub type AppDeployController =
    DeployFromChartController<HttpDashboardApi, EventErrorDialog, EventHistory>;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let (config, config_error) = match DashboardConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (DashboardConfig::default().with_env_overrides(), Some(e)),
    };

    tauri::Builder::default()
        .setup(move |app| {
            app.handle().plugin(
                tauri_plugin_log::Builder::default()
                    .level(config.log_level())
                    .build(),
            )?;
            if let Some(e) = config_error {
                log::warn!("config: {e}, using defaults");
            }
            log::info!("config: backend at {}", config.normalized_base_url());

            let api = HttpDashboardApi::new(&config)?;
            let handle = app.handle().clone();
            app.manage(DeployFromChartController::new(
                api.clone(),
                EventErrorDialog::new(handle.clone()),
                EventHistory::new(handle),
            ));
            app.manage(DashboardState {
                api,
                registry: StateRegistry::bootstrap(),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::daemonsets::list_states,
            commands::daemonsets::resolve_daemon_set_list,
            commands::deploy::list_chart_repositories,
            commands::deploy::open_deploy_form,
            commands::deploy::select_repo,
            commands::deploy::select_chart,
            commands::deploy::set_deploy_file,
            commands::deploy::set_deploy_form_validity,
            commands::deploy::set_chart_release,
            commands::deploy::get_deploy_form,
            commands::deploy::is_deploy_disabled,
            commands::deploy::deploy,
            commands::deploy::deploy_chart,
            commands::deploy::cancel_deploy,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
