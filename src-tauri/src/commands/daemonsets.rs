use tauri::State;

use crate::models::k8s::DaemonSetList;
use crate::routes::{self, ResolvedState, RouteDescriptor, StateParams};
use crate::DashboardState;

/// Every registered view state, for the frontend router.
#[tauri::command]
pub fn list_states(state: State<'_, DashboardState>) -> Vec<RouteDescriptor> {
    state.registry.states().to_vec()
}

/// Resolves the daemon set list view for `namespace` (all namespaces when
/// omitted). The frontend activates the view only once this returns `Ok`.
#[tauri::command]
pub async fn resolve_daemon_set_list(
    namespace: Option<String>,
    state: State<'_, DashboardState>,
) -> Result<ResolvedState<DaemonSetList>, String> {
    routes::activate_daemon_set_list(&state.registry, &state.api, StateParams { namespace })
        .await
        .map_err(|e| {
            log::error!("routes: {e}");
            e.to_string()
        })
}
