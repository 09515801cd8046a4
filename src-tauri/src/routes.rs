// View states the shell knows about and the data they resolve before
// activation.
use serde::{Deserialize, Serialize};

use crate::api::DashboardApi;
use crate::error::ApiError;
use crate::models::k8s::DaemonSetList;

pub const CHROME_STATE: &str = "chrome";
pub const WORKLOADS_STATE: &str = "workloads";
pub const DAEMON_SET_LIST_STATE: &str = "daemonsetlist";
/// Named view slot the action bar template renders into.
pub const ACTIONBAR_VIEW: &str = "actionbar";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    pub label: String,
    pub parent: String,
}

/// A named, URL-addressable view configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor {
    pub name: String,
    pub url_pattern: String,
    pub parent_state: String,
    pub breadcrumb: Breadcrumb,
    pub view_template: String,
    /// Named view slot `action_bar_template` renders into.
    pub action_bar_view: String,
    pub action_bar_template: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateParams {
    #[serde(default)]
    pub namespace: Option<String>,
}

/// A state whose resolver has settled; only these are handed to the view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedState<T> {
    pub state: RouteDescriptor,
    pub params: StateParams,
    pub data: T,
}

#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("state {0} is already registered")]
    Duplicate(String),

    #[error("unknown state {0}")]
    UnknownState(String),

    #[error("resolving {state} failed: {source}")]
    Resolve {
        state: String,
        #[source]
        source: ApiError,
    },
}

/// Registered states, kept in registration order. Descriptors never change
/// once registered.
#[derive(Debug, Default)]
pub struct StateRegistry {
    states: Vec<RouteDescriptor>,
}

impl StateRegistry {
    /// Registry with every state this shell serves.
    pub fn bootstrap() -> Self {
        Self {
            states: vec![daemon_set_list_state()],
        }
    }

    pub fn register(&mut self, descriptor: RouteDescriptor) -> Result<(), NavigationError> {
        if self.get(&descriptor.name).is_some() {
            return Err(NavigationError::Duplicate(descriptor.name));
        }
        log::debug!("routes: registered {} at {}", descriptor.name, descriptor.url_pattern);
        self.states.push(descriptor);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&RouteDescriptor> {
        self.states.iter().find(|s| s.name == name)
    }

    pub fn states(&self) -> &[RouteDescriptor] {
        &self.states
    }
}

pub fn daemon_set_list_state() -> RouteDescriptor {
    RouteDescriptor {
        name: DAEMON_SET_LIST_STATE.to_string(),
        url_pattern: "/daemonset/:namespace".to_string(),
        parent_state: CHROME_STATE.to_string(),
        breadcrumb: Breadcrumb {
            label: "Daemon Sets".to_string(),
            parent: WORKLOADS_STATE.to_string(),
        },
        view_template: "daemonsetlist/daemonsetlist.html".to_string(),
        action_bar_view: ACTIONBAR_VIEW.to_string(),
        action_bar_template: "daemonsetlist/actionbar.html".to_string(),
    }
}

/// Fetches the daemon set list for `params.namespace` (all namespaces when
/// unset). Errors are returned as-is.
pub async fn resolve_daemon_set_list<A: DashboardApi>(
    api: &A,
    params: &StateParams,
) -> Result<DaemonSetList, ApiError> {
    api.daemon_set_list(params.namespace.as_deref()).await
}

/// Navigates to the daemon set list: the state is only returned once its
/// data has resolved.
pub async fn activate_daemon_set_list<A: DashboardApi>(
    registry: &StateRegistry,
    api: &A,
    params: StateParams,
) -> Result<ResolvedState<DaemonSetList>, NavigationError> {
    let state = registry
        .get(DAEMON_SET_LIST_STATE)
        .cloned()
        .ok_or_else(|| NavigationError::UnknownState(DAEMON_SET_LIST_STATE.to_string()))?;

    let data = resolve_daemon_set_list(api, &params)
        .await
        .map_err(|source| NavigationError::Resolve {
            state: state.name.clone(),
            source,
        })?;

    log::info!(
        "routes: {} resolved for namespace {:?} ({} item(s))",
        state.name,
        params.namespace,
        data.total_items().unwrap_or(0)
    );
    Ok(ResolvedState { state, params, data })
}
