// Payloads from the dashboard backend's workload endpoints.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `GET api/v1/daemonset/{namespace}`.
///
/// Handed to the view untouched; the shell never interprets it beyond the
/// accessors below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaemonSetList(pub Value);

impl DaemonSetList {
    /// `listMeta.totalItems`, when the backend reports it.
    pub fn total_items(&self) -> Option<u64> {
        self.0.get("listMeta")?.get("totalItems")?.as_u64()
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}
