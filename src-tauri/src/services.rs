// Capabilities the deploy controller is handed instead of reaching for
// globals, plus their Tauri realisations.
use std::sync::Arc;

use serde::Serialize;
use tauri::{AppHandle, Emitter};

pub const ERROR_DIALOG_EVENT: &str = "error-dialog";
pub const HISTORY_BACK_EVENT: &str = "history-back";

/// Modal error reporting.
pub trait ErrorDialog: Send + Sync {
    fn open(&self, title: &str, message: &str);
}

/// Back-navigation. Returns to the previous view, or to `default_state`
/// when there is no history to go back to.
pub trait HistoryService: Send + Sync {
    fn back(&self, default_state: &str);
}

impl<T: ErrorDialog + ?Sized> ErrorDialog for Arc<T> {
    fn open(&self, title: &str, message: &str) {
        (**self).open(title, message)
    }
}

impl<T: HistoryService + ?Sized> HistoryService for Arc<T> {
    fn back(&self, default_state: &str) {
        (**self).back(default_state)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDialogPayload {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryBackPayload {
    pub default_state: String,
}

/// Emits `error-dialog`; the frontend opens the modal.
pub struct EventErrorDialog {
    app: AppHandle,
}

impl EventErrorDialog {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl ErrorDialog for EventErrorDialog {
    fn open(&self, title: &str, message: &str) {
        let payload = ErrorDialogPayload {
            title: title.to_string(),
            message: message.to_string(),
        };
        if let Err(e) = self.app.emit(ERROR_DIALOG_EVENT, payload) {
            log::warn!("dialog: cannot emit {ERROR_DIALOG_EVENT} ({title}): {e}");
        }
    }
}

/// Emits `history-back`; the frontend router performs the navigation.
pub struct EventHistory {
    app: AppHandle,
}

impl EventHistory {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl HistoryService for EventHistory {
    fn back(&self, default_state: &str) {
        let payload = HistoryBackPayload {
            default_state: default_state.to_string(),
        };
        if let Err(e) = self.app.emit(HISTORY_BACK_EVENT, payload) {
            log::warn!("history: cannot emit {HISTORY_BACK_EVENT}: {e}");
        }
    }
}
