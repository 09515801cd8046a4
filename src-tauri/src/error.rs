use std::path::PathBuf;

use http::StatusCode;

/// Failures talking to the dashboard backend.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("invalid backend url {0}")]
    InvalidUrl(String),

    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Text shown to the user in the error dialog.
    ///
    /// When the server answered, this is its raw error body; otherwise the
    /// error's own description.
    pub fn payload(&self) -> String {
        match self {
            ApiError::Status { body, .. } if !body.trim().is_empty() => body.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
