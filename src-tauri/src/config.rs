use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_API_BASE_URL: &str = "http://localhost:9090/";

/// Runtime settings for the desktop shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// Root of the dashboard backend; `api/v1/...` paths are joined beneath it.
    pub api_base_url: String,
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Loads the config file (if any) and applies environment overrides.
    ///
    /// Lookup order for the file: `DASHBOARD_CONFIG`, then
    /// `<config_dir>/k8s-dashboard/config.yaml`. A missing file is not an
    /// error; defaults are used instead.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match config_path() {
            Some(path) if path.exists() => Self::from_path(&path)?,
            _ => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `DASHBOARD_API_URL` replaces the configured base URL when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("DASHBOARD_API_URL") {
            if !url.trim().is_empty() {
                self.api_base_url = url.trim().to_string();
            }
        }
        self
    }

    /// Base URL with exactly one trailing `/`.
    pub fn normalized_base_url(&self) -> String {
        format!("{}/", self.api_base_url.trim().trim_end_matches('/'))
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

fn config_path() -> Option<PathBuf> {
    std::env::var("DASHBOARD_CONFIG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join("k8s-dashboard").join("config.yaml")))
}
