//! Dashboard Configuration
//!
//! Backend address, report location and logging options, persisted as TOML.

use crate::constants::DEFAULT_API_BASE_URL;
use crate::error::Result;
use crate::helpers::{default_report_dir, get_or_create_config_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackendConfig {
    /// Base address, e.g. `http://127.0.0.1:8000/api`
    pub base_url: String,
    /// Whole-request timeout; absent means no timeout
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Where PDF reports go
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    pub output_dir: Option<PathBuf>,
}

impl ReportConfig {
    /// Configured directory, else the platform default
    pub fn resolve_dir(&self) -> Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_report_dir(),
        }
    }
}

/// Logging options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Also write a daily log file under the data directory
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfig {
    pub backend: BackendConfig,
    pub reports: ReportConfig,
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Replace the backend address when an override is present
    pub fn override_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.backend.base_url = url.trim().to_string();
        }
        self
    }
}

/// Get or create the default configuration file path
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("dashboard.toml");

    #[cfg(debug_assertions)]
    info!("Dashboard config file: {}", path.display());

    if !path.exists() {
        save_config_to(&path, &DashboardConfig::default())?;
    }

    Ok(path)
}

/// Parse configuration text; blank text yields defaults
pub fn parse_config(value: &str) -> Result<DashboardConfig> {
    if value.trim().is_empty() {
        return Ok(DashboardConfig::default());
    }
    Ok(toml::from_str(value)?)
}

/// Load configuration from a file, defaults if it does not exist
pub fn load_config_from(path: &Path) -> Result<DashboardConfig> {
    if !path.exists() {
        return Ok(DashboardConfig::default());
    }
    let value = std::fs::read_to_string(path)?;
    parse_config(&value)
}

/// Load configuration from the platform config directory
pub fn load_config() -> Result<DashboardConfig> {
    let path = get_config_path()?;
    info!(path = ?path, "Loading config file");
    load_config_from(&path)
}

/// Save configuration to a file
pub fn save_config_to(path: &Path, config: &DashboardConfig) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
