//! File System Utilities
//!
//! Configuration directory management and default output locations.

use crate::error::{Error, Result};
use directories::{ProjectDirs, UserDirs};
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "equipment-dashboard", "equipment-dashboard").ok_or_else(|| {
        Error::Invalid {
            message: "Could not determine project directories".to_string(),
        }
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/equipment-dashboard/` or `$XDG_CONFIG_HOME/equipment-dashboard/`
/// - **macOS**: `~/Library/Application Support/com.equipment-dashboard.equipment-dashboard/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\equipment-dashboard\equipment-dashboard\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get the data directory for logs and fallback report storage
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/equipment-dashboard/`
/// - **macOS**: `~/Library/Application Support/com.equipment-dashboard.equipment-dashboard/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\equipment-dashboard\equipment-dashboard\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}

/// Default place for downloaded reports: the user's Downloads folder,
/// else `<data dir>/reports`
pub fn default_report_dir() -> Result<PathBuf> {
    if let Some(downloads) = UserDirs::new().and_then(|dirs| dirs.download_dir().map(PathBuf::from)) {
        return Ok(downloads);
    }
    Ok(get_or_create_data_dir()?.join("reports"))
}
