//! File System Utilities
//!
//! Configuration and log directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("io", "admin-console", "entity-table").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/entity-table/` or `$XDG_CONFIG_HOME/entity-table/`
/// - **macOS**: `~/Library/Application Support/io.admin-console.entity-table/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\admin-console\entity-table\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let config_dir = dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get or create the directory for rolling log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/entity-table/logs/`
/// - **macOS**: `~/Library/Application Support/io.admin-console.entity-table/logs/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\admin-console\entity-table\data\logs\`
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let log_dir = dirs.data_dir().join("logs");

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }

    Ok(log_dir)
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
