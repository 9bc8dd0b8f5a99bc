//! File System Utilities
//!
//! Configuration and data directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "example", "ui-demo").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Resolve the application's configuration directory without creating it
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/ui-demo/` or `$XDG_CONFIG_HOME/ui-demo/`
/// - **macOS**: `~/Library/Application Support/com.example.ui-demo/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\example\ui-demo\config\`
pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Get the data directory, used for log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/ui-demo/`
/// - **macOS**: `~/Library/Application Support/com.example.ui-demo/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\example\ui-demo\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}

