//! File System Utilities
//!
//! Configuration directory lookup.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "widget-kit.toml";

/// Get the library's configuration directory (not created)
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/widget-kit/` or `$XDG_CONFIG_HOME/widget-kit/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.widget-kit/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\widget-kit\config\`
pub fn config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "cyenx", "widget-kit") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    Ok(project_dirs.config_dir().to_path_buf())
}

/// Path of the default configuration file
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
