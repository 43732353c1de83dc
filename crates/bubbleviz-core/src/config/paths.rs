//! Path utilities for bubbleviz configuration files

use std::path::PathBuf;

/// Directory holding all bubbleviz configuration
///
/// Returns: `~/.config/bubbleviz` (platform config dir, falling back to home)
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("bubbleviz")
}

/// Get the default config file path
///
/// Returns: `~/.config/bubbleviz/config.yaml`
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}
