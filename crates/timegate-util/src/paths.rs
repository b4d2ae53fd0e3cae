//! Default paths for timegate components
//!
//! The catalog file is user-readable by default (no root required):
//! `$XDG_CONFIG_HOME/timegate/catalog.toml` or `~/.config/timegate/catalog.toml`.

use std::path::PathBuf;

/// Environment variable for overriding the catalog path
pub const TIMEGATE_CONFIG_ENV: &str = "TIMEGATE_CONFIG";

/// Catalog filename within the config directory
const CONFIG_FILENAME: &str = "catalog.toml";

/// Application subdirectory name
const APP_DIR: &str = "timegate";

/// Get the default catalog path.
///
/// Order of precedence:
/// 1. `$TIMEGATE_CONFIG` environment variable (if set)
/// 2. `$XDG_CONFIG_HOME/timegate/catalog.toml` (if XDG_CONFIG_HOME is set)
/// 3. `~/.config/timegate/catalog.toml`
/// 4. `/etc/timegate/catalog.toml` (last resort)
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(TIMEGATE_CONFIG_ENV) {
        return PathBuf::from(path);
    }

    config_path_without_env()
}

/// Get the catalog path without checking the TIMEGATE_CONFIG env var.
pub fn config_path_without_env() -> PathBuf {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(config_home).join(APP_DIR).join(CONFIG_FILENAME);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILENAME);
    }

    PathBuf::from("/etc").join(APP_DIR).join(CONFIG_FILENAME)
}
