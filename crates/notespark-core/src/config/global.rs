//! Global configuration location (`~/.config/notespark/config.toml`)

use std::path::PathBuf;

const CONFIG_DIR: &str = "notespark";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "NOTESPARK_CONFIG_DIR";

/// Path of the global config file, if a config directory can be determined.
///
/// `NOTESPARK_CONFIG_DIR` replaces the platform config directory entirely.
pub fn global_config_path() -> Option<PathBuf> {
    if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        return Some(PathBuf::from(env_dir).join(CONFIG_FILE));
    }

    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Returns true if the config directory is overridden via environment variable
pub fn is_config_dir_overridden() -> bool {
    std::env::var(CONFIG_DIR_ENV_VAR).is_ok()
}
