use dirs::home_dir;
use std::{env, path::PathBuf};

use fintrack_config::Config;

pub const HOME_ENV_VAR: &str = "FINTRACK_HOME";
const DEFAULT_DIR_NAME: &str = ".fintrack";
const DATA_DIR: &str = "data";

/// Returns the application-specific directory, defaulting to `~/.fintrack`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV_VAR) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding the record documents when the config does not name one.
pub fn default_data_dir() -> PathBuf {
    app_data_dir().join(DATA_DIR)
}

pub fn resolve_data_root(config: &Config) -> PathBuf {
    config.data_root.clone().unwrap_or_else(default_data_dir)
}
