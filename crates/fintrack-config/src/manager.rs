use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError};

const CONFIG_FILE_NAME: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Loads and stores the [`Config`] document at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Manager for `<base>/config.json`, creating `base` if needed.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base).map_err(ConfigError::io(&base))?;
        Ok(Self::new(base.join(CONFIG_FILE_NAME)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the stored configuration, or the defaults when none has been saved.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let path = &self.config_path;
        if !path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(path).map_err(ConfigError::io(path))?;
        serde_json::from_str(&data).map_err(|err| ConfigError::Parse {
            path: path.clone(),
            message: err.to_string(),
        })
    }

    /// Writes the document to a sibling temp file, then renames it over the target.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::io(parent))?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Encode(err.to_string()))?;
        let tmp = tmp_path(&self.config_path);
        write_synced(&tmp, &json)?;
        if let Err(err) = fs::rename(&tmp, &self.config_path) {
            let _ = fs::remove_file(&tmp);
            return Err(ConfigError::io(&self.config_path)(err));
        }
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_synced(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path).map_err(ConfigError::io(path))?;
    file.write_all(data.as_bytes())
        .and_then(|_| file.sync_all())
        .map_err(ConfigError::io(path))
}
