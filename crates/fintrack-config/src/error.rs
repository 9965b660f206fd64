use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while reading or writing the config document. Each carries the file involved.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access config at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config at {} is not valid JSON: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("config could not be encoded: {0}")]
    Encode(String),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> ConfigError {
        let path = path.into();
        move |source| ConfigError::Io { path, source }
    }

    /// File the failure concerns, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ConfigError::Io { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::Encode(_) => None,
        }
    }
}
