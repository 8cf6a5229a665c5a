// File: src/error.rs
// Purpose: Error type for configuration and form snapshot loading

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Validation itself never fails; these cover the surrounding I/O.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid validator config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid form json: {0}")]
    Json(#[from] serde_json::Error),
}
