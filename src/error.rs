//! Crate-level error type for the ambient config/CLI layer. The engine
//! itself never returns a `Result` — spec-wise it has no failure modes —
//! so every variant here belongs to intake, config, or the strip filter.

use std::path::PathBuf;
use thiserror::Error;

use crate::strip::StripFilterError;

#[derive(Debug, Error)]
pub enum TreeShakeError {
    #[error("failed to read config file {path}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read descriptor stream {path}")]
    ReadDescriptors {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse descriptor stream {path}")]
    ParseDescriptors {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    StripFilter(#[from] StripFilterError),
}
