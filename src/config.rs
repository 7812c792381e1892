//! Configuration for the demonstration CLI: which policy to run, the
//! ordered strip-filter rules, and where to find the class descriptor
//! stream. Loaded from an optional TOML file and overridden by CLI flags,
//! mirroring the teacher's layered config/CLI precedence.

use crate::model::TreeShakerMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::TreeShakeError;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Tree-shaker policy to run. Defaults to `conservative`.
    #[serde(default)]
    pub mode: TreeShakerMode,

    /// Path to the JSON descriptor stream (a list of `Clazz` values plus
    /// their `isRoot` flags). Overridden by the CLI's positional argument.
    #[serde(default)]
    pub descriptors: Option<PathBuf>,

    /// Ant-style glob patterns to explicitly include, evaluated in order
    /// before the two auto-appended terminal patterns.
    #[serde(default)]
    pub strip_include: Vec<String>,

    /// Ant-style glob patterns to explicitly exclude, evaluated in order
    /// before the two auto-appended terminal patterns.
    #[serde(default)]
    pub strip_exclude: Vec<String>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, TreeShakeError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| TreeShakeError::ReadConfig {
                path: path.to_path_buf(),
                source,
            })?;
        toml::from_str(&contents).map_err(|source| TreeShakeError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look for `treeshake.toml` in `dir`; fall back to defaults if absent.
    pub fn from_default_locations(dir: &Path) -> Result<Self, TreeShakeError> {
        let candidate = dir.join("treeshake.toml");
        if candidate.exists() {
            Self::from_file(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
