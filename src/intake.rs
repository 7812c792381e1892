//! JSON intake for the class descriptor stream the surrounding compiler
//! driver would otherwise feed to the engine one class at a time. This is
//! demonstration-harness plumbing, not a redesign of the engine's ingress
//! contract — it exists so the CLI has something concrete to read.

use crate::error::TreeShakeError;
use crate::model::Clazz;
use serde::Deserialize;
use std::path::Path;

/// One entry in the descriptor stream: a class plus whether it is a root.
#[derive(Debug, Clone, Deserialize)]
pub struct DescriptorEntry {
    #[serde(flatten)]
    pub class: Clazz,
    #[serde(default)]
    pub is_root: bool,
}

pub fn load_descriptors(path: &Path) -> Result<Vec<DescriptorEntry>, TreeShakeError> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| TreeShakeError::ReadDescriptors {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|source| TreeShakeError::ParseDescriptors {
        path: path.to_path_buf(),
        source,
    })
}
