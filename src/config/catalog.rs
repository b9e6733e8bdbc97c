//! Survey catalog configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where surveys come from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog file; the built-in catalog is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(ValidationError::EmptyCatalogPath);
        }
        Ok(())
    }
}
