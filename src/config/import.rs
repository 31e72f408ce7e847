//! Bulk import configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::handlers::user::DEFAULT_MAX_IMPORT_ROWS;

/// Bulk import configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    /// Largest batch accepted in one request
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

impl ImportConfig {
    /// Validate import configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_rows == 0 {
            return Err(ValidationError::InvalidImportLimit);
        }
        Ok(())
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_rows: default_max_rows(),
        }
    }
}

fn default_max_rows() -> usize {
    DEFAULT_MAX_IMPORT_ROWS
}
