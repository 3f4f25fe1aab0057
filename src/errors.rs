//! Error types for inventory generation

use thiserror::Error;

use crate::filter::FilterError;
use crate::template::TemplateError;

/// Errors that can occur while producing an inventory
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Configuration error (missing file, bad value, unparsable filter)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The filter expression failed to evaluate for a host
    #[error("filter evaluation failed for host '{host}': {source}")]
    FilterEvaluation {
        host: String,
        #[source]
        source: FilterError,
    },

    /// A group-name template referenced something it cannot resolve
    #[error("group format error in template '{template}': {source}")]
    GroupFormat {
        template: String,
        #[source]
        source: TemplateError,
    },

    /// Cluster-management API request error
    #[error("SCM API error: {0}")]
    Api(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

impl From<reqwest::Error> for InventoryError {
    fn from(err: reqwest::Error) -> Self {
        InventoryError::Api(err.to_string())
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Serialization(err.to_string())
    }
}
