//! Typed error enum for the service layer.

use guide_storage::StorageError;
use thiserror::Error;

/// Service-layer error: a storage failure or a lookup that found nothing.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, pool, migration).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// The requested page has no backing row.
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
