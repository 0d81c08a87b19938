//! Typed error enum for the storage layer.
//!
//! Lets callers tell pool exhaustion apart from SQL failures without
//! downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL failure, including rows whose columns do not convert.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}
