use thiserror::Error;

/// Errors raised while interpreting core content values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
}
