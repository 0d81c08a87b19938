//! Storage layer for culture-guide
//!
//! SQLite database behind an r2d2 pool, versioned schema migrations and the
//! first-run editorial seed.

mod error;
mod migrations;
mod seed;
mod storage;
#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use seed::SeedReport;
pub use storage::{Storage, TableCounts};
