use serde::Serialize;

use super::{Storage, get_conn};
use crate::StorageError;

/// Row counts per content table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub destinations: u64,
    pub category_heroes: u64,
    pub carousel_images: u64,
}

impl Storage {
    /// Count rows in every content table.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn counts(&self) -> Result<TableCounts, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count = |table: &str| -> Result<u64, StorageError> {
            let n: i64 =
                conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
            Ok(n as u64)
        };
        Ok(TableCounts {
            destinations: count("destination")?,
            category_heroes: count("category_hero")?,
            carousel_images: count("carousel_image")?,
        })
    }
}
