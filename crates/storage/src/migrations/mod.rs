#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

mod column_helpers;
mod v1;
mod v2;
mod v3;

use column_helpers::add_column_if_not_exists;
use rusqlite::Connection;

use crate::StorageError;

pub const SCHEMA_VERSION: i32 = 3;

pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    if current_version > SCHEMA_VERSION {
        return Err(StorageError::Migration(format!(
            "database schema version {current_version} is newer than supported {SCHEMA_VERSION}"
        )));
    }

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version < 1i32 {
        tracing::info!("Running migration v1: initial schema");
        conn.execute_batch(v1::SQL)?;
    }

    if current_version < 2i32 {
        tracing::info!("Running migration v2: sub-categories and category heroes");
        for (column, col_type) in v2::DESTINATION_COLUMNS {
            add_column_if_not_exists(conn, "destination", column, col_type)?;
        }
        for (column, col_type) in v2::CAROUSEL_COLUMNS {
            add_column_if_not_exists(conn, "carousel_image", column, col_type)?;
        }
        conn.execute_batch(v2::SQL)?;
    }

    if current_version < 3i32 {
        tracing::info!("Running migration v3: lookup indexes");
        conn.execute_batch(v3::SQL)?;
    }

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}
