//! Test utilities and module declarations for storage tests.

use crate::Storage;
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_seeded_storage() -> (Storage, TempDir) {
    let (storage, temp_dir) = create_test_storage();
    storage.seed_if_empty().unwrap();
    (storage, temp_dir)
}

mod destination_tests;
mod migration_tests;
