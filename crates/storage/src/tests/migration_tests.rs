use guide_core::Category;
use rusqlite::Connection;
use tempfile::TempDir;

use crate::Storage;
use crate::migrations::{SCHEMA_VERSION, run_migrations};

fn user_version(conn: &Connection) -> i32 {
    conn.pragma_query_value(None, "user_version", |row| row.get(0)).unwrap()
}

#[test]
fn test_fresh_database_reaches_target_version() {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    assert_eq!(user_version(&conn), SCHEMA_VERSION);
}

#[test]
fn test_migrations_are_idempotent() {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    run_migrations(&conn).unwrap();
    assert_eq!(user_version(&conn), SCHEMA_VERSION);
}

#[test]
fn test_v1_database_is_upgraded_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("legacy.db");
    {
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE destination (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 title TEXT NOT NULL,
                 description TEXT NOT NULL,
                 image_url TEXT,
                 category TEXT NOT NULL
             );
             CREATE TABLE carousel_image (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 image_url TEXT NOT NULL,
                 caption TEXT
             );
             INSERT INTO destination (title, description, category)
                 VALUES ('Himalayan Landscapes', 'Peaks', 'Nature');
             PRAGMA user_version = 1;",
        )
        .unwrap();
    }

    let storage = Storage::new(&db_path).unwrap();
    let kept = storage.destination_by_title("Himalayan Landscapes").unwrap().unwrap();
    assert_eq!(kept.sub_category, None);
    assert_eq!(kept.long_description, None);

    // destination already has a row, so only the new table is seeded
    let report = storage.seed_if_empty().unwrap();
    assert_eq!(report.destinations, 0);
    assert!(report.category_heroes > 0);
}

#[test]
fn test_unversioned_site_database_is_adopted() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("site.db");
    {
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE destination (
                 id INTEGER NOT NULL,
                 title VARCHAR(100) NOT NULL,
                 description TEXT NOT NULL,
                 image_url VARCHAR(200),
                 category VARCHAR(50),
                 PRIMARY KEY (id)
             );
             CREATE TABLE carousel_image (
                 id INTEGER NOT NULL,
                 image_url VARCHAR(200) NOT NULL,
                 caption VARCHAR(100),
                 PRIMARY KEY (id)
             );
             INSERT INTO destination (title, description, image_url, category)
                 VALUES ('Holi', 'Festival of colours', '/static/images/holi.jpg', 'Culture');
             INSERT INTO carousel_image (image_url, caption)
                 VALUES ('/static/images/cuisine1.jpg', 'Thali');",
        )
        .unwrap();
    }

    let storage = Storage::new(&db_path).unwrap();
    let holi = storage.destination_by_title("Holi").unwrap().unwrap();
    assert_eq!(holi.category, Category::Culture);
    assert_eq!(holi.sub_category, None);
    assert_eq!(storage.carousel_images(None).unwrap().len(), 1);

    let report = storage.seed_if_empty().unwrap();
    assert_eq!(report.destinations, 0);
    assert_eq!(report.carousel_images, 0);
    assert_eq!(report.category_heroes, 5);
}

#[test]
fn test_newer_schema_is_rejected() {
    let conn = Connection::open_in_memory().unwrap();
    conn.pragma_update(None, "user_version", SCHEMA_VERSION + 1).unwrap();
    let err = run_migrations(&conn).unwrap_err();
    assert!(matches!(err, crate::StorageError::Migration(_)));
}
