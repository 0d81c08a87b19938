//! Migration v1: initial schema
//!
//! Table names are singular, matching databases written by earlier
//! deployments of the site, which carry no `user_version`.

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS destinations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    image_url TEXT,
    category TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS carousel_images (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    image_url TEXT NOT NULL,
    caption TEXT
);
";
