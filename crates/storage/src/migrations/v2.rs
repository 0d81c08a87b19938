//! Migration v2: sub-categories, long descriptions and category banners

pub(super) const DESTINATION_COLUMNS: &[(&str, &str)] =
    &[("long_description", "TEXT"), ("sub_category", "TEXT")];

pub(super) const CAROUSEL_COLUMNS: &[(&str, &str)] = &[("sub_category", "TEXT")];

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS category_heroes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    category TEXT NOT NULL UNIQUE,
    title TEXT NOT NULL,
    subtitle TEXT,
    image_url TEXT,
    long_description TEXT
);
";
