//! First-run content seeding.
//!
//! Each table is filled from the fixed dataset only while it has no rows, so
//! repeated runs never duplicate content.

mod dataset;

use guide_core::STATIC_URL_PREFIX;
use rusqlite::{Transaction, TransactionBehavior, params};
use serde::Serialize;

use crate::storage::get_conn;
use crate::{Storage, StorageError};

/// Rows inserted per table by one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub destinations: usize,
    pub category_heroes: usize,
    pub carousel_images: usize,
}

impl SeedReport {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.destinations == 0 && self.category_heroes == 0 && self.carousel_images == 0
    }
}

fn image_url(file: &str) -> String {
    format!("{STATIC_URL_PREFIX}/images/{file}")
}

fn table_is_empty(tx: &Transaction<'_>, table: &str) -> Result<bool, StorageError> {
    let has_rows: bool =
        tx.query_row(&format!("SELECT EXISTS(SELECT 1 FROM {table})"), [], |row| row.get(0))?;
    Ok(!has_rows)
}

fn insert_destinations(tx: &Transaction<'_>) -> Result<usize, StorageError> {
    let mut stmt = tx.prepare(
        "INSERT INTO destination
           (title, description, long_description, image_url, category, sub_category)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for d in dataset::DESTINATIONS {
        stmt.execute(params![
            d.title,
            d.description,
            d.long_description,
            image_url(d.image),
            d.category.as_str(),
            d.sub_category,
        ])?;
    }
    Ok(dataset::DESTINATIONS.len())
}

fn insert_category_heroes(tx: &Transaction<'_>) -> Result<usize, StorageError> {
    let mut stmt = tx.prepare(
        "INSERT INTO category_hero (category, title, subtitle, image_url, long_description)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    for h in dataset::CATEGORY_HEROES {
        stmt.execute(params![
            h.category.as_str(),
            h.title,
            h.subtitle,
            image_url(h.image),
            h.long_description,
        ])?;
    }
    Ok(dataset::CATEGORY_HEROES.len())
}

fn insert_carousel_images(tx: &Transaction<'_>) -> Result<usize, StorageError> {
    let mut stmt = tx.prepare(
        "INSERT INTO carousel_image (image_url, caption, sub_category) VALUES (?1, ?2, ?3)",
    )?;
    for c in dataset::CAROUSEL_IMAGES {
        stmt.execute(params![image_url(c.image), c.caption, c.sub_category])?;
    }
    Ok(dataset::CAROUSEL_IMAGES.len())
}

impl Storage {
    /// Insert the editorial dataset into every content table that has no rows.
    ///
    /// Runs in a single immediate transaction so concurrent seeders serialize
    /// on the write lock and the second one sees populated tables.
    ///
    /// # Errors
    /// Returns error if any read or insert fails; nothing is committed then.
    pub fn seed_if_empty(&self) -> Result<SeedReport, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let mut report = SeedReport::default();

        if table_is_empty(&tx, "destination")? {
            report.destinations = insert_destinations(&tx)?;
        } else {
            tracing::debug!("destinations already populated, skipping seed");
        }

        if table_is_empty(&tx, "category_hero")? {
            report.category_heroes = insert_category_heroes(&tx)?;
        } else {
            tracing::debug!("category_heroes already populated, skipping seed");
        }

        if table_is_empty(&tx, "carousel_image")? {
            report.carousel_images = insert_carousel_images(&tx)?;
        } else {
            tracing::debug!("carousel_images already populated, skipping seed");
        }

        tx.commit()?;

        if report.is_empty() {
            tracing::info!("Database already seeded");
        } else {
            tracing::info!(
                destinations = report.destinations,
                category_heroes = report.category_heroes,
                carousel_images = report.carousel_images,
                "Seeded initial content"
            );
        }
        Ok(report)
    }
}
