use guide_core::{Category, Destination};
use rusqlite::types::Value;
use rusqlite::{OptionalExtension as _, params, params_from_iter};

use super::{Storage, category_column, get_conn, log_row_error};
use crate::StorageError;

const DESTINATION_COLUMNS: &str =
    "id, title, description, long_description, image_url, category, sub_category";

impl Storage {
    fn row_to_destination(row: &rusqlite::Row<'_>) -> rusqlite::Result<Destination> {
        Ok(Destination {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            long_description: row.get(3)?,
            image_url: row.get(4)?,
            category: category_column(row, 5)?,
            sub_category: row.get(6)?,
        })
    }

    fn query_destinations(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Destination>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(sql)?;
        let results = stmt
            .query_map(params, Self::row_to_destination)?
            .filter_map(log_row_error)
            .collect();
        Ok(results)
    }

    /// All destinations in a category, in insertion order.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn destinations_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Destination>, StorageError> {
        self.query_destinations(
            &format!(
                "SELECT {DESTINATION_COLUMNS} FROM destination WHERE category = ?1 ORDER BY id"
            ),
            params![category.as_str()],
        )
    }

    /// Up to `limit` destinations whose category is not in `excluded`.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn destinations_excluding(
        &self,
        excluded: &[Category],
        limit: usize,
    ) -> Result<Vec<Destination>, StorageError> {
        let mut values: Vec<Value> =
            excluded.iter().map(|c| Value::Text(c.as_str().to_owned())).collect();
        let filter = if excluded.is_empty() {
            String::new()
        } else {
            let placeholders = (1..=excluded.len())
                .map(|i| format!("?{i}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("WHERE category NOT IN ({placeholders})")
        };
        let limit_idx = values.len() + 1;
        values.push(Value::Integer(limit as i64));
        self.query_destinations(
            &format!(
                "SELECT {DESTINATION_COLUMNS} FROM destination {filter} ORDER BY id LIMIT ?{limit_idx}"
            ),
            params_from_iter(values),
        )
    }

    /// First destination in a category, if any.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn first_destination_in(
        &self,
        category: Category,
    ) -> Result<Option<Destination>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let found = conn
            .query_row(
                &format!(
                    "SELECT {DESTINATION_COLUMNS} FROM destination
                     WHERE category = ?1 ORDER BY id LIMIT 1"
                ),
                params![category.as_str()],
                Self::row_to_destination,
            )
            .optional()?;
        Ok(found)
    }

    /// Look up a destination by its title. Duplicate titles resolve to the lowest id.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn destination_by_title(&self, title: &str) -> Result<Option<Destination>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let found = conn
            .query_row(
                &format!(
                    "SELECT {DESTINATION_COLUMNS} FROM destination
                     WHERE title = ?1 ORDER BY id LIMIT 1"
                ),
                params![title],
                Self::row_to_destination,
            )
            .optional()?;
        Ok(found)
    }

    /// Destinations of one sub-category within a category.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn destinations_by_sub_category(
        &self,
        category: Category,
        sub_category: &str,
    ) -> Result<Vec<Destination>, StorageError> {
        self.query_destinations(
            &format!(
                "SELECT {DESTINATION_COLUMNS} FROM destination
                 WHERE category = ?1 AND sub_category = ?2 ORDER BY id"
            ),
            params![category.as_str(), sub_category],
        )
    }

    /// Distinct non-null sub-categories of a category, in order of first appearance.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn sub_categories(&self, category: Category) -> Result<Vec<String>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT sub_category FROM destination
             WHERE category = ?1 AND sub_category IS NOT NULL
             GROUP BY sub_category ORDER BY MIN(id)",
        )?;
        let results = stmt
            .query_map(params![category.as_str()], |row| row.get(0))?
            .filter_map(log_row_error)
            .collect();
        Ok(results)
    }

    /// One destination (the lowest id) per distinct sub-category of a category.
    ///
    /// Rows without a sub-category are not represented.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn sub_category_representatives(
        &self,
        category: Category,
    ) -> Result<Vec<Destination>, StorageError> {
        self.query_destinations(
            "SELECT d.id, d.title, d.description, d.long_description, d.image_url, d.category, d.sub_category
               FROM destination d
               JOIN (SELECT MIN(id) AS id FROM destination
                      WHERE category = ?1 AND sub_category IS NOT NULL
                      GROUP BY sub_category) firsts
                 ON d.id = firsts.id
              ORDER BY d.id",
            params![category.as_str()],
        )
    }

    /// Destinations related to `destination`, excluding itself.
    ///
    /// Related means sharing its sub-category when it has one, otherwise its category.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn related_destinations(
        &self,
        destination: &Destination,
    ) -> Result<Vec<Destination>, StorageError> {
        match destination.sub_category.as_deref() {
            Some(sub_category) => self.query_destinations(
                &format!(
                    "SELECT {DESTINATION_COLUMNS} FROM destination
                     WHERE sub_category = ?1 AND id != ?2 ORDER BY id"
                ),
                params![sub_category, destination.id],
            ),
            None => self.query_destinations(
                &format!(
                    "SELECT {DESTINATION_COLUMNS} FROM destination
                     WHERE category = ?1 AND id != ?2 ORDER BY id"
                ),
                params![destination.category.as_str(), destination.id],
            ),
        }
    }
}
