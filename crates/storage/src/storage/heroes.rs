use guide_core::{Category, CategoryHero};
use rusqlite::{OptionalExtension as _, params};

use super::{Storage, category_column, get_conn};
use crate::StorageError;

impl Storage {
    /// Banner row for a category page.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn category_hero(&self, category: Category) -> Result<Option<CategoryHero>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let hero = conn
            .query_row(
                "SELECT id, category, title, subtitle, image_url, long_description
                   FROM category_hero WHERE category = ?1",
                params![category.as_str()],
                |row| {
                    Ok(CategoryHero {
                        id: row.get(0)?,
                        category: category_column(row, 1)?,
                        title: row.get(2)?,
                        subtitle: row.get(3)?,
                        image_url: row.get(4)?,
                        long_description: row.get(5)?,
                    })
                },
            )
            .optional()?;
        Ok(hero)
    }
}
