use guide_core::CarouselImage;
use rusqlite::params;

use super::{Storage, get_conn, log_row_error};
use crate::StorageError;

impl Storage {
    /// Images for one carousel bucket. `None` selects the untagged (home page) images.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn carousel_images(
        &self,
        sub_category: Option<&str>,
    ) -> Result<Vec<CarouselImage>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT id, image_url, caption, sub_category FROM carousel_image
              WHERE sub_category IS ?1 ORDER BY id",
        )?;
        let results = stmt
            .query_map(params![sub_category], |row| {
                Ok(CarouselImage {
                    id: row.get(0)?,
                    image_url: row.get(1)?,
                    caption: row.get(2)?,
                    sub_category: row.get(3)?,
                })
            })?
            .filter_map(log_row_error)
            .collect();
        Ok(results)
    }
}
