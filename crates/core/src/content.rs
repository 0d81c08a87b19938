//! Content records as read from the database.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A single guide entry: a place, festival, dish or banner row.
///
/// `title` doubles as the lookup key in detail URLs. Uniqueness is a seeding
/// convention only; lookups resolve collisions to the lowest `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image_url: Option<String>,
    pub category: Category,
    pub sub_category: Option<String>,
}

impl Destination {
    /// Text for the detail page body, preferring the long form.
    #[must_use]
    pub fn body_text(&self) -> &str {
        self.long_description.as_deref().unwrap_or(&self.description)
    }
}

/// Banner content for a category page. One row per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryHero {
    pub id: i64,
    pub category: Category,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub long_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselImage {
    pub id: i64,
    pub image_url: String,
    pub caption: Option<String>,
    /// Carousel bucket; untagged images belong to the home page carousel.
    pub sub_category: Option<String>,
}
