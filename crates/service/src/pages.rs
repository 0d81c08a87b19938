//! Page models returned by [`crate::ContentService`].

use guide_core::{CarouselImage, Category, CategoryHero, Destination};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    /// Banner row; absent until the database is seeded.
    pub hero: Option<Destination>,
    pub featured: Vec<Destination>,
    pub carousel: Vec<CarouselImage>,
}

/// Listing for one category: its banner plus every destination in it.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPage {
    pub category: Category,
    pub hero: Option<CategoryHero>,
    pub destinations: Vec<Destination>,
}

/// One entry on the cuisine menu: a style and the dish that stands for it.
#[derive(Debug, Clone, Serialize)]
pub struct CuisineStyle {
    pub name: String,
    pub slug: String,
    pub representative: Destination,
}

#[derive(Debug, Clone, Serialize)]
pub struct CuisineMenu {
    pub hero: Option<CategoryHero>,
    pub styles: Vec<CuisineStyle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CuisineStylePage {
    pub name: String,
    pub slug: String,
    pub dishes: Vec<Destination>,
    pub carousel: Vec<CarouselImage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailPage {
    pub destination: Destination,
    pub related: Vec<Destination>,
}
