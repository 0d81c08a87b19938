use std::collections::HashMap;
use std::sync::Arc;

use guide_core::{Category, DEFAULT_FEATURED_LIMIT, MAX_FEATURED_LIMIT, unique_slugs};
use guide_storage::Storage;

use crate::ServiceError;
use crate::pages::{CategoryPage, CuisineMenu, CuisineStyle, CuisineStylePage, DetailPage, HomePage};

/// Categories never listed among the home page highlights.
const HOME_EXCLUDED: &[Category] = &[Category::Hero, Category::About];

pub struct ContentService {
    storage: Arc<Storage>,
    featured_limit: usize,
}

impl ContentService {
    #[must_use]
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage, featured_limit: DEFAULT_FEATURED_LIMIT }
    }

    /// Override how many highlights the home page shows (clamped to `1..=MAX_FEATURED_LIMIT`).
    #[must_use]
    pub fn with_featured_limit(mut self, limit: usize) -> Self {
        self.featured_limit = limit.clamp(1, MAX_FEATURED_LIMIT);
        self
    }

    #[must_use]
    pub const fn featured_limit(&self) -> usize {
        self.featured_limit
    }

    pub fn home(&self) -> Result<HomePage, ServiceError> {
        Ok(HomePage {
            hero: self.storage.first_destination_in(Category::Hero)?,
            featured: self.storage.destinations_excluding(HOME_EXCLUDED, self.featured_limit)?,
            carousel: self.storage.carousel_images(None)?,
        })
    }

    pub fn category_page(&self, category: Category) -> Result<CategoryPage, ServiceError> {
        Ok(CategoryPage {
            category,
            hero: self.storage.category_hero(category)?,
            destinations: self.storage.destinations_by_category(category)?,
        })
    }

    pub fn about(&self) -> Result<CategoryPage, ServiceError> {
        self.category_page(Category::About)
    }

    /// Cuisine style names paired with their slugs, in menu order.
    ///
    /// Slugs are assigned over the full list so the menu and the style route
    /// always agree, even when two names slugify alike.
    fn cuisine_slugs(&self) -> Result<Vec<(String, String)>, ServiceError> {
        let names = self.storage.sub_categories(Category::Cuisine)?;
        let slugs = unique_slugs(names.iter().map(String::as_str));
        Ok(names.into_iter().zip(slugs).collect())
    }

    /// The cuisine "menu of menus": one representative dish per cuisine style.
    pub fn cuisine_menu(&self) -> Result<CuisineMenu, ServiceError> {
        let slugs: HashMap<String, String> = self.cuisine_slugs()?.into_iter().collect();
        let styles = self
            .storage
            .sub_category_representatives(Category::Cuisine)?
            .into_iter()
            .filter_map(|representative| {
                let name = representative.sub_category.clone()?;
                let slug = slugs.get(&name)?.clone();
                Some(CuisineStyle { name, slug, representative })
            })
            .collect();
        Ok(CuisineMenu { hero: self.storage.category_hero(Category::Cuisine)?, styles })
    }

    /// Every dish of the cuisine style whose slug is `slug`.
    pub fn cuisine_style(&self, slug: &str) -> Result<CuisineStylePage, ServiceError> {
        let name = self
            .cuisine_slugs()?
            .into_iter()
            .find_map(|(name, candidate)| (candidate == slug).then_some(name))
            .ok_or_else(|| ServiceError::NotFound { entity: "cuisine", key: slug.to_owned() })?;

        let dishes = self.storage.destinations_by_sub_category(Category::Cuisine, &name)?;
        let carousel = self.storage.carousel_images(Some(&name))?;
        Ok(CuisineStylePage { slug: slug.to_owned(), name, dishes, carousel })
    }

    pub fn details(&self, title: &str) -> Result<DetailPage, ServiceError> {
        let destination = self.storage.destination_by_title(title)?.ok_or_else(|| {
            tracing::debug!(title, "detail lookup missed");
            ServiceError::NotFound { entity: "destination", key: title.to_owned() }
        })?;
        let related = self.storage.related_destinations(&destination)?;
        Ok(DetailPage { destination, related })
    }
}
