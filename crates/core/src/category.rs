//! Top-level content buckets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Top-level bucket a destination belongs to.
///
/// Stored in the database as the capitalised variant name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    /// Home page banner rows
    Hero,
    /// Rows for the about page
    About,
    Culture,
    History,
    Nature,
    Cuisine,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Hero,
        Category::About,
        Category::Culture,
        Category::History,
        Category::Nature,
        Category::Cuisine,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Hero => "Hero",
            Self::About => "About",
            Self::Culture => "Culture",
            Self::History => "History",
            Self::Nature => "Nature",
            Self::Cuisine => "Cuisine",
        }
    }

    /// Whether the category has its own listing page in the site navigation.
    #[must_use]
    pub const fn is_browsable(&self) -> bool {
        matches!(*self, Self::Culture | Self::History | Self::Nature | Self::Cuisine)
    }

    /// Route path of the category listing, if it has one.
    #[must_use]
    pub const fn path(&self) -> Option<&'static str> {
        match *self {
            Self::Culture => Some("/culture"),
            Self::History => Some("/history"),
            Self::Nature => Some("/nature"),
            Self::Cuisine => Some("/cuisine"),
            Self::About => Some("/about"),
            Self::Hero => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the stored name exactly. Any other spelling is rejected, so a row
/// decodes only when the `category = ?` filters would also select it.
impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::InvalidCategory(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_names() {
        assert_eq!("Culture".parse::<Category>(), Ok(Category::Culture));
        assert_eq!("Hero".parse::<Category>(), Ok(Category::Hero));
    }

    #[test]
    fn parsing_is_exact_like_the_sql_filter() {
        for raw in ["culture", "CUISINE", " Nature", "History "] {
            assert_eq!(
                raw.parse::<Category>(),
                Err(CoreError::InvalidCategory(raw.to_owned()))
            );
        }
    }

    #[test]
    fn rejects_unknown() {
        assert_eq!(
            "Shopping".parse::<Category>(),
            Err(CoreError::InvalidCategory("Shopping".to_owned()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().ok(), Some(*category));
        }
    }

    #[test]
    fn only_content_categories_are_browsable() {
        let browsable: Vec<_> = Category::ALL.iter().filter(|c| c.is_browsable()).collect();
        assert_eq!(
            browsable,
            vec![&Category::Culture, &Category::History, &Category::Nature, &Category::Cuisine]
        );
    }
}
