use std::collections::HashSet;

/// URL-safe form of a sub-category name.
///
/// ASCII alphanumerics are lowercased and kept; every other run of characters
/// becomes a single `-`. Leading and trailing separators are dropped.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Distinct slugs for a list of names, in the same order.
///
/// The first name to claim a slug keeps it. Later names that slugify to a
/// taken value get the lowest free `-2`, `-3`, ... suffix. Names with no
/// alphanumerics slug to `style`.
#[must_use]
pub fn unique_slugs<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut taken = HashSet::new();
    names
        .into_iter()
        .map(|name| {
            let mut base = slugify(name);
            if base.is_empty() {
                base.push_str("style");
            }
            let mut slug = base.clone();
            let mut n = 2u32;
            while !taken.insert(slug.clone()) {
                slug = format!("{base}-{n}");
                n += 1;
            }
            slug
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{slugify, unique_slugs};

    #[test]
    fn basic_words() {
        assert_eq!(slugify("North Indian"), "north-indian");
        assert_eq!(slugify("Street Food"), "street-food");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("Sweets & Desserts"), "sweets-desserts");
        assert_eq!(slugify("  --Vibrant   Festivals!! "), "vibrant-festivals");
    }

    #[test]
    fn empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("&&&"), "");
    }

    #[test]
    fn colliding_names_get_suffixes() {
        let slugs = unique_slugs(["Street Food", "North Indian", "Street-Food", "street food!"]);
        assert_eq!(slugs, vec!["street-food", "north-indian", "street-food-2", "street-food-3"]);
    }

    #[test]
    fn suffix_skips_slugs_already_claimed() {
        let slugs = unique_slugs(["Thali", "Thali 2", "THALI"]);
        assert_eq!(slugs, vec!["thali", "thali-2", "thali-3"]);
    }

    #[test]
    fn unique_slugs_never_empty() {
        assert_eq!(unique_slugs(["&&", "??"]), vec!["style", "style-2"]);
    }
}
