use std::collections::HashSet;

use guide_core::Category;

use super::{create_seeded_storage, create_test_storage};

#[test]
fn test_destinations_by_category_filters_exactly() {
    let (storage, _temp_dir) = create_seeded_storage();
    for category in Category::ALL {
        let rows = storage.destinations_by_category(*category).unwrap();
        assert!(!rows.is_empty(), "no rows for {category}");
        assert!(rows.iter().all(|d| d.category == *category));
        assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
    }
}

#[test]
fn test_destinations_by_category_empty_database() {
    let (storage, _temp_dir) = create_test_storage();
    assert!(storage.destinations_by_category(Category::Culture).unwrap().is_empty());
    assert!(storage.first_destination_in(Category::Hero).unwrap().is_none());
}

#[test]
fn test_destinations_excluding_respects_limit_and_filter() {
    let (storage, _temp_dir) = create_seeded_storage();
    let rows = storage.destinations_excluding(&[Category::Hero, Category::About], 4).unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|d| d.category != Category::Hero && d.category != Category::About));

    let everything = storage.destinations_excluding(&[], 1000).unwrap();
    assert_eq!(everything.len(), 20);
}

#[test]
fn test_first_destination_in_hero() {
    let (storage, _temp_dir) = create_seeded_storage();
    let hero = storage.first_destination_in(Category::Hero).unwrap().unwrap();
    assert_eq!(hero.title, "Hero Section");
}

#[test]
fn test_destination_by_title() {
    let (storage, _temp_dir) = create_seeded_storage();
    let found = storage.destination_by_title("Ancient Forts & Palaces").unwrap().unwrap();
    assert_eq!(found.category, Category::History);
    assert!(storage.destination_by_title("Atlantis").unwrap().is_none());
    assert!(storage.destination_by_title("diwali").unwrap().is_none());
}

#[test]
fn test_destination_by_title_duplicate_resolves_to_lowest_id() {
    let (storage, _temp_dir) = create_seeded_storage();
    let original = storage.destination_by_title("Holi").unwrap().unwrap();
    {
        let conn = storage.pool.get().unwrap();
        conn.execute(
            "INSERT INTO destination (title, description, category) VALUES ('Holi', 'copy', 'Nature')",
            [],
        )
        .unwrap();
    }
    let found = storage.destination_by_title("Holi").unwrap().unwrap();
    assert_eq!(found.id, original.id);
    assert_eq!(found.category, Category::Culture);
}

#[test]
fn test_sub_category_representatives_one_per_group() {
    let (storage, _temp_dir) = create_seeded_storage();
    let reps = storage.sub_category_representatives(Category::Cuisine).unwrap();
    let all = storage.destinations_by_category(Category::Cuisine).unwrap();

    let distinct: HashSet<_> = all.iter().filter_map(|d| d.sub_category.clone()).collect();
    let rep_groups: HashSet<_> = reps.iter().filter_map(|d| d.sub_category.clone()).collect();

    assert_eq!(reps.len(), distinct.len());
    assert_eq!(rep_groups, distinct);
    assert!(reps.iter().all(|d| d.category == Category::Cuisine));

    for rep in &reps {
        let group = rep.sub_category.as_deref().unwrap();
        let lowest = all.iter().filter(|d| d.sub_category.as_deref() == Some(group)).map(|d| d.id).min();
        assert_eq!(Some(rep.id), lowest);
    }
}

#[test]
fn test_sub_categories_in_first_appearance_order() {
    let (storage, _temp_dir) = create_seeded_storage();
    assert_eq!(
        storage.sub_categories(Category::Cuisine).unwrap(),
        vec!["North Indian", "South Indian", "Street Food", "Sweets & Desserts"]
    );
    assert!(storage.sub_categories(Category::Nature).unwrap().is_empty());
}

#[test]
fn test_destinations_by_sub_category() {
    let (storage, _temp_dir) = create_seeded_storage();
    let street = storage.destinations_by_sub_category(Category::Cuisine, "Street Food").unwrap();
    let titles: Vec<_> = street.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Pani Puri", "Vada Pav"]);
    assert!(
        storage
            .destinations_by_sub_category(Category::Culture, "Street Food")
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_related_by_sub_category_excludes_self() {
    let (storage, _temp_dir) = create_seeded_storage();
    let diwali = storage.destination_by_title("Diwali").unwrap().unwrap();
    let related = storage.related_destinations(&diwali).unwrap();
    let titles: Vec<_> = related.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Vibrant Festivals", "Holi"]);
}

#[test]
fn test_related_by_category_without_sub_category() {
    let (storage, _temp_dir) = create_seeded_storage();
    let forts = storage.destination_by_title("Ancient Forts & Palaces").unwrap().unwrap();
    let related = storage.related_destinations(&forts).unwrap();
    assert!(!related.is_empty());
    assert!(related.iter().all(|d| d.category == Category::History && d.id != forts.id));
}

#[test]
fn test_category_hero_lookup() {
    let (storage, _temp_dir) = create_seeded_storage();
    let hero = storage.category_hero(Category::Cuisine).unwrap().unwrap();
    assert_eq!(hero.category, Category::Cuisine);
    assert!(storage.category_hero(Category::Hero).unwrap().is_none());
}

#[test]
fn test_category_hero_unique_per_category() {
    let (storage, _temp_dir) = create_seeded_storage();
    let conn = storage.pool.get().unwrap();
    let result = conn.execute(
        "INSERT INTO category_hero (category, title) VALUES ('Culture', 'Second banner')",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn test_carousel_buckets() {
    let (storage, _temp_dir) = create_seeded_storage();
    let home = storage.carousel_images(None).unwrap();
    assert_eq!(home.len(), 3);
    assert!(home.iter().all(|i| i.sub_category.is_none()));

    let north = storage.carousel_images(Some("North Indian")).unwrap();
    assert_eq!(north.len(), 1);
    assert_eq!(north[0].sub_category.as_deref(), Some("North Indian"));

    assert!(storage.carousel_images(Some("Nowhere")).unwrap().is_empty());
}

#[test]
fn test_unknown_category_rows_are_skipped_in_lists() {
    let (storage, _temp_dir) = create_seeded_storage();
    {
        let conn = storage.pool.get().unwrap();
        conn.execute(
            "INSERT INTO destination (title, description, category) VALUES ('Mall', 'x', 'Shopping')",
            [],
        )
        .unwrap();
    }
    let all = storage.destinations_excluding(&[], 1000).unwrap();
    assert!(all.iter().all(|d| d.title != "Mall"));
    assert!(storage.destination_by_title("Mall").is_err());
}

#[test]
fn test_miscased_category_never_decodes_as_a_listed_category() {
    let (storage, _temp_dir) = create_seeded_storage();
    {
        let conn = storage.pool.get().unwrap();
        conn.execute(
            "INSERT INTO destination (title, description, category) VALUES ('Kathakali', 'x', 'culture')",
            [],
        )
        .unwrap();
    }
    let culture = storage.destinations_by_category(Category::Culture).unwrap();
    assert!(culture.iter().all(|d| d.title != "Kathakali"));

    let featured = storage.destinations_excluding(&[Category::Hero, Category::About], 1000).unwrap();
    assert!(featured.iter().all(|d| d.title != "Kathakali"));
    assert_eq!(featured.len(), 18);

    assert!(storage.destination_by_title("Kathakali").is_err());
}
