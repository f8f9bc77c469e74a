// tests/query.rs

//! Query operation tests: recommendations, name search, and filtering.

mod common;

use larder::{Catalog, Difficulty, Recipe, RecipeFilter};

#[test]
fn test_recommend_is_case_insensitive() {
    let (_temp, catalog) = common::setup_seeded_catalog();

    let lower = catalog.recommend_by_cuisine("italian");
    let upper = catalog.recommend_by_cuisine("Italian");
    assert_eq!(lower, upper);
    assert_eq!(lower, vec!["Spaghetti Carbonara"]);
}

#[test]
fn test_recommend_unknown_cuisine_is_empty() {
    let (_temp, catalog) = common::setup_seeded_catalog();
    assert!(catalog.recommend_by_cuisine("French").is_empty());
}

#[test]
fn test_recommend_empty_cuisine_is_empty() {
    let (_temp, catalog) = common::setup_seeded_catalog();
    assert!(catalog.recommend_by_cuisine("").is_empty());
}

#[test]
fn test_search_empty_query_matches_every_recipe() {
    let (_temp, catalog) = common::setup_seeded_catalog();
    assert_eq!(catalog.search(""), catalog.names());
}

#[test]
fn test_search_matches_substring_case_insensitively() {
    let (_temp, catalog) = common::setup_seeded_catalog();

    assert_eq!(catalog.search("Chicken"), vec!["Chicken Tikka Masala"]);
    assert_eq!(catalog.search("chicken"), vec!["Chicken Tikka Masala"]);
    assert_eq!(catalog.search("toast"), vec!["Avocado Toast"]);
    assert!(catalog.search("Sushi").is_empty());
}

#[test]
fn test_filter_easy_and_quick() {
    let (_temp, catalog) = common::setup_seeded_catalog();

    let filter = RecipeFilter {
        difficulty: Some("Easy".to_string()),
        max_prep_time: Some(30),
        min_rating: None,
    };
    assert_eq!(catalog.filter(&filter), vec!["Avocado Toast"]);
}

#[test]
fn test_filter_zero_bounds_equal_unconstrained() {
    let (_temp, catalog) = common::setup_seeded_catalog();

    let zeroed = RecipeFilter {
        difficulty: None,
        max_prep_time: Some(0),
        min_rating: Some(0.0),
    };
    assert_eq!(catalog.filter(&zeroed), catalog.filter(&RecipeFilter::default()));
    assert_eq!(catalog.filter(&zeroed), catalog.names());
}

#[test]
fn test_filter_by_min_rating() {
    let (_temp, catalog) = common::setup_seeded_catalog();

    let filter = RecipeFilter {
        min_rating: Some(4.6),
        ..Default::default()
    };
    assert_eq!(catalog.filter(&filter), vec!["Chicken Tikka Masala"]);
}

#[test]
fn test_filter_combines_all_constraints() {
    let (_temp, catalog) = common::setup_seeded_catalog();

    let filter = RecipeFilter {
        difficulty: Some("medium".to_string()),
        max_prep_time: Some(30),
        min_rating: Some(4.0),
    };
    assert_eq!(catalog.filter(&filter), vec!["Spaghetti Carbonara"]);
}

#[test]
fn test_filter_tolerates_arbitrary_difficulty_strings() {
    let (_temp, catalog) = common::setup_seeded_catalog();

    let filter = RecipeFilter {
        difficulty: Some("impossible".to_string()),
        ..Default::default()
    };
    assert!(catalog.filter(&filter).is_empty());
}

#[test]
fn test_filter_excludes_unrated_under_rating_constraint() {
    let (_temp, data_path) = common::setup_catalog_path();
    let mut catalog = Catalog::open(&data_path);

    let unrated = Recipe::new(
        "Italian",
        vec!["Bread".to_string(), "Garlic".to_string()],
        10,
        Difficulty::Easy,
        None,
    )
    .unwrap();
    catalog.add("Garlic Bread", unrated).unwrap();

    let filter = RecipeFilter {
        min_rating: Some(1.0),
        ..Default::default()
    };
    let names = catalog.filter(&filter);
    assert!(!names.contains(&"Garlic Bread".to_string()));
    assert_eq!(names.len(), 3);
}

#[test]
fn test_query_results_follow_insertion_order() {
    let (_temp, data_path) = common::setup_catalog_path();
    let mut catalog = Catalog::open(&data_path);

    let gnocchi = Recipe::new(
        "Italian",
        vec!["Potatoes".to_string(), "Flour".to_string()],
        40,
        Difficulty::Medium,
        Some(4.1),
    )
    .unwrap();
    catalog.add("Gnocchi", gnocchi).unwrap();

    assert_eq!(
        catalog.recommend_by_cuisine("Italian"),
        vec!["Spaghetti Carbonara", "Gnocchi"]
    );
}
