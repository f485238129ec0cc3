// ABOUTME: Integration tests for the text and cuisine filters
// ABOUTME: Covers substring matching across fields, exact cuisine match and store recomputation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{fixture_recipes, init_test_logging};
use recipe_browser::filter::{apply_filters, matches_text, normalize_query, RecipeFilter};
use recipe_browser::store::RecipeStore;

fn ids_of(indices: &[usize]) -> Vec<u64> {
    let recipes = fixture_recipes();
    indices.iter().map(|&i| recipes[i].id).collect()
}

#[test]
fn test_empty_filters_keep_the_whole_collection_in_order() {
    let recipes = fixture_recipes();
    let view = apply_filters(&recipes, "", "");
    assert_eq!(ids_of(&view), (1..=12).collect::<Vec<_>>());
}

#[test]
fn test_chicken_matches_name_ingredient_and_tag_case_insensitively() {
    let recipes = fixture_recipes();
    let view = apply_filters(&recipes, "chicken", "");
    assert_eq!(ids_of(&view), vec![4, 5, 11, 12]);

    let shouted = apply_filters(&recipes, "  CHICKEN ", "");
    assert_eq!(shouted, view);
}

#[test]
fn test_query_matches_cuisine_text() {
    let recipes = fixture_recipes();
    let view = apply_filters(&recipes, "mexic", "");
    assert_eq!(ids_of(&view), vec![5, 10]);
}

#[test]
fn test_cuisine_is_exact_and_case_sensitive() {
    let recipes = fixture_recipes();
    assert_eq!(ids_of(&apply_filters(&recipes, "", "Italian")), vec![1, 4, 7]);
    assert!(apply_filters(&recipes, "", "italian").is_empty());
    assert!(apply_filters(&recipes, "", "Ital").is_empty());
}

#[test]
fn test_both_predicates_must_hold() {
    let recipes = fixture_recipes();
    assert_eq!(ids_of(&apply_filters(&recipes, "chicken", "Italian")), vec![4]);
    assert!(apply_filters(&recipes, "shrimp", "Italian").is_empty());
}

#[test]
fn test_filtering_is_idempotent() {
    let recipes = fixture_recipes();
    let first = apply_filters(&recipes, "tomato", "");
    let second = apply_filters(&recipes, "tomato", "");
    assert_eq!(first, second);
    assert_eq!(ids_of(&first), vec![1, 7, 11]);
}

#[test]
fn test_filter_normalizes_once() {
    let filter = RecipeFilter::new("  Basil\t", "Italian");
    assert_eq!(filter.needle(), "basil");
    assert_eq!(filter.cuisine(), "Italian");
    assert!(!filter.is_unrestricted());
    assert!(RecipeFilter::new("   ", "").is_unrestricted());
    assert_eq!(normalize_query(" MiXeD "), "mixed");
}

#[test]
fn test_whitespace_only_query_matches_everything() {
    let recipes = fixture_recipes();
    assert!(recipes.iter().all(|recipe| matches_text(recipe, "")));
    assert_eq!(apply_filters(&recipes, "   ", "").len(), 12);
}

#[test]
fn test_store_recomputes_view_from_full_collection() {
    init_test_logging();
    let mut store = RecipeStore::new();
    store.replace(fixture_recipes());
    assert_eq!(store.view_len(), 12);

    store.apply_filters("chicken", "");
    assert_eq!(store.view_len(), 4);

    // Empty query restores the cuisine-filtered full view, not a subset of the last view
    store.apply_filters("chicken", "Italian");
    assert_eq!(store.view_len(), 1);
    store.apply_filters("", "Italian");
    let view: Vec<u64> = store.view_recipes().iter().map(|r| r.id).collect();
    assert_eq!(view, vec![1, 4, 7]);
}

#[test]
fn test_store_cuisines_are_sorted_and_unique() {
    let mut store = RecipeStore::new();
    store.replace(fixture_recipes());
    assert_eq!(
        store.cuisines(),
        vec![
            "American",
            "Asian",
            "Chinese",
            "Greek",
            "Indian",
            "Italian",
            "Mediterranean",
            "Mexican",
            "Thai"
        ]
    );
}

#[test]
fn test_store_find_by_id() {
    let mut store = RecipeStore::new();
    store.replace(fixture_recipes());
    assert_eq!(store.find(7).unwrap().name, "Tomato Basil Bruschetta");
    assert!(store.find(99).is_none());
}
