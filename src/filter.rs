// ABOUTME: Search and cuisine predicates that derive the filtered recipe view
// ABOUTME: Case-insensitive text match over name/cuisine/ingredients/tags, exact cuisine match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Filter Engine
//!
//! Two predicates composed by logical AND:
//!
//! - **Text**: the trimmed, lowercased query is empty, or is a substring of
//!   the lowercased name, cuisine, any ingredient, or any tag.
//! - **Cuisine**: the selection is empty, or equals the recipe's cuisine
//!   exactly (case-sensitive).
//!
//! The filtered view is a list of indices into the collection, so it is a
//! subset of the collection by construction and keeps collection order.

use crate::models::Recipe;

/// Normalized filter inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    needle: String,
    cuisine: String,
}

impl RecipeFilter {
    /// Build a filter from raw search text and a cuisine selection
    #[must_use]
    pub fn new(query: &str, cuisine: &str) -> Self {
        Self {
            needle: normalize_query(query),
            cuisine: cuisine.to_owned(),
        }
    }

    /// Lowercased, trimmed search text
    #[must_use]
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Cuisine selection (empty means any)
    #[must_use]
    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    /// Whether neither predicate restricts anything
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.needle.is_empty() && self.cuisine.is_empty()
    }

    /// Both predicates
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        matches_cuisine(recipe, &self.cuisine) && matches_text(recipe, &self.needle)
    }

    /// Indices of matching recipes, in collection order
    #[must_use]
    pub fn apply(&self, collection: &[Recipe]) -> Vec<usize> {
        if self.is_unrestricted() {
            return (0..collection.len()).collect();
        }

        collection
            .iter()
            .enumerate()
            .filter(|(_, recipe)| self.matches(recipe))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Derive the filtered view for `query` and `cuisine`
#[must_use]
pub fn apply_filters(collection: &[Recipe], query: &str, cuisine: &str) -> Vec<usize> {
    RecipeFilter::new(query, cuisine).apply(collection)
}

/// Trim and lowercase search text
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Text predicate; `needle` must already be normalized
#[must_use]
pub fn matches_text(recipe: &Recipe, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&recipe.name)
        || contains(&recipe.cuisine)
        || recipe.ingredients.iter().any(|ingredient| contains(ingredient))
        || recipe.tags.iter().any(|tag| contains(tag))
}

/// Cuisine predicate
#[must_use]
pub fn matches_cuisine(recipe: &Recipe, cuisine: &str) -> bool {
    cuisine.is_empty() || recipe.cuisine == cuisine
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: u64, name: &str, cuisine: &str) -> Recipe {
        Recipe {
            id,
            name: name.to_owned(),
            cuisine: cuisine.to_owned(),
            ..Recipe::default()
        }
    }

    #[test]
    fn test_query_is_trimmed_and_lowercased() {
        assert_eq!(normalize_query("  ChICKen \t"), "chicken");
    }

    #[test]
    fn test_cuisine_match_is_case_sensitive() {
        let pizza = recipe(1, "Margherita", "Italian");
        assert!(matches_cuisine(&pizza, "Italian"));
        assert!(!matches_cuisine(&pizza, "italian"));
        assert!(matches_cuisine(&pizza, ""));
    }

    #[test]
    fn test_text_match_covers_cuisine_field() {
        let pizza = recipe(1, "Margherita", "Italian");
        assert!(matches_text(&pizza, "ital"));
        assert!(!matches_text(&pizza, "thai"));
    }
}
