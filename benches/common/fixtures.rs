// ABOUTME: Benchmark fixtures generating recipe collections of various sizes
// ABOUTME: Deterministic names, cuisines and ingredients for reproducible measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for recipe collections.

use recipe_browser::models::Recipe;

const CUISINES: &[&str] = &[
    "Italian", "Asian", "American", "Mexican", "Mediterranean", "Indian", "Thai", "Greek",
];

const INGREDIENTS: &[&str] = &[
    "Chicken breast", "Garlic", "Olive oil", "Tomatoes", "Basil", "Rice", "Soy sauce",
    "Onion", "Cumin", "Feta", "Lime", "Ginger",
];

/// Predefined collection sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CollectionSize {
    /// One API page (30 recipes)
    Page,
    /// The whole public catalogue (50 recipes)
    Catalogue,
    /// A large private collection
    Large,
}

impl CollectionSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Page => 30,
            Self::Catalogue => 50,
            Self::Large => 5_000,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Page => "30",
            Self::Catalogue => "50",
            Self::Large => "5000",
        }
    }
}

/// Generate `size` recipes cycling through cuisines and ingredients
#[must_use]
pub fn generate_recipes(size: CollectionSize) -> Vec<Recipe> {
    (0..size.count())
        .map(|index| Recipe {
            id: index as u64 + 1,
            name: format!("Recipe number {index}"),
            cuisine: CUISINES[index % CUISINES.len()].to_owned(),
            ingredients: (0..6)
                .map(|offset| INGREDIENTS[(index + offset) % INGREDIENTS.len()].to_owned())
                .collect(),
            tags: vec![format!("Tag{}", index % 7), "Dinner".to_owned()],
            rating: 3.0 + (index % 20) as f64 / 10.0,
            ..Recipe::default()
        })
        .collect()
}
