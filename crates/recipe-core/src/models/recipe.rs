// ABOUTME: Recipe record as served by the recipe-list API
// ABOUTME: Recipe and RecipeListResponse definitions with camelCase JSON mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A single recipe, immutable once fetched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: u64,
    /// Recipe name
    pub name: String,
    /// Cuisine label, matched exactly by the cuisine filter
    pub cuisine: String,
    /// Ingredients in listing order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation steps in order
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Meal types (Dinner, Lunch, Snack, ...)
    #[serde(default)]
    pub meal_type: Vec<String>,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time_minutes: u32,
    /// Cooking time in minutes
    #[serde(default)]
    pub cook_time_minutes: u32,
    /// Number of servings
    #[serde(default)]
    pub servings: u32,
    /// Difficulty label (Easy, Medium, ...)
    #[serde(default)]
    pub difficulty: String,
    /// Calories per serving
    #[serde(default)]
    pub calories_per_serving: u32,
    /// Average rating between 0.0 and 5.0
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews behind the rating
    #[serde(default)]
    pub review_count: u32,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Author id, when provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

impl Recipe {
    /// Preparation plus cooking time
    #[must_use]
    pub const fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes.saturating_add(self.cook_time_minutes)
    }
}

/// Body of the recipe-list endpoint
///
/// Only `recipes` is required; the paging counters are informational since
/// the whole collection is requested in one call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeListResponse {
    /// Every recipe returned by the endpoint
    pub recipes: Vec<Recipe>,
    /// Total recipes known to the server
    #[serde(default)]
    pub total: usize,
    /// Offset of the first returned recipe
    #[serde(default)]
    pub skip: usize,
    /// Page size applied by the server
    #[serde(default)]
    pub limit: usize,
}
