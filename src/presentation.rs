// ABOUTME: View models for recipe cards, the detail modal, and star ratings
// ABOUTME: Total time, ingredient preview, and the half-star rounding rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Presentation helpers
//!
//! Renderers receive raw [`Recipe`]s; these types hold the derived strings
//! every renderer would otherwise recompute.
//!
//! Star rule: one full star per whole rating point, a half star when the
//! fractional part is at least 0.5, then empty stars up to five.
//! The half star has its own glyph (`⯪`) so it never reads as an empty one,
//! and a fraction below 0.5 is padded with an empty star like any other
//! missing point: `4.3` renders `★★★★☆`, `4.6` renders `★★★★⯪`.

use serde::Serialize;

use crate::constants::presentation::{
    EMPTY_STAR, FULL_STAR, HALF_STAR, INGREDIENT_PREVIEW_COUNT, MAX_STARS,
};
use crate::models::Recipe;

/// Star string for a 0.0 to 5.0 rating, always five glyphs wide
#[must_use]
pub fn star_rating(rating: f64) -> String {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, f64::from(MAX_STARS))
    } else {
        0.0
    };

    let full = rating.floor() as u32;
    let half = u32::from(rating.fract() >= 0.5);
    let empty = MAX_STARS.saturating_sub(full + half);

    let mut stars = String::with_capacity(MAX_STARS as usize * FULL_STAR.len_utf8());
    stars.extend((0..full).map(|_| FULL_STAR));
    stars.extend((0..half).map(|_| HALF_STAR));
    stars.extend((0..empty).map(|_| EMPTY_STAR));
    stars
}

/// Rating with one decimal, e.g. `4.6`
#[must_use]
pub fn rating_text(rating: f64) -> String {
    format!("{rating:.1}")
}

/// First ingredients joined by ", ", with "..." when some are left out
#[must_use]
pub fn ingredient_preview(ingredients: &[String]) -> String {
    let shown = ingredients
        .iter()
        .take(INGREDIENT_PREVIEW_COUNT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if ingredients.len() > INGREDIENT_PREVIEW_COUNT {
        format!("{shown}...")
    } else {
        shown
    }
}

/// Grid card for one recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeCard {
    /// Recipe id, used to open the detail modal
    pub id: u64,
    /// Recipe name
    pub name: String,
    /// Image URL
    pub image: String,
    /// Prep plus cook minutes
    pub total_minutes: u32,
    /// Difficulty label
    pub difficulty: String,
    /// Cuisine label
    pub cuisine: String,
    /// Star string
    pub stars: String,
    /// Rating with one decimal
    pub rating: String,
    /// Ingredient preview line
    pub ingredients_preview: String,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            image: recipe.image.clone(),
            total_minutes: recipe.total_time_minutes(),
            difficulty: recipe.difficulty.clone(),
            cuisine: recipe.cuisine.clone(),
            stars: star_rating(recipe.rating),
            rating: rating_text(recipe.rating),
            ingredients_preview: ingredient_preview(&recipe.ingredients),
        }
    }
}

/// Everything the detail modal shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    /// Recipe id
    pub id: u64,
    /// Recipe name
    pub name: String,
    /// Image URL
    pub image: String,
    /// Preparation minutes
    pub prep_minutes: u32,
    /// Cooking minutes
    pub cook_minutes: u32,
    /// Difficulty label
    pub difficulty: String,
    /// Servings
    pub servings: u32,
    /// Cuisine label
    pub cuisine: String,
    /// Star string
    pub stars: String,
    /// Rating with one decimal
    pub rating: String,
    /// Number of reviews
    pub review_count: u32,
    /// Full ingredient list
    pub ingredients: Vec<String>,
    /// Preparation steps
    pub instructions: Vec<String>,
    /// Calories per serving
    pub calories_per_serving: u32,
    /// Tags
    pub tags: Vec<String>,
    /// Meal types
    pub meal_types: Vec<String>,
}

impl From<&Recipe> for RecipeDetail {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            image: recipe.image.clone(),
            prep_minutes: recipe.prep_time_minutes,
            cook_minutes: recipe.cook_time_minutes,
            difficulty: recipe.difficulty.clone(),
            servings: recipe.servings,
            cuisine: recipe.cuisine.clone(),
            stars: star_rating(recipe.rating),
            rating: rating_text(recipe.rating),
            review_count: recipe.review_count,
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            calories_per_serving: recipe.calories_per_serving,
            tags: recipe.tags.clone(),
            meal_types: recipe.meal_type.clone(),
        }
    }
}
