// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides the fixture collection, a recording renderer and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::too_many_lines
)]
//! Shared test utilities for `recipe_browser`
//!
//! Fixture collection: 12 recipes, 3 of them Italian. "chicken" matches
//! ids 4 and 5 by name, 11 by ingredient and 12 by tag.

use std::sync::Once;

use recipe_browser::models::{Recipe, RecipeListResponse};
use recipe_browser::presentation::RecipeDetail;
use recipe_browser::view::ViewRenderer;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Minimal recipe with the fields the filters look at
pub fn recipe(id: u64, name: &str, cuisine: &str, ingredients: &[&str], tags: &[&str]) -> Recipe {
    Recipe {
        id,
        name: name.to_owned(),
        cuisine: cuisine.to_owned(),
        ingredients: ingredients.iter().map(|&s| s.to_owned()).collect(),
        tags: tags.iter().map(|&s| s.to_owned()).collect(),
        instructions: vec!["Prepare.".to_owned(), "Serve.".to_owned()],
        meal_type: vec!["Dinner".to_owned()],
        prep_time_minutes: 10,
        cook_time_minutes: 20,
        servings: 4,
        difficulty: "Easy".to_owned(),
        calories_per_serving: 300,
        rating: 4.5,
        review_count: 10,
        image: format!("https://cdn.example.com/recipe-images/{id}.webp"),
        user_id: None,
    }
}

/// The 12-recipe fixture collection
pub fn fixture_recipes() -> Vec<Recipe> {
    vec![
        recipe(
            1,
            "Classic Margherita Pizza",
            "Italian",
            &["Pizza dough", "Tomato sauce", "Fresh mozzarella", "Basil"],
            &["Pizza", "Vegetarian"],
        ),
        recipe(
            2,
            "Vegetarian Stir-Fry",
            "Asian",
            &["Tofu", "Broccoli", "Soy sauce"],
            &["Vegetarian", "Quick"],
        ),
        recipe(
            3,
            "Chocolate Chip Cookies",
            "American",
            &["Flour", "Butter", "Chocolate chips"],
            &["Dessert", "Baking"],
        ),
        recipe(
            4,
            "Chicken Alfredo Pasta",
            "Italian",
            &["Fettuccine", "Cream", "Parmesan"],
            &["Pasta"],
        ),
        recipe(
            5,
            "Mango Salsa Chicken",
            "Mexican",
            &["Chicken thighs", "Mango", "Red onion"],
            &["Grilled"],
        ),
        recipe(
            6,
            "Quinoa Salad",
            "Mediterranean",
            &["Quinoa", "Cucumber", "Feta"],
            &["Salad", "Healthy"],
        ),
        recipe(
            7,
            "Tomato Basil Bruschetta",
            "Italian",
            &["Baguette", "Tomatoes", "Basil", "Garlic"],
            &["Appetizer"],
        ),
        recipe(
            8,
            "Beef and Broccoli",
            "Chinese",
            &["Beef sirloin", "Broccoli", "Oyster sauce"],
            &["Stir-fry"],
        ),
        recipe(
            9,
            "Greek Salad",
            "Greek",
            &["Cucumber", "Feta", "Olives"],
            &["Salad"],
        ),
        recipe(
            10,
            "Shrimp Tacos",
            "Mexican",
            &["Shrimp", "Tortillas", "Lime"],
            &["Tacos"],
        ),
        recipe(
            11,
            "Butter Curry",
            "Indian",
            &["Boneless CHICKEN", "Butter", "Tomato puree"],
            &["Curry"],
        ),
        recipe(
            12,
            "Pad Thai",
            "Thai",
            &["Rice noodles", "Shrimp", "Peanuts"],
            &["Noodles", "Chicken option"],
        ),
    ]
}

/// `n` recipes with ids `1..=n`, all "Test" cuisine
pub fn numbered_recipes(n: u64) -> Vec<Recipe> {
    (1..=n)
        .map(|id| recipe(id, &format!("Recipe {id}"), "Test", &["Salt"], &[]))
        .collect()
}

/// Recipe-list payload wrapping the fixture collection
pub fn fixture_json() -> String {
    let recipes = fixture_recipes();
    let payload = RecipeListResponse {
        total: recipes.len(),
        skip: 0,
        limit: 30,
        recipes,
    };
    serde_json::to_string(&payload).unwrap()
}

/// Ids of a slice of recipes
pub fn ids(recipes: &[&Recipe]) -> Vec<u64> {
    recipes.iter().map(|recipe| recipe.id).collect()
}

/// Renderer recording every callback as ids
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Every filtered view notification: (view ids, cursor)
    pub views: Vec<(Vec<u64>, usize)>,
    /// Every slideshow notification: (selection ids, index)
    pub slides: Vec<(Vec<u64>, usize)>,
    /// Fetch error messages
    pub errors: Vec<String>,
    /// Loading flag changes
    pub loading: Vec<bool>,
    /// Cuisine option lists
    pub cuisines: Vec<Vec<String>>,
    /// Opened details
    pub details: Vec<RecipeDetail>,
}

impl RecordingRenderer {
    /// Most recent filtered view notification
    pub fn last_view(&self) -> (Vec<u64>, usize) {
        self.views.last().cloned().unwrap()
    }

    /// Most recent slideshow notification
    pub fn last_slide(&self) -> (Vec<u64>, usize) {
        self.slides.last().cloned().unwrap()
    }

    /// Revealed ids of the most recent view
    pub fn revealed_ids(&self) -> Vec<u64> {
        let (view, cursor) = self.last_view();
        view.into_iter().take(cursor).collect()
    }
}

impl ViewRenderer for RecordingRenderer {
    fn on_filtered_view_changed(&mut self, view: &[&Recipe], cursor: usize) {
        self.views.push((ids(view), cursor));
    }

    fn on_slideshow_changed(&mut self, selection: &[&Recipe], index: usize) {
        self.slides.push((ids(selection), index));
    }

    fn on_fetch_error(&mut self, message: &str) {
        self.errors.push(message.to_owned());
    }

    fn on_loading(&mut self, loading: bool) {
        self.loading.push(loading);
    }

    fn on_cuisine_options(&mut self, cuisines: &[String]) {
        self.cuisines.push(cuisines.to_vec());
    }

    fn on_recipe_detail(&mut self, detail: &RecipeDetail) {
        self.details.push(detail.clone());
    }
}
