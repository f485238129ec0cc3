// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Page size, debounce, slideshow timing, API endpoint and offline cache manifest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list. Values here are the defaults; `BrowserConfig` may override the
//! timing and sizing ones from the environment.

/// Recipe data source
pub mod api {
    /// Default recipe-list endpoint (returns every recipe in one response)
    pub const DEFAULT_RECIPES_URL: &str = "https://dummyjson.com/recipes";
    /// Service name used in error messages for the recipe API
    pub const RECIPES_SERVICE: &str = "Recipe API";
}

/// "Show more" pagination
pub mod pagination {
    /// Recipes revealed per "show more" request
    pub const PAGE_SIZE: usize = 9;
}

/// Search input handling
pub mod search {
    /// Quiet period after the last keystroke before the query is applied
    pub const DEBOUNCE_MS: u64 = 500;
}

/// Promotional slideshow
pub mod slideshow {
    /// Number of recipes picked for the slideshow
    pub const SELECTION_SIZE: usize = 5;
    /// Auto-advance period
    pub const INTERVAL_MS: u64 = 4000;
}

/// Recipe card and detail presentation
pub mod presentation {
    /// Stars in a full rating
    pub const MAX_STARS: u32 = 5;
    /// Ingredients listed on a card before the preview is truncated
    pub const INGREDIENT_PREVIEW_COUNT: usize = 3;
    /// Filled star glyph
    pub const FULL_STAR: char = '★';
    /// Half star glyph
    pub const HALF_STAR: char = '⯪';
    /// Empty star glyph
    pub const EMPTY_STAR: char = '☆';
}

/// Offline asset cache
pub mod offline {
    /// Cache name; bump the suffix to invalidate previously installed assets
    pub const CACHE_NAME: &str = "recipe-browser-cache-v1";
    /// Assets cached at install time
    pub const PRECACHE_MANIFEST: &[&str] = &[
        "/",
        "/form.html",
        "/recipes.html",
        "/form.css",
        "/styles.css",
        "/form.js",
        "/recipes.js",
        "/form.png",
    ];
}

/// Service identification for structured logging
pub mod service_names {
    /// Service name reported in logs
    pub const RECIPE_BROWSER: &str = "recipe-browser";
}
