// ABOUTME: External data source modules for the recipe collection
// ABOUTME: Defines the RecipeSource seam with HTTP and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External Data Sources
//!
//! The page engine only sees the [`RecipeSource`] trait. The HTTP client
//! talks to the recipe-list API; the static source serves fixtures for
//! tests and offline demos.

pub mod recipe_client;

use async_trait::async_trait;

use crate::errors::FetchError;
use crate::models::Recipe;

pub use recipe_client::{RecipeClient, RecipeClientConfig, StaticRecipeSource};

/// Asynchronous supplier of the full recipe collection
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch every recipe in one call
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the source is unreachable, answers with a
    /// non-success status, or returns an undecodable body
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, FetchError>;
}
