// ABOUTME: HTTP client for the recipe-list API plus an in-memory source for tests
// ABOUTME: Single GET of the whole collection, status and decode failures mapped to FetchError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe API Client
//!
//! The endpoint returns `{ "recipes": [...], "total", "skip", "limit" }`.
//! No paging parameters are sent: the entire collection is requested in one
//! call and no timeout is applied, matching a browser `fetch`.
//!
//! # Example
//! ```rust,no_run
//! use recipe_browser::external::{RecipeClient, RecipeClientConfig, RecipeSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RecipeClient::new(RecipeClientConfig::default());
//! let recipes = client.fetch_recipes().await?;
//! println!("{} recipes", recipes.len());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use tracing::{debug, info, warn};
use url::Url;

use super::RecipeSource;
use crate::constants::api;
use crate::errors::FetchError;
use crate::models::{Recipe, RecipeListResponse};

/// Recipe API client configuration
#[derive(Debug, Clone)]
pub struct RecipeClientConfig {
    /// Recipe-list endpoint (default: <https://dummyjson.com/recipes>)
    pub url: String,
}

impl Default for RecipeClientConfig {
    fn default() -> Self {
        Self {
            url: api::DEFAULT_RECIPES_URL.to_owned(),
        }
    }
}

impl From<&Url> for RecipeClientConfig {
    fn from(url: &Url) -> Self {
        Self {
            url: url.as_str().to_owned(),
        }
    }
}

/// reqwest-backed [`RecipeSource`]
pub struct RecipeClient {
    config: RecipeClientConfig,
    http_client: reqwest::Client,
}

impl RecipeClient {
    /// Create a new recipe API client
    #[must_use]
    pub fn new(config: RecipeClientConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Endpoint this client fetches from
    #[must_use]
    pub fn url(&self) -> &str {
        &self.config.url
    }
}

#[async_trait]
impl RecipeSource for RecipeClient {
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, FetchError> {
        let url = self.config.url.as_str();
        debug!(url, "Fetching recipe collection");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Unreachable {
                url: url.to_owned(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "{} refused the request", api::RECIPES_SERVICE);
            return Err(FetchError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Unreachable {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        let payload: RecipeListResponse =
            serde_json::from_slice(&body).map_err(|e| FetchError::Malformed {
                reason: format!("{} JSON parse error: {e}", api::RECIPES_SERVICE),
            })?;

        info!(
            url,
            count = payload.recipes.len(),
            total = payload.total,
            "Fetched recipe collection"
        );
        Ok(payload.recipes)
    }
}

/// In-memory [`RecipeSource`] (no network calls)
#[derive(Debug, Clone)]
pub struct StaticRecipeSource {
    outcome: Result<Vec<Recipe>, FetchError>,
}

impl StaticRecipeSource {
    /// Source that always returns `recipes`
    #[must_use]
    pub const fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            outcome: Ok(recipes),
        }
    }

    /// Source that always fails with `error`
    #[must_use]
    pub const fn failing(error: FetchError) -> Self {
        Self {
            outcome: Err(error),
        }
    }

    /// Source decoding a recipe-list JSON body
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Malformed` if the body is not a recipe list
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        let payload: RecipeListResponse =
            serde_json::from_str(body).map_err(|e| FetchError::Malformed {
                reason: e.to_string(),
            })?;
        Ok(Self::new(payload.recipes))
    }
}

#[async_trait]
impl RecipeSource for StaticRecipeSource {
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, FetchError> {
        self.outcome.clone()
    }
}
