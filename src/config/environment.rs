// ABOUTME: Environment configuration management for the recipe browser
// ABOUTME: Handles environment variables for the API endpoint, paging, and timer periods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! Every setting has a default from `recipe_core::constants`; environment
//! variables override them and the CLI may override the result again.

use crate::constants::{api, pagination, search, slideshow};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Environment type for logging and defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Recipe browser configuration
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Recipe-list endpoint
    pub recipes_url: Url,
    /// Recipes revealed per "show more"
    pub page_size: usize,
    /// Quiet period before a search query is applied
    pub search_debounce: Duration,
    /// Slideshow auto-advance period
    pub slideshow_interval: Duration,
    /// Number of recipes in the slideshow
    pub slideshow_size: usize,
    /// Fixed seed for the slideshow sampler; random when unset
    pub slideshow_seed: Option<u64>,
    /// Origin serving the page assets for the offline cache
    pub offline_asset_base_url: Option<Url>,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            recipes_url: default_recipes_url(),
            page_size: pagination::PAGE_SIZE,
            search_debounce: Duration::from_millis(search::DEBOUNCE_MS),
            slideshow_interval: Duration::from_millis(slideshow::INTERVAL_MS),
            slideshow_size: slideshow::SELECTION_SIZE,
            slideshow_seed: None,
            offline_asset_base_url: None,
            environment: Environment::default(),
        }
    }
}

impl BrowserConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set but cannot be parsed,
    /// or when the resulting configuration fails [`BrowserConfig::validate`]
    pub fn from_env() -> AppResult<Self> {
        info!("Loading recipe browser configuration from environment variables");

        let config = Self {
            recipes_url: parse_url(&env_var_or("RECIPES_API_URL", api::DEFAULT_RECIPES_URL))?,
            page_size: env_parse_or("RECIPES_PAGE_SIZE", pagination::PAGE_SIZE)?,
            search_debounce: Duration::from_millis(env_parse_or(
                "SEARCH_DEBOUNCE_MS",
                search::DEBOUNCE_MS,
            )?),
            slideshow_interval: Duration::from_millis(env_parse_or(
                "SLIDESHOW_INTERVAL_MS",
                slideshow::INTERVAL_MS,
            )?),
            slideshow_size: env_parse_or("SLIDESHOW_SIZE", slideshow::SELECTION_SIZE)?,
            slideshow_seed: env::var("SLIDESHOW_SEED")
                .ok()
                .map(|raw| parse_value("SLIDESHOW_SEED", &raw))
                .transpose()?,
            offline_asset_base_url: env::var("OFFLINE_ASSET_BASE_URL")
                .ok()
                .map(|raw| parse_url(&raw))
                .transpose()?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
        };

        config.validate()?;
        debug!(?config, "Recipe browser configuration loaded");
        Ok(config)
    }

    /// Check invariants the page engine relies on
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a zero page size or a zero slideshow period
    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::config("RECIPES_PAGE_SIZE must be at least 1"));
        }

        if self.slideshow_interval.is_zero() {
            return Err(AppError::config("SLIDESHOW_INTERVAL_MS must be at least 1"));
        }

        if self.slideshow_size == 0 {
            warn!("SLIDESHOW_SIZE is 0, the slideshow will stay hidden");
        }

        Ok(())
    }
}

fn default_recipes_url() -> Url {
    // The constant is a well-formed absolute URL
    Url::parse(api::DEFAULT_RECIPES_URL).unwrap_or_else(|_| unreachable!())
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_parse_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    env::var(key).map_or(Ok(default), |raw| parse_value(key, &raw))
}

fn parse_value<T>(key: &str, raw: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::config(format!("Invalid {key} value {raw:?}: {e}")))
}

fn parse_url(raw: &str) -> AppResult<Url> {
    Url::parse(raw.trim())
        .map_err(|e| AppError::config(format!("Invalid URL {raw:?}: {e}")).with_source(e))
}
