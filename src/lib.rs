// ABOUTME: Main library entry point for the recipe browser page engine
// ABOUTME: Search, cuisine filtering, show-more pagination, slideshow and offline assets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Recipe Browser
//!
//! Page engine for browsing a recipe collection fetched once from a remote
//! API. Rendering is left to a [`view::ViewRenderer`]; this crate owns the
//! state and the rules.
//!
//! ## Features
//!
//! - **Search**: debounced, case-insensitive substring match over name,
//!   cuisine, ingredients and tags
//! - **Cuisine filter**: exact match, combined with the search text
//! - **Show more**: reveals the filtered view nine recipes at a time
//! - **Slideshow**: five random recipes, auto-advancing every four seconds
//! - **Offline assets**: cache-first serving of the page shell
//!
//! ## Architecture
//!
//! - **Store**: the collection plus the current filtered view
//! - **Page**: one session object receiving input events and timer ticks
//! - **Runtime**: tokio driver supplying real time to the page
//! - **External**: the `RecipeSource` seam and its HTTP client
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_browser::config::BrowserConfig;
//! use recipe_browser::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = BrowserConfig::from_env()?;
//!     println!("Browsing {} with {} recipes per page", config.recipes_url, config.page_size);
//!     Ok(())
//! }
//! ```

/// Offline asset cache for the page shell
pub mod cache;

/// Environment-driven configuration
pub mod config;

/// Application constants re-exported from `recipe-core`
pub mod constants;

/// Unified error handling re-exported from `recipe-core`
pub mod errors;

/// User input events
pub mod events;

/// External recipe sources (HTTP API, in-memory)
pub mod external;

/// Text and cuisine predicates over the collection
pub mod filter;

/// Structured logging setup
pub mod logging;

/// Recipe data models re-exported from `recipe-core`
pub mod models;

/// Page session state machine
pub mod page;

/// "Show more" cursor re-exported from `recipe-core`
pub mod pagination;

/// Card, detail and star-rating view models
pub mod presentation;

/// Async driver for a page session
pub mod runtime;

/// Random promotional slideshow
pub mod slideshow;

/// Recipe collection and filtered view
pub mod store;

/// Cancellable one-shot and repeating timers
pub mod timer;

/// Renderer callbacks
pub mod view;
