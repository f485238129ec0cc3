// ABOUTME: Core data models for the recipe browser
// ABOUTME: Re-exports Recipe and the recipe-list payload returned by the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Recipes are supplied by the external API and never edited during a page
//! session. Field names follow the API's camelCase JSON.

mod recipe;

pub use recipe::{Recipe, RecipeListResponse};
