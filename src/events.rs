// ABOUTME: Input events a page session reacts to
// ABOUTME: Search typing, cuisine choice, show-more, slideshow navigation and recipe selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// User input delivered to a [`crate::page::RecipePage`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PageEvent {
    /// Search box content changed (debounced)
    SearchChanged(String),
    /// Cuisine selector changed; empty string means all cuisines
    CuisineChanged(String),
    /// "Show more" pressed
    RevealMoreRequested,
    /// Slideshow previous arrow
    SlidePrev,
    /// Slideshow next arrow
    SlideNext,
    /// Slideshow indicator dot, 1-based
    SlideDotClicked(usize),
    /// A recipe card was opened
    RecipeSelected(u64),
}
