// ABOUTME: Re-exports data models from recipe-core
// ABOUTME: Recipe and RecipeListResponse shared by sources, store and presentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::models::*;
