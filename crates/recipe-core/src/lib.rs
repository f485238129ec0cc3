// ABOUTME: Core types and constants for the recipe browser page engine
// ABOUTME: Foundation crate with error handling, pagination, recipe models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe
//! browser. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `FetchError`
//! - **constants**: Page, search, slideshow and offline-cache defaults
//! - **pagination**: "Show more" cursor over a filtered view
//! - **models**: The `Recipe` record and the recipe-list payload

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants and configuration defaults organized by domain
pub mod constants;

/// Incremental "show more" pagination over a filtered view
pub mod pagination;

/// Core data models (Recipe, `RecipeListResponse`)
pub mod models;
