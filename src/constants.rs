// ABOUTME: Re-exports constants from recipe-core
// ABOUTME: Page size, debounce and slideshow timing, API endpoint, offline manifest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::constants::*;
