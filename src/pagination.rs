// ABOUTME: Re-exports pagination types from recipe-core for unified type identity
// ABOUTME: Ensures PaginationCursor is the same type across all workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::pagination::*;
