// ABOUTME: Configuration management module for the recipe browser
// ABOUTME: Re-exports environment-driven BrowserConfig and Environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! Environment-only configuration: no config files are read.

/// Environment and page configuration
pub mod environment;

pub use environment::{BrowserConfig, Environment};
