// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for recipe-browser
// ABOUTME: One-shot listing, interactive browsing and offline cache installation

pub mod browse;
pub mod list;
pub mod precache;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use recipe_browser::config::BrowserConfig;
use recipe_browser::page::{PageSettings, RecipePage};

use crate::helpers::display::TerminalRenderer;

/// Page session for `config`, with a reproducible slideshow when a seed is set
pub fn new_page(config: &BrowserConfig, renderer: TerminalRenderer) -> RecipePage<TerminalRenderer> {
    let settings = PageSettings::from(config);
    match config.slideshow_seed {
        Some(seed) => RecipePage::with_rng(renderer, settings, ChaCha8Rng::seed_from_u64(seed)),
        None => RecipePage::new(renderer, settings),
    }
}
