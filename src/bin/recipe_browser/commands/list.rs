// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: One-shot listing command for recipe-browser
// ABOUTME: Fetches, filters, reveals a number of pages and prints the result

use recipe_browser::config::BrowserConfig;
use recipe_browser::errors::AppResult;
use recipe_browser::external::RecipeSource;
use tokio::time::Instant;
use tracing::info;

use super::new_page;
use crate::helpers::display::{print_cuisines, TerminalRenderer};

/// What to show
pub struct ListOptions {
    pub query: String,
    pub cuisine: String,
    pub pages: usize,
    pub detail: Option<u64>,
    pub list_cuisines: bool,
}

/// Run the `list` command
pub async fn run(
    source: &dyn RecipeSource,
    config: &BrowserConfig,
    options: ListOptions,
) -> AppResult<()> {
    let mut page = new_page(config, TerminalRenderer::buffered());
    page.load(source).await?;

    if options.list_cuisines {
        print_cuisines(&page.store().cuisines());
        return Ok(());
    }

    let now = Instant::now();
    if !options.query.is_empty() {
        page.on_search(&options.query, now);
        page.tick(now + config.search_debounce);
    }
    if !options.cuisine.is_empty() {
        page.on_cuisine_change(&options.cuisine);
    }
    for _ in 1..options.pages {
        if !page.has_more() {
            break;
        }
        page.on_reveal_more();
    }

    info!(
        query = %options.query,
        cuisine = %options.cuisine,
        revealed = page.cursor(),
        matches = page.store().view_len(),
        "Listing recipes"
    );
    page.renderer().print_view();

    if let Some(id) = options.detail {
        page.on_view_recipe(id);
        if page.store().find(id).is_none() {
            println!("\nNo recipe with id {id}");
        }
    }

    Ok(())
}
