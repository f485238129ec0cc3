// ABOUTME: Recipe browser CLI - browse a recipe collection from the terminal
// ABOUTME: One-shot listing, interactive browsing with live timers, and offline precache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # First page of every recipe
//! recipe-browser list
//!
//! # Italian recipes mentioning tomato, two pages
//! recipe-browser list --query tomato --cuisine Italian --pages 2
//!
//! # Available cuisines
//! recipe-browser list --list-cuisines
//!
//! # Full detail for one recipe
//! recipe-browser list --detail 7
//!
//! # Interactive session (search, cuisine, more, next, prev, dot, view, quit)
//! recipe-browser browse --seed 42
//!
//! # Work from a saved API response instead of the network
//! recipe-browser --fixture recipes.json browse
//!
//! # Install the offline asset cache
//! recipe-browser precache --base-url http://localhost:8080/
//! ```

mod commands;
mod helpers;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use recipe_browser::config::BrowserConfig;
use recipe_browser::errors::{AppError, AppResult};
use recipe_browser::external::{
    RecipeClient, RecipeClientConfig, RecipeSource, StaticRecipeSource,
};
use recipe_browser::logging::LoggingConfig;
use tracing::info;
use url::Url;

#[derive(Parser)]
#[command(
    name = "recipe-browser",
    about = "Browse recipes from the terminal",
    long_about = "Search, filter and page through a recipe collection, with a rotating slideshow and an offline asset cache."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe-list endpoint override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Read the recipe list from a JSON file instead of the API
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// Recipes revealed per page
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Seed for the slideshow selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print filtered recipes and exit
    List {
        /// Search text (name, cuisine, ingredients, tags)
        #[arg(long, default_value = "")]
        query: String,

        /// Exact cuisine
        #[arg(long, default_value = "")]
        cuisine: String,

        /// Number of pages to reveal
        #[arg(long, default_value = "1")]
        pages: usize,

        /// Also print the full recipe with this id
        #[arg(long)]
        detail: Option<u64>,

        /// Print the available cuisines instead of recipes
        #[arg(long)]
        list_cuisines: bool,
    },

    /// Interactive session driven by stdin commands
    Browse,

    /// Fetch the page assets into the offline cache
    Precache {
        /// Origin serving the page assets
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::for_interactive();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let config = load_config(&cli)?;
    info!(url = %config.recipes_url, environment = %config.environment, "Recipe browser starting");

    match cli.command {
        Command::List {
            query,
            cuisine,
            pages,
            detail,
            list_cuisines,
        } => {
            let source = recipe_source(&config, cli.fixture.as_deref())?;
            let options = commands::list::ListOptions {
                query,
                cuisine,
                pages,
                detail,
                list_cuisines,
            };
            commands::list::run(source.as_ref(), &config, options).await?;
        }
        Command::Browse => {
            let source = recipe_source(&config, cli.fixture.as_deref())?;
            commands::browse::run(source.as_ref(), &config).await?;
        }
        Command::Precache { base_url } => {
            let base_url = base_url.as_deref().map(parse_url).transpose()?;
            commands::precache::run(&config, base_url).await?;
        }
    }

    Ok(())
}

/// Environment configuration with command-line overrides applied
fn load_config(cli: &Cli) -> AppResult<BrowserConfig> {
    let mut config = BrowserConfig::from_env()?;

    if let Some(api_url) = cli.api_url.as_deref() {
        config.recipes_url = parse_url(api_url)?;
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if cli.seed.is_some() {
        config.slideshow_seed = cli.seed;
    }

    config.validate()?;
    Ok(config)
}

fn recipe_source(config: &BrowserConfig, fixture: Option<&Path>) -> AppResult<Box<dyn RecipeSource>> {
    let Some(path) = fixture else {
        return Ok(Box::new(RecipeClient::new(RecipeClientConfig::from(
            &config.recipes_url,
        ))));
    };

    let body = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read fixture {}: {e}", path.display()))
    })?;
    info!(path = %path.display(), "Using recipe fixture");
    Ok(Box::new(StaticRecipeSource::from_json(&body)?))
}

fn parse_url(raw: &str) -> AppResult<Url> {
    Url::parse(raw).map_err(|e| AppError::config(format!("Invalid URL '{raw}': {e}")))
}
