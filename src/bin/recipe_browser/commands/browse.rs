// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Interactive browsing command for recipe-browser
// ABOUTME: Maps stdin lines to page events and drives the page with real timers

use recipe_browser::config::BrowserConfig;
use recipe_browser::errors::{AppError, AppResult};
use recipe_browser::events::PageEvent;
use recipe_browser::external::RecipeSource;
use recipe_browser::runtime::PageRuntime;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::new_page;
use crate::helpers::display::TerminalRenderer;

const HELP: &str = "\
Commands:
  search <text>    filter by text (applied after a short pause)
  cuisine [name]   filter by cuisine, empty for all
  more             show the next page
  next | prev      move the slideshow
  dot <n>          jump to slide n
  view <id>        show a recipe in full
  help             show this help
  quit             leave";

/// One parsed stdin line
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Event(PageEvent),
    Help,
    Quit,
    Invalid(String),
}

/// Run the `browse` command until stdin closes or the user quits
pub async fn run(source: &dyn RecipeSource, config: &BrowserConfig) -> AppResult<()> {
    println!("{HELP}");

    let page = new_page(config, TerminalRenderer::live());
    let (tx, rx) = mpsc::channel(32);
    let reader = tokio::spawn(read_commands(tx));

    let page = PageRuntime::new(page).run(source, rx).await;
    info!(revealed = page.cursor(), "Browse session ended");

    reader
        .await
        .map_err(|e| AppError::internal(format!("stdin reader failed: {e}")))?
}

async fn read_commands(tx: mpsc::Sender<PageEvent>) -> AppResult<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| AppError::internal(format!("Failed to read stdin: {e}")))?
    {
        match parse_input(&line) {
            Input::Event(event) => {
                debug!(?event, "Dispatching input");
                if tx.send(event).await.is_err() {
                    break;
                }
            }
            Input::Help => println!("{HELP}"),
            Input::Quit => break,
            Input::Invalid(reason) => println!("{reason} (type 'help')"),
        }
    }

    Ok(())
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let (command, argument) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));

    match command.to_lowercase().as_str() {
        "search" | "s" => Input::Event(PageEvent::SearchChanged(argument.to_owned())),
        "cuisine" | "c" => Input::Event(PageEvent::CuisineChanged(argument.to_owned())),
        "more" | "m" => Input::Event(PageEvent::RevealMoreRequested),
        "next" | "n" => Input::Event(PageEvent::SlideNext),
        "prev" | "p" => Input::Event(PageEvent::SlidePrev),
        "dot" => argument.parse().map_or_else(
            |_| Input::Invalid(format!("'{argument}' is not a slide number")),
            |slide| Input::Event(PageEvent::SlideDotClicked(slide)),
        ),
        "view" | "v" => argument.parse().map_or_else(
            |_| Input::Invalid(format!("'{argument}' is not a recipe id")),
            |id| Input::Event(PageEvent::RecipeSelected(id)),
        ),
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        "" => Input::Invalid("Empty command".to_owned()),
        other => Input::Invalid(format!("Unknown command '{other}'")),
    }
}
