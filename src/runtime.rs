// ABOUTME: Tokio driver feeding real time and channel input into a page session
// ABOUTME: Waits on the next event or the earliest timer deadline, whichever comes first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use crate::events::PageEvent;
use crate::external::RecipeSource;
use crate::page::RecipePage;
use crate::view::ViewRenderer;

/// Runs a [`RecipePage`] against wall-clock time
///
/// Events are handled one at a time, each to completion, so the page never
/// sees concurrent input.
pub struct PageRuntime<V: ViewRenderer> {
    page: RecipePage<V>,
}

impl<V: ViewRenderer> PageRuntime<V> {
    /// Wrap a freshly created page
    #[must_use]
    pub const fn new(page: RecipePage<V>) -> Self {
        Self { page }
    }

    /// Load from `source`, then process events until the channel closes
    ///
    /// A failed load is reported to the renderer and the loop still runs,
    /// so the session can be closed normally. Returns the page for
    /// inspection once the sender side is dropped.
    pub async fn run<S>(mut self, source: &S, mut events: mpsc::Receiver<PageEvent>) -> RecipePage<V>
    where
        S: RecipeSource + ?Sized,
    {
        if let Err(e) = self.page.load(source).await {
            info!(error = %e, "Page session continuing without recipes");
        }

        loop {
            let deadline = self.page.next_deadline();
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else {
                        debug!("Event channel closed, ending page session");
                        break;
                    };
                    self.page.dispatch(event, Instant::now());
                }
                () = wait_for(deadline) => {
                    self.page.tick(Instant::now());
                }
            }
        }

        self.page
    }
}

/// Sleep until `deadline`, or forever when no timer is armed
async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
