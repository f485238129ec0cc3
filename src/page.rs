// ABOUTME: Page session tying the store, filters, pagination cursor and slideshow together
// ABOUTME: Named event handlers take the current instant so timers stay deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Page
//!
//! A [`RecipePage`] is one page session: created when the page opens,
//! dropped when the user navigates away. It owns every piece of mutable
//! state (collection, filtered view, cursor, slideshow, pending search) and
//! pushes changes to a [`ViewRenderer`].
//!
//! Handlers never read the clock. Callers pass `now`, then call
//! [`RecipePage::tick`] once [`RecipePage::next_deadline`] has passed. The
//! async driver in [`crate::runtime`] does this with real time; tests do it
//! with hand-made instants.
//!
//! Filtering always combines both axes: a debounced search re-applies the
//! current cuisine, and a cuisine change re-applies the latest search text
//! even when its debounce has not fired yet.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::BrowserConfig;
use crate::constants::{pagination, search, slideshow};
use crate::errors::FetchError;
use crate::events::PageEvent;
use crate::external::RecipeSource;
use crate::models::Recipe;
use crate::pagination::PaginationCursor;
use crate::presentation::RecipeDetail;
use crate::slideshow::{SlideDirection, SlideshowController};
use crate::store::RecipeStore;
use crate::timer::{earliest, TimerHandle};
use crate::view::ViewRenderer;

/// Tunables for one page session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    /// Recipes revealed per "show more"
    pub page_size: usize,
    /// Quiet period before a search query is applied
    pub search_debounce: Duration,
    /// Slideshow auto-advance period
    pub slide_interval: Duration,
    /// Number of recipes in the slideshow
    pub slideshow_size: usize,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            page_size: pagination::PAGE_SIZE,
            search_debounce: Duration::from_millis(search::DEBOUNCE_MS),
            slide_interval: Duration::from_millis(slideshow::INTERVAL_MS),
            slideshow_size: slideshow::SELECTION_SIZE,
        }
    }
}

impl From<&BrowserConfig> for PageSettings {
    fn from(config: &BrowserConfig) -> Self {
        Self {
            page_size: config.page_size,
            search_debounce: config.search_debounce,
            slide_interval: config.slideshow_interval,
            slideshow_size: config.slideshow_size,
        }
    }
}

/// One recipe browsing page session
pub struct RecipePage<V: ViewRenderer> {
    settings: PageSettings,
    store: RecipeStore,
    cursor: PaginationCursor,
    slideshow: SlideshowController,
    search_text: String,
    cuisine: String,
    search_debounce: TimerHandle,
    rng: Box<dyn RngCore + Send>,
    renderer: V,
}

impl<V: ViewRenderer> RecipePage<V> {
    /// Page with an entropy-seeded slideshow sampler
    #[must_use]
    pub fn new(renderer: V, settings: PageSettings) -> Self {
        Self::with_rng(renderer, settings, StdRng::from_entropy())
    }

    /// Page with a caller-provided random source for the slideshow sampler
    #[must_use]
    pub fn with_rng<R>(renderer: V, settings: PageSettings, rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        Self {
            settings,
            store: RecipeStore::new(),
            cursor: PaginationCursor::new(),
            slideshow: SlideshowController::new(settings.slide_interval),
            search_text: String::new(),
            cuisine: String::new(),
            search_debounce: TimerHandle::once(settings.search_debounce),
            rng: Box::new(rng),
            renderer,
        }
    }

    /// Fetch the collection and publish the first page and the slideshow
    ///
    /// The slideshow timer starts when the fetch completes. On failure the
    /// renderer gets a reload hint and the page stays empty.
    ///
    /// # Errors
    ///
    /// Returns the source's `FetchError` after reporting it to the renderer
    pub async fn load<S>(&mut self, source: &S) -> Result<(), FetchError>
    where
        S: RecipeSource + ?Sized,
    {
        self.renderer.on_loading(true);
        let outcome = self.store.load(source).await.map(<[Recipe]>::len);
        self.renderer.on_loading(false);

        match outcome {
            Ok(count) => {
                info!(count, "Recipe page loaded");
                self.publish_collection(Instant::now());
                Ok(())
            }
            Err(e) => {
                self.renderer.on_fetch_error(&e.user_message());
                Err(e)
            }
        }
    }

    /// Publish an already-fetched collection as if it had just loaded
    pub fn install_collection(&mut self, recipes: Vec<Recipe>, now: Instant) {
        self.store.replace(recipes);
        self.publish_collection(now);
    }

    fn publish_collection(&mut self, now: Instant) {
        let cuisines = self.store.cuisines();
        self.renderer.on_cuisine_options(&cuisines);

        self.cursor.reset();
        self.cursor
            .reveal(self.store.view_len(), self.settings.page_size);
        self.notify_view();

        self.slideshow.select(
            self.store.len(),
            self.settings.slideshow_size,
            self.rng.as_mut(),
            now,
        );
        self.notify_slideshow();
    }

    /// Search box changed: remember the text and (re)start the debounce
    pub fn on_search(&mut self, text: &str, now: Instant) {
        text.clone_into(&mut self.search_text);
        self.search_debounce.restart(now);
        debug!(query = text, "Search debounce restarted");
    }

    /// Cuisine selector changed: filter immediately with the latest search text
    pub fn on_cuisine_change(&mut self, cuisine: &str) {
        cuisine.clone_into(&mut self.cuisine);
        self.refilter();
    }

    /// "Show more": reveal the next page if anything is left
    pub fn on_reveal_more(&mut self) {
        let view_len = self.store.view_len();
        if !self.cursor.has_more(view_len) {
            debug!("Show more ignored: view fully revealed");
            return;
        }
        let revealed = self.cursor.reveal(view_len, self.settings.page_size);
        debug!(from = revealed.start, to = revealed.end, "Revealed more recipes");
        self.notify_view();
    }

    /// Slideshow previous arrow
    pub fn on_slide_prev(&mut self, now: Instant) {
        self.navigate(SlideDirection::Previous, now);
    }

    /// Slideshow next arrow
    pub fn on_slide_next(&mut self, now: Instant) {
        self.navigate(SlideDirection::Next, now);
    }

    /// Slideshow indicator dot (1-based)
    pub fn on_slide_dot(&mut self, slide: usize, now: Instant) {
        if self.slideshow.selection().is_empty() {
            return;
        }
        let target = isize::try_from(slide).unwrap_or(isize::MAX);
        self.slideshow.go_to(target, now);
        self.notify_slideshow();
    }

    /// Open the detail modal for `id`; unknown ids are ignored
    pub fn on_view_recipe(&mut self, id: u64) {
        let Some(recipe) = self.store.find(id) else {
            warn!(id, "Recipe detail requested for unknown id");
            return;
        };
        let detail = RecipeDetail::from(recipe);
        self.renderer.on_recipe_detail(&detail);
    }

    /// Route an input event to its handler
    pub fn dispatch(&mut self, event: PageEvent, now: Instant) {
        match event {
            PageEvent::SearchChanged(text) => self.on_search(&text, now),
            PageEvent::CuisineChanged(cuisine) => self.on_cuisine_change(&cuisine),
            PageEvent::RevealMoreRequested => self.on_reveal_more(),
            PageEvent::SlidePrev => self.on_slide_prev(now),
            PageEvent::SlideNext => self.on_slide_next(now),
            PageEvent::SlideDotClicked(slide) => self.on_slide_dot(slide, now),
            PageEvent::RecipeSelected(id) => self.on_view_recipe(id),
        }
    }

    /// Fire every timer due at `now`, earliest deadline first
    ///
    /// Returns how many timer firings were handled.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut fired = 0;

        while let Some(deadline) = self.next_deadline().filter(|&d| d <= now) {
            if self.search_debounce.deadline() == Some(deadline)
                && self.search_debounce.fire_if_due(now)
            {
                debug!(query = %self.search_text, "Search debounce fired");
                self.refilter();
            } else if self.slideshow.tick(now) {
                self.notify_slideshow();
            } else {
                break;
            }
            fired += 1;
        }

        fired
    }

    /// Earliest armed timer deadline, if any
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        earliest(self.search_debounce.deadline(), self.slideshow.next_deadline())
    }

    fn navigate(&mut self, direction: SlideDirection, now: Instant) {
        if self.slideshow.selection().is_empty() {
            return;
        }
        self.slideshow.navigate(direction, now);
        self.notify_slideshow();
    }

    fn refilter(&mut self) {
        self.store.apply_filters(&self.search_text, &self.cuisine);
        self.cursor.reset();
        self.cursor
            .reveal(self.store.view_len(), self.settings.page_size);
        self.notify_view();
    }

    fn notify_view(&mut self) {
        let view = self.store.view_recipes();
        self.renderer
            .on_filtered_view_changed(&view, self.cursor.revealed());
    }

    fn notify_slideshow(&mut self) {
        let selection = self.store.resolve(self.slideshow.selection());
        self.renderer
            .on_slideshow_changed(&selection, self.slideshow.index());
    }

    /// Session tunables
    #[must_use]
    pub const fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// Collection and filtered view
    #[must_use]
    pub const fn store(&self) -> &RecipeStore {
        &self.store
    }

    /// Number of recipes of the filtered view currently revealed
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor.revealed()
    }

    /// Whether "show more" has anything left to reveal
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.cursor.has_more(self.store.view_len())
    }

    /// Slideshow controller
    #[must_use]
    pub const fn slideshow(&self) -> &SlideshowController {
        &self.slideshow
    }

    /// Latest typed search text (possibly not applied yet)
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Selected cuisine, empty for all
    #[must_use]
    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    /// Whether a typed search is still waiting for its debounce
    #[must_use]
    pub const fn search_pending(&self) -> bool {
        self.search_debounce.is_armed()
    }

    /// Renderer
    #[must_use]
    pub const fn renderer(&self) -> &V {
        &self.renderer
    }
}
