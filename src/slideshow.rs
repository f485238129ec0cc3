// ABOUTME: Promotional slideshow controller with random selection and timed auto-advance
// ABOUTME: Cyclic 1-based slide index; manual navigation restarts the auto-advance period
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Slideshow Controller
//!
//! At load time a random subset of the collection is chosen (at most
//! `selection_size` recipes, uniformly, without replacement) and fixed for
//! the page session. The visible slide is a 1-based index that wraps: going
//! below 1 lands on the last slide, going past the last lands on 1.
//!
//! A repeating timer advances one slide per interval. Any manual move
//! (previous, next, indicator dot) changes the index immediately and
//! restarts the timer, so the next automatic advance is always one full
//! interval after the last user action.
//!
//! The random source is injected so tests can seed it.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::timer::TimerHandle;

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowState {
    /// No selection (collection not loaded, or empty); slideshow hidden
    Empty,
    /// Selection shown and auto-advancing on schedule
    Idle,
    /// The current period was started by user navigation; returns to
    /// `Idle` on the next automatic advance
    ManualOverride,
}

/// Direction of a single-step move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// One slide back
    Previous,
    /// One slide forward
    Next,
}

impl SlideDirection {
    /// Signed step
    #[must_use]
    pub const fn offset(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Slideshow selection, index and auto-advance timer
#[derive(Debug, Clone)]
pub struct SlideshowController {
    selection: Vec<usize>,
    index: usize,
    state: SlideshowState,
    auto_advance: TimerHandle,
}

impl SlideshowController {
    /// Controller in the `Empty` state advancing every `interval` once selected
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            selection: Vec::new(),
            index: 0,
            state: SlideshowState::Empty,
            auto_advance: TimerHandle::repeating(interval),
        }
    }

    /// Pick the selection from a collection of `collection_len` recipes
    ///
    /// A non-empty selection starts at slide 1 with the auto-advance timer
    /// armed from `now`. An empty one leaves the controller `Empty` with no
    /// timer.
    pub fn select<R>(&mut self, collection_len: usize, size: usize, rng: &mut R, now: Instant) -> &[usize]
    where
        R: Rng + ?Sized,
    {
        self.selection = sample_indices(collection_len, size, rng);

        if self.selection.is_empty() {
            self.index = 0;
            self.state = SlideshowState::Empty;
            self.auto_advance.cancel();
            debug!("Slideshow hidden: nothing to select");
        } else {
            self.index = 1;
            self.state = SlideshowState::Idle;
            self.auto_advance.restart(now);
            debug!(slides = self.selection.len(), "Slideshow selection fixed");
        }

        &self.selection
    }

    /// Move one slide without touching the timer
    pub fn advance(&mut self, direction: SlideDirection) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let target = isize::try_from(self.index)
            .unwrap_or(isize::MAX)
            .saturating_add(direction.offset());
        self.index = wrap_slide_index(target, self.selection.len());
        self.index
    }

    /// Manual previous/next: move now and restart the auto-advance period
    pub fn navigate(&mut self, direction: SlideDirection, now: Instant) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        self.advance(direction);
        self.manual_override(now);
        self.index
    }

    /// Manual jump to slide `target` (indicator dot), wrapped into range
    pub fn go_to(&mut self, target: isize, now: Instant) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        self.index = wrap_slide_index(target, self.selection.len());
        self.manual_override(now);
        self.index
    }

    /// Fire the auto-advance timer if due; returns whether the slide changed
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.auto_advance.fire_if_due(now) {
            return false;
        }
        self.state = SlideshowState::Idle;
        self.advance(SlideDirection::Next);
        trace!(index = self.index, "Slideshow auto-advanced");
        true
    }

    fn manual_override(&mut self, now: Instant) {
        self.state = SlideshowState::ManualOverride;
        self.auto_advance.restart(now);
        trace!(index = self.index, "Slideshow moved manually, timer restarted");
    }

    /// Selected collection indices in slide order
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Current 1-based slide, 0 when empty
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> SlideshowState {
        self.state
    }

    /// Next automatic advance, if the timer is running
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.auto_advance.deadline()
    }
}

/// Uniform sample of `min(size, len)` distinct indices from `0..len`
///
/// Partial Fisher-Yates shuffle: only the first `size` positions are
/// shuffled, and they come back in the order they were drawn.
pub fn sample_indices<R>(len: usize, size: usize, rng: &mut R) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    let mut indices: Vec<usize> = (0..len).collect();
    let (chosen, _) = indices.partial_shuffle(rng, size.min(len));
    chosen.to_vec()
}

/// Wrap a 1-based slide number into `[1, len]`
///
/// Anything at or below 0 becomes the last slide; anything past the last
/// becomes slide 1. Returns 0 for an empty slideshow.
#[must_use]
pub const fn wrap_slide_index(target: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if target < 1 {
        len
    } else if target as usize > len {
        1
    } else {
        target as usize
    }
}
