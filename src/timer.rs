// ABOUTME: Deadline-based timer handles for the search debounce and slideshow auto-advance
// ABOUTME: Supports arm, cancel and cancel-and-restart without reading the clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Explicit timer handles
//!
//! A [`TimerHandle`] only stores its next deadline. Callers pass the current
//! instant in, which keeps the page engine deterministic under test; the
//! async driver in [`crate::runtime`] sleeps until [`TimerHandle::deadline`].

use std::time::Duration;
use tokio::time::Instant;

/// Whether a timer fires once or keeps firing every period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    /// Fires once, then disarms (search debounce)
    Once,
    /// Fires every period until cancelled (slideshow auto-advance)
    Repeating,
}

/// A cancellable, restartable timer
#[derive(Debug, Clone)]
pub struct TimerHandle {
    period: Duration,
    mode: TimerMode,
    deadline: Option<Instant>,
}

impl TimerHandle {
    /// Single-shot timer firing `delay` after each start
    #[must_use]
    pub const fn once(delay: Duration) -> Self {
        Self {
            period: delay,
            mode: TimerMode::Once,
            deadline: None,
        }
    }

    /// Recurring timer firing every `period` after start
    #[must_use]
    pub const fn repeating(period: Duration) -> Self {
        Self {
            period,
            mode: TimerMode::Repeating,
            deadline: None,
        }
    }

    /// Cancel any pending deadline and arm the timer one period after `now`
    pub fn restart(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    /// Disarm the timer
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Next instant at which the timer fires, if armed
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether a deadline is pending
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume one firing if the deadline has passed
    ///
    /// A repeating timer re-arms relative to its previous deadline rather
    /// than `now`, so late polling does not drift the schedule; call this in
    /// a loop to catch up on several missed periods.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = match self.mode {
                    TimerMode::Once => None,
                    TimerMode::Repeating => Some(deadline + self.period),
                };
                true
            }
            _ => false,
        }
    }
}

/// Earliest of two optional deadlines
#[must_use]
pub fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
