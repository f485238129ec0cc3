// ABOUTME: "Show more" pagination cursor over a filtered recipe view
// ABOUTME: Reveals fixed-size pages and reports whether more items remain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Count of leading filtered-view items that have been revealed
///
/// Invariant: `0 <= revealed <= view length` whenever the cursor is used
/// with the view it was last reset for. The cursor never moves backwards
/// except through [`PaginationCursor::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationCursor {
    revealed: usize,
}

impl PaginationCursor {
    /// Cursor with nothing revealed
    #[must_use]
    pub const fn new() -> Self {
        Self { revealed: 0 }
    }

    /// Number of revealed items
    #[must_use]
    pub const fn revealed(&self) -> usize {
        self.revealed
    }

    /// Forget everything revealed; called whenever the filtered view changes
    pub fn reset(&mut self) {
        self.revealed = 0;
    }

    /// Reveal the next page of a view of `view_len` items
    ///
    /// Returns the newly revealed index range `[old, new)`, empty when the
    /// view is exhausted.
    pub fn reveal(&mut self, view_len: usize, page_size: usize) -> Range<usize> {
        let start = self.revealed.min(view_len);
        let end = next_cursor(start, page_size, view_len);
        self.revealed = end;
        start..end
    }

    /// Whether a view of `view_len` items still has unrevealed items
    #[must_use]
    pub const fn has_more(&self, view_len: usize) -> bool {
        has_more(self.revealed, view_len)
    }
}

/// `min(cursor + page_size, view_len)`
#[must_use]
pub const fn next_cursor(cursor: usize, page_size: usize, view_len: usize) -> usize {
    let next = cursor.saturating_add(page_size);
    if next < view_len {
        next
    } else {
        view_len
    }
}

/// `cursor < view_len`
#[must_use]
pub const fn has_more(cursor: usize, view_len: usize) -> bool {
    cursor < view_len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::pagination::PAGE_SIZE;

    #[test]
    fn test_reveal_clamps_to_view() {
        let mut cursor = PaginationCursor::new();
        assert_eq!(cursor.reveal(12, 9), 0..9);
        assert!(cursor.has_more(12));
        assert_eq!(cursor.reveal(12, 9), 9..12);
        assert!(!cursor.has_more(12));
        assert_eq!(cursor.reveal(12, 9), 12..12);
        assert_eq!(cursor.revealed(), 12);
    }

    #[test]
    fn test_empty_view() {
        let mut cursor = PaginationCursor::new();
        assert_eq!(cursor.reveal(0, PAGE_SIZE), 0..0);
        assert_eq!(cursor.revealed(), 0);
        assert!(!cursor.has_more(0));
    }

    #[test]
    fn test_reset() {
        let mut cursor = PaginationCursor::new();
        cursor.reveal(30, 9);
        cursor.reset();
        assert_eq!(cursor.revealed(), 0);
    }
}
