//! Certification carousel cursor and its visual mapping.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::time::Duration;

/// Entrance delay added per card position.
pub const CARD_STAGGER: Duration = Duration::from_millis(150);

/// Index of the focal card, wrapping in both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselCursor {
    index: usize,
    len: usize,
}

impl CarouselCursor {
    /// Cursor at position 0 over `len` cards.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether there is anything to page through.
    #[must_use]
    pub fn is_pageable(&self) -> bool {
        self.len > 1
    }

    /// Step back, wrapping from the first card to the last.
    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
    }

    /// Step forward, wrapping from the last card to the first.
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = if self.index + 1 >= self.len { 0 } else { self.index + 1 };
    }

    /// Jump to `position`; out-of-range positions are ignored.
    pub fn go_to(&mut self, position: usize) {
        if position < self.len {
            self.index = position;
        }
    }

    #[must_use]
    pub fn is_active(&self, position: usize) -> bool {
        self.len > 0 && self.index == position
    }
}

/// Inline style shifting the strip so the focal card is in view.
#[must_use]
pub fn track_style(index: usize) -> String {
    format!("transform: translateX(-{}%);", index * 100)
}

/// Entrance animation delay for the card at `position`.
#[must_use]
pub fn entrance_delay(position: usize) -> Duration {
    CARD_STAGGER.saturating_mul(u32::try_from(position).unwrap_or(u32::MAX))
}

/// Inline style applying [`entrance_delay`].
#[must_use]
pub fn card_style(position: usize) -> String {
    format!("animation-delay: {}ms;", entrance_delay(position).as_millis())
}

/// Class list for the card at `position`.
#[must_use]
pub fn card_class(cursor: &CarouselCursor, position: usize) -> &'static str {
    if cursor.is_active(position) {
        "cert-card is-active"
    } else {
        "cert-card"
    }
}
