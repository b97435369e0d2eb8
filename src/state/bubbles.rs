//! Cursor bubble trail model.
//!
//! Bubbles are appended on pointer movement and expire strictly oldest-first,
//! one per decay tick. The queue is bounded: emitting into a full trail drops
//! the oldest bubble before appending, so fast pointer motion can never grow
//! it past [`BUBBLE_CAPACITY`].
//!
//! The model only tracks whether a decay tick is pending; the owning
//! component schedules the actual timer when [`BubbleTrail::push`] or
//! [`BubbleTrail::expire_oldest`] say so.

#[cfg(test)]
#[path = "bubbles_test.rs"]
mod bubbles_test;

use std::collections::VecDeque;
use std::time::Duration;

use rand::Rng;

/// Maximum number of live bubbles.
pub const BUBBLE_CAPACITY: usize = 48;
/// Delay between two oldest-first removals.
pub const DECAY_DELAY: Duration = Duration::from_millis(600);
/// Smallest bubble diameter in px (inclusive).
pub const MIN_BUBBLE_SIZE: f64 = 12.0;
/// Largest bubble diameter in px (exclusive).
pub const MAX_BUBBLE_SIZE: f64 = 30.0;

/// Fixed bubble palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BubbleColor {
    Fuchsia,
    Cyan,
    Lime,
    Amber,
    Violet,
    Rose,
    Indigo,
    Emerald,
    Orange,
}

impl BubbleColor {
    pub const ALL: [Self; 9] = [
        Self::Fuchsia,
        Self::Cyan,
        Self::Lime,
        Self::Amber,
        Self::Violet,
        Self::Rose,
        Self::Indigo,
        Self::Emerald,
        Self::Orange,
    ];

    /// Draw a palette entry uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// CSS modifier class carrying the fill color.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Fuchsia => "bubble--fuchsia",
            Self::Cyan => "bubble--cyan",
            Self::Lime => "bubble--lime",
            Self::Amber => "bubble--amber",
            Self::Violet => "bubble--violet",
            Self::Rose => "bubble--rose",
            Self::Indigo => "bubble--indigo",
            Self::Emerald => "bubble--emerald",
            Self::Orange => "bubble--orange",
        }
    }
}

/// One decorative bubble at viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: BubbleColor,
}

impl Bubble {
    #[must_use]
    pub fn class(&self) -> String {
        format!("bubble-sprinkle {}", self.color.class())
    }

    /// Inline style positioning the bubble at the pointer.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}px; top: {:.1}px; width: {size:.1}px; height: {size:.1}px;",
            self.x,
            self.y,
            size = self.size
        )
    }
}

/// Bounded FIFO of live bubbles plus the pending-decay flag.
#[derive(Clone, Debug)]
pub struct BubbleTrail {
    bubbles: VecDeque<Bubble>,
    next_id: u64,
    capacity: usize,
    decay_armed: bool,
}

impl Default for BubbleTrail {
    fn default() -> Self {
        Self::with_capacity(BUBBLE_CAPACITY)
    }
}

impl BubbleTrail {
    /// Trail holding at most `capacity` bubbles (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            bubbles: VecDeque::with_capacity(capacity),
            next_id: 0,
            capacity,
            decay_armed: false,
        }
    }

    /// Synthesize a bubble with random color and size at `(x, y)`.
    ///
    /// Returns `true` when the caller must schedule a decay tick.
    pub fn emit<R: Rng + ?Sized>(&mut self, x: f64, y: f64, rng: &mut R) -> bool {
        let color = BubbleColor::random(rng);
        let size = rng.random_range(MIN_BUBBLE_SIZE..MAX_BUBBLE_SIZE);
        self.push(x, y, size, color)
    }

    /// Append a bubble, dropping the oldest one when the trail is full.
    ///
    /// Returns `true` when no decay tick was pending, i.e. the caller must
    /// schedule one now.
    pub fn push(&mut self, x: f64, y: f64, size: f64, color: BubbleColor) -> bool {
        if self.bubbles.len() >= self.capacity {
            self.bubbles.pop_front();
        }
        self.bubbles.push_back(Bubble {
            id: self.next_id,
            x,
            y,
            size,
            color,
        });
        self.next_id += 1;

        if self.decay_armed {
            return false;
        }
        self.decay_armed = true;
        true
    }

    /// Handle a decay tick: remove the oldest bubble.
    ///
    /// Afterwards [`Self::decay_armed`] reports whether another tick must be
    /// scheduled.
    pub fn expire_oldest(&mut self) -> Option<Bubble> {
        let removed = self.bubbles.pop_front();
        self.decay_armed = !self.bubbles.is_empty();
        removed
    }

    /// Forget the pending tick (its timer was cancelled).
    pub fn disarm(&mut self) {
        self.decay_armed = false;
    }

    #[must_use]
    pub fn decay_armed(&self) -> bool {
        self.decay_armed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn oldest(&self) -> Option<&Bubble> {
        self.bubbles.front()
    }

    /// Bubbles in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Bubble> {
        self.bubbles.iter()
    }
}
