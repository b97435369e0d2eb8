//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each model is a plain struct with pure transitions so it can be unit tested
//! without a browser. Components wrap them in `RwSignal`s and own the timers
//! and event listeners that drive the transitions.

pub mod bubbles;
pub mod carousel;
pub mod image;
pub mod theme;
pub mod toast;
pub mod tooltip;
pub mod ui;
