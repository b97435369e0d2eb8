//! Utility helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, DOM classes,
//! scrolling, timers) from page and component logic. Browser access is only
//! compiled under the `csr` feature; native builds get inert fallbacks so the
//! same code paths are unit-testable.

pub mod dark_mode;
pub mod scroll;
pub mod storage;
pub mod structured_data;
pub mod timer;
