//! # portfolio
//!
//! Leptos + WASM personal portfolio page.
//!
//! This crate contains the root composition (`app`), the route-level pages,
//! the section and widget components, plain state models for every piece of
//! view state, and thin browser utilities (storage, scrolling, timers). Page
//! literals live in the sibling `content` crate.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
