//! # reader-ui
//!
//! Leptos + WASM presentation utilities for the document reader: responsive
//! device detection, the text-annotation dialog controller, and the one-time
//! welcome dialog.
//!
//! Browser-only behavior sits behind the `hydrate` feature. Without it every
//! browser call is a no-op, so the state logic is testable natively.

pub mod components;
pub mod state;
pub mod util;
