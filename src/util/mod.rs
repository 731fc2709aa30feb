//! Utility helpers shared across reader UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (viewport, storage,
//! timers) from component logic to improve reuse and testability.

pub mod deferred;
pub mod device;
pub mod welcome;
