//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render reader dialogs and call back into state owned by the
//! host page. None of them talk to the backend directly.

pub mod annotation_text_dialog;
pub mod welcome_modal;
