//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`annotation_modal`, `ui`) so components depend
//! on small focused models.

pub mod annotation_modal;
pub mod ui;
