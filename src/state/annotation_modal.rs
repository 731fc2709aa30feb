//! Text-annotation modal controller (create / edit / delete workflow).
//!
//! DESIGN
//! ======
//! The controller owns permission state only: whether a modal session is open
//! and whether a save is in flight. Annotation data belongs to the backend and
//! is reached through persistence callbacks injected by the host. Drafts share
//! the controller's state so their handlers can close the session they were
//! opened for.
//!
//! At most one session exists at a time. `begin_create` / `begin_edit` return
//! `None` while a session is open or a save is pending; requests are never
//! queued.
//!
//! ERROR HANDLING
//! ==============
//! Persistence failures are returned unchanged to the caller and leave the
//! session open so the dialog keeps the user's edits for a retry. The
//! controller does not log them; the rendering boundary does.

#[cfg(test)]
#[path = "annotation_modal_test.rs"]
mod annotation_modal_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::util::deferred::DeferredTask;

/// Backend identifier of an annotation.
pub type AnnotationId = String;

pub const DEFAULT_FONT_SIZE: f64 = 14.0;
pub const DEFAULT_WIDTH: f64 = 300.0;
pub const DEFAULT_HEIGHT: f64 = 120.0;

/// DOM id of the modal element rendered outside the Leptos tree by older
/// reader builds.
pub const LEGACY_MODAL_ELEMENT_ID: &str = "text-annotation-modal";

/// A text annotation as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: AnnotationId,
    pub page: u32,
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_size: f64,
    pub width: f64,
    pub height: f64,
}

/// Payload handed to the create callback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayload {
    pub page: u32,
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
}

/// Payload handed to the edit callback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPayload {
    pub id: AnnotationId,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub page: u32,
    pub font_size: f64,
}

/// Failure reported by a host persistence callback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistError {
    #[error("annotation request failed: {0}")]
    Request(String),
    #[error("annotation not found: {0}")]
    NotFound(AnnotationId),
    #[error("annotation rejected ({status}): {message}")]
    Status { status: u16, message: String },
}

/// Failure returned by draft handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnotationModalError {
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("annotation dialog session is no longer open")]
    SessionClosed,
    #[error("an annotation save is already in progress")]
    SaveInFlight,
}

pub type PersistFuture<T> = LocalBoxFuture<'static, Result<T, PersistError>>;
pub type PersistCreate = Rc<dyn Fn(CreatePayload) -> PersistFuture<Annotation>>;
pub type PersistEdit = Rc<dyn Fn(EditPayload) -> PersistFuture<Annotation>>;
pub type PersistDelete = Rc<dyn Fn(AnnotationId) -> PersistFuture<()>>;
/// Synchronous notice that the host should switch the annotation tool off.
pub type ToolDeactivated = Rc<dyn Fn()>;

/// Snapshot of the controller's permission state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalSession {
    pub open: bool,
    pub editing_id: Option<AnnotationId>,
    pub saving: bool,
}

/// Values the dialog submits. `None` fields fall back per [`DimensionFallbacks`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SaveRequest {
    pub text: String,
    pub font_size: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl SaveRequest {
    /// Request carrying only text; every dimension uses its fallback.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Per-field fallback used when a [`SaveRequest`] leaves a value unset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionFallbacks {
    pub font_size: f64,
    pub width: f64,
    pub height: f64,
}

impl DimensionFallbacks {
    /// Fallbacks for newly created annotations.
    pub const DEFAULT: Self = Self {
        font_size: DEFAULT_FONT_SIZE,
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
    };

    /// Fallbacks for an edit: keep the stored box, reset font size to the default.
    pub fn for_existing(annotation: &Annotation) -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            width: annotation.width,
            height: annotation.height,
        }
    }

    /// Apply each override from `request`, else the matching fallback.
    pub fn resolve(&self, request: &SaveRequest) -> Self {
        Self {
            font_size: request.font_size.unwrap_or(self.font_size),
            width: request.width.unwrap_or(self.width),
            height: request.height.unwrap_or(self.height),
        }
    }
}

#[derive(Default)]
struct ControllerInner {
    session: ModalSession,
    generation: u64,
    /// A draft's persistence call is outstanding. Survives `close_session`.
    in_flight: bool,
    cleanup: Option<DeferredTask>,
}

/// Single-flight controller for the text-annotation dialog.
///
/// Cloning yields another handle to the same state.
#[derive(Clone, Default)]
pub struct AnnotationModalController {
    inner: Rc<RefCell<ControllerInner>>,
}

impl AnnotationModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> ModalSession {
        let inner = self.inner.borrow();
        ModalSession {
            saving: inner.session.saving || inner.in_flight,
            ..inner.session.clone()
        }
    }

    pub fn is_open(&self) -> bool {
        self.inner.borrow().session.open
    }

    pub fn is_saving(&self) -> bool {
        let inner = self.inner.borrow();
        inner.session.saving || inner.in_flight
    }

    /// Open a session for a new annotation at `(page, x, y)`.
    ///
    /// Returns `None` without touching state when a session is already open
    /// or a save is in flight.
    pub fn begin_create(
        &self,
        page: u32,
        x: f64,
        y: f64,
        persist_create: PersistCreate,
        on_tool_deactivated: ToolDeactivated,
    ) -> Option<AnnotationDraft> {
        let generation = self.open_session(None)?;
        Some(AnnotationDraft {
            title: format!("New text – Page {page}"),
            initial_text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            kind: DraftKind::Create {
                page,
                x,
                y,
                persist: persist_create,
            },
            controller: self.clone(),
            generation,
            on_tool_deactivated,
        })
    }

    /// Open a session editing `annotation`. Same guard as [`Self::begin_create`].
    pub fn begin_edit(
        &self,
        annotation: &Annotation,
        persist_edit: PersistEdit,
        persist_delete: PersistDelete,
        on_tool_deactivated: ToolDeactivated,
    ) -> Option<AnnotationDraft> {
        let generation = self.open_session(Some(annotation.id.clone()))?;
        Some(AnnotationDraft {
            title: format!("Edit text – Page {}", annotation.page),
            initial_text: annotation.text.clone(),
            font_size: annotation.font_size,
            width: annotation.width,
            height: annotation.height,
            kind: DraftKind::Edit {
                annotation: annotation.clone(),
                persist_edit,
                persist_delete,
            },
            controller: self.clone(),
            generation,
            on_tool_deactivated,
        })
    }

    /// Reset to idle. Safe to call in any state, any number of times.
    ///
    /// An outstanding persistence call keeps new sessions blocked until it
    /// settles.
    pub fn close_session(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.session = ModalSession::default();
        // Replacing the slot cancels a cleanup that has not fired yet.
        inner.cleanup = Some(DeferredTask::schedule(0, remove_legacy_modal_element));
    }

    /// Mark (or clear) an in-flight save. New sessions are refused while set.
    pub fn set_saving_state(&self, saving: bool) {
        self.inner.borrow_mut().session.saving = saving;
    }

    /// Cancel pending cleanup work and reset. Call when the host view is disposed.
    pub fn teardown(&self) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            inner.session = ModalSession::default();
            inner.in_flight = false;
            inner.cleanup.take()
        };
        if let Some(task) = pending {
            task.cancel();
        }
    }

    fn open_session(&self, editing_id: Option<AnnotationId>) -> Option<u64> {
        let mut inner = self.inner.borrow_mut();
        if inner.session.open || inner.session.saving || inner.in_flight {
            return None;
        }
        inner.generation = inner.generation.wrapping_add(1);
        inner.session.open = true;
        inner.session.editing_id = editing_id;
        Some(inner.generation)
    }

    fn is_current(&self, generation: u64) -> bool {
        let inner = self.inner.borrow();
        inner.session.open && inner.generation == generation
    }

    /// Claim the single persistence slot for the session `generation`.
    fn start_flight(&self, generation: u64) -> Result<(), AnnotationModalError> {
        let mut inner = self.inner.borrow_mut();
        if !inner.session.open || inner.generation != generation {
            return Err(AnnotationModalError::SessionClosed);
        }
        if inner.session.saving || inner.in_flight {
            return Err(AnnotationModalError::SaveInFlight);
        }
        inner.in_flight = true;
        Ok(())
    }

    fn finish_flight(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.in_flight = false;
        inner.session.saving = false;
    }

    fn close_if_current(&self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.close_session();
        true
    }
}

/// Best-effort removal of a modal element left behind by older reader builds.
fn remove_legacy_modal_element() {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            leptos::logging::warn!("legacy annotation modal cleanup skipped: no document");
            return;
        };
        if let Some(element) = document.get_element_by_id(LEGACY_MODAL_ELEMENT_ID) {
            element.remove();
        }
    }
}

#[derive(Clone)]
enum DraftKind {
    Create {
        page: u32,
        x: f64,
        y: f64,
        persist: PersistCreate,
    },
    Edit {
        annotation: Annotation,
        persist_edit: PersistEdit,
        persist_delete: PersistDelete,
    },
}

/// Descriptor of an open dialog: what to show and where user actions go.
#[derive(Clone)]
pub struct AnnotationDraft {
    pub title: String,
    pub initial_text: String,
    pub font_size: f64,
    pub width: f64,
    pub height: f64,
    kind: DraftKind,
    controller: AnnotationModalController,
    generation: u64,
    on_tool_deactivated: ToolDeactivated,
}

impl fmt::Debug for AnnotationDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotationDraft")
            .field("title", &self.title)
            .field("initial_text", &self.initial_text)
            .field("font_size", &self.font_size)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("editing_id", &self.editing_id())
            .finish_non_exhaustive()
    }
}

impl AnnotationDraft {
    /// Id of the annotation being edited, `None` for a create draft.
    pub fn editing_id(&self) -> Option<&str> {
        match &self.kind {
            DraftKind::Create { .. } => None,
            DraftKind::Edit { annotation, .. } => Some(annotation.id.as_str()),
        }
    }

    /// Only edit drafts offer deletion.
    pub fn can_delete(&self) -> bool {
        self.editing_id().is_some()
    }

    /// Persist the dialog contents.
    ///
    /// On success the session closes and the tool is deactivated. On failure
    /// the error is returned and the session stays open.
    ///
    /// # Errors
    ///
    /// [`AnnotationModalError::Persist`] carries the callback's error as-is;
    /// [`AnnotationModalError::SessionClosed`] means this draft's session has
    /// already ended, and [`AnnotationModalError::SaveInFlight`] that another
    /// save or delete is outstanding; nothing was sent in either case.
    pub async fn save(&self, request: SaveRequest) -> Result<Annotation, AnnotationModalError> {
        self.controller.start_flight(self.generation)?;
        let pending = match &self.kind {
            DraftKind::Create { page, x, y, persist } => {
                let dims = DimensionFallbacks::DEFAULT.resolve(&request);
                persist(CreatePayload {
                    page: *page,
                    x: *x,
                    y: *y,
                    text: request.text,
                    width: dims.width,
                    height: dims.height,
                    font_size: dims.font_size,
                })
            }
            DraftKind::Edit {
                annotation,
                persist_edit,
                ..
            } => {
                let dims = DimensionFallbacks::for_existing(annotation).resolve(&request);
                persist_edit(EditPayload {
                    id: annotation.id.clone(),
                    text: request.text,
                    x: annotation.x,
                    y: annotation.y,
                    width: dims.width,
                    height: dims.height,
                    page: annotation.page,
                    font_size: dims.font_size,
                })
            }
        };
        self.settle(pending.await)
    }

    /// Delete the edited annotation. Returns `None` for create drafts.
    ///
    /// Settles like [`Self::save`]: success closes and deactivates, failure
    /// leaves the session open.
    pub fn delete(&self) -> Option<LocalBoxFuture<'_, Result<(), AnnotationModalError>>> {
        let DraftKind::Edit {
            annotation,
            persist_delete,
            ..
        } = &self.kind
        else {
            return None;
        };
        let id = annotation.id.clone();
        Some(Box::pin(async move {
            self.controller.start_flight(self.generation)?;
            let outcome = persist_delete(id).await;
            self.settle(outcome)
        }))
    }

    /// Dismiss the dialog.
    ///
    /// Create drafts also deactivate the tool; edit drafts leave it active.
    /// Does nothing once this draft's session is over, or while its save or
    /// delete is still outstanding.
    pub fn cancel(&self) {
        if self.controller.inner.borrow().in_flight {
            return;
        }
        if !self.controller.close_if_current(self.generation) {
            return;
        }
        if matches!(self.kind, DraftKind::Create { .. }) {
            (self.on_tool_deactivated)();
        }
    }

    fn settle<T>(&self, outcome: Result<T, PersistError>) -> Result<T, AnnotationModalError> {
        self.controller.finish_flight();
        let value = outcome?;
        self.controller.close_if_current(self.generation);
        (self.on_tool_deactivated)();
        Ok(value)
    }
}
