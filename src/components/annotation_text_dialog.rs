//! Modal dialog for creating or editing a text annotation.
//!
//! Renders one [`AnnotationDraft`] and routes Save / Cancel / Delete back into
//! it. Failures are logged here and shown inline; the dialog stays open with
//! the user's text so they can retry.

#[cfg(test)]
#[path = "annotation_text_dialog_test.rs"]
mod annotation_text_dialog_test;

use leptos::prelude::*;

use crate::state::annotation_modal::{AnnotationDraft, AnnotationModalError, SaveRequest};

const MIN_FONT_SIZE: f64 = 6.0;
const MAX_FONT_SIZE: f64 = 96.0;

/// Parse the font size input, clamped to the supported range.
fn parse_font_size(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|size| size.is_finite())
        .map(|size| size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE))
}

fn textarea_style(width: f64, height: f64) -> String {
    format!("width: {width}px; height: {height}px;")
}

/// Finish a save or delete. The dialog may already be unmounted by the time the
/// backend answers, so signals are written with `try_set`.
fn settle_busy(
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    on_closed: Callback<()>,
    outcome: Result<(), AnnotationModalError>,
    action: &str,
) {
    match outcome {
        Ok(()) => on_closed.run(()),
        Err(err) => {
            leptos::logging::warn!("annotation {action} failed: {err}");
            let _ = error.try_set(Some(err.to_string()));
            let _ = busy.try_set(false);
        }
    }
}

/// Dialog for one annotation draft. `on_closed` fires once the session ends.
#[component]
pub fn AnnotationTextDialog(draft: AnnotationDraft, on_closed: Callback<()>) -> impl IntoView {
    let title = draft.title.clone();
    let width = draft.width;
    let height = draft.height;
    let can_delete = draft.can_delete();
    let value = RwSignal::new(draft.initial_text.clone());
    let font_size = RwSignal::new(draft.font_size);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let draft = StoredValue::new_local(draft);

    let save = move || {
        if busy.get_untracked() {
            return;
        }
        let request = SaveRequest {
            text: value.get_untracked(),
            font_size: Some(font_size.get_untracked()),
            width: Some(width),
            height: Some(height),
        };
        let draft = draft.get_value();
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let outcome = draft.save(request).await;
            settle_busy(busy, error, on_closed, outcome.map(|_| ()), "save");
        });
    };

    let delete = move |_| {
        if busy.get_untracked() {
            return;
        }
        let draft = draft.get_value();
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let Some(pending) = draft.delete() else {
                let _ = busy.try_set(false);
                return;
            };
            let outcome = pending.await;
            settle_busy(busy, error, on_closed, outcome, "delete");
        });
    };

    let cancel = move || {
        if busy.get_untracked() {
            return;
        }
        draft.with_value(AnnotationDraft::cancel);
        on_closed.run(());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => {
            ev.prevent_default();
            cancel();
        }
        "Enter" if ev.ctrl_key() || ev.meta_key() => {
            ev.prevent_default();
            save();
        }
        _ => {}
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel()>
            <div
                class="dialog dialog--annotation-text"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2 class="dialog__title">{title}</h2>
                <label class="dialog__label">
                    "Text"
                    <textarea
                        class="dialog__textarea"
                        style=textarea_style(width, height)
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                        autofocus=true
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Font size"
                    <input
                        class="dialog__input"
                        type="number"
                        min=MIN_FONT_SIZE.to_string()
                        max=MAX_FONT_SIZE.to_string()
                        prop:value=move || font_size.get().to_string()
                        on:change=move |ev| {
                            if let Some(size) = parse_font_size(&event_target_value(&ev)) {
                                font_size.set(size);
                            }
                        }
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <div class="dialog__error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <div class="dialog__actions">
                    {can_delete
                        .then(|| {
                            view! {
                                <button class="btn btn--danger" disabled=move || busy.get() on:click=delete>
                                    "Delete"
                                </button>
                            }
                        })}
                    <button class="btn" disabled=move || busy.get() on:click=move |_| cancel()>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| save()>
                        {move || if busy.get() { "Saving…" } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
