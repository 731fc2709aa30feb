//! First-visit welcome modal with reading tips.

#[cfg(test)]
#[path = "welcome_modal_test.rs"]
mod welcome_modal_test;

use leptos::prelude::*;

use crate::util::welcome::dismiss_welcome;
#[cfg(feature = "hydrate")]
use crate::util::welcome::should_show_welcome;

#[derive(Clone, Copy)]
struct TipRow {
    action: &'static str,
    how: &'static str,
}

const READING_TIPS: &[TipRow] = &[
    TipRow { action: "Turn pages", how: "Scroll / Arrow keys / Swipe" },
    TipRow { action: "Zoom", how: "Cmd/Ctrl + Mouse wheel / Pinch" },
    TipRow { action: "Pan", how: "Hand tool + Drag / Space + Drag" },
    TipRow { action: "Add a text note", how: "Text tool + Click on the page" },
    TipRow { action: "Edit a note", how: "Double-click the note" },
    TipRow { action: "Delete a note", how: "Open the note + Delete" },
    TipRow { action: "Save a note", how: "Cmd/Ctrl + Enter" },
    TipRow { action: "Close a dialog", how: "Esc" },
];

/// Welcome modal. Escape, backdrop click, or the button close it.
#[component]
pub fn WelcomeModal(on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_start = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="welcome-modal__backdrop" on:click=on_backdrop>
            <div class="welcome-modal" on:click=move |ev| ev.stop_propagation() on:keydown=move |ev| on_keydown.run(ev) tabindex="0">
                <div class="welcome-modal__header">
                    <h2>"Welcome to the reader"</h2>
                </div>
                <div class="welcome-modal__subtitle">"A few things worth knowing"</div>
                <div class="welcome-modal__table-wrap">
                    <table class="welcome-modal__table">
                        <tbody>
                            {READING_TIPS
                                .iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td>{row.action}</td>
                                            <td class="welcome-modal__how">{row.how}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=on_start>"Get started"</button>
                </div>
            </div>
        </div>
    }
}

/// Visibility and close handler behind [`WelcomeGate`].
#[derive(Clone, Copy)]
pub struct WelcomeGateHandle {
    pub visible: ReadSignal<bool>,
    pub close: Callback<()>,
}

/// Starts hidden; on the client it opens once if no dismissal is stored.
pub fn use_welcome_gate() -> WelcomeGateHandle {
    let visible = RwSignal::new(false);

    // Effects only run on the client, so SSR and hydration agree on "hidden".
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if should_show_welcome() {
            visible.set(true);
        }
    });

    let close = Callback::new(move |()| {
        dismiss_welcome();
        let _ = visible.try_set(false);
    });

    WelcomeGateHandle {
        visible: visible.read_only(),
        close,
    }
}

/// Shows [`WelcomeModal`] once per browser; closing it stores the dismissal.
#[component]
pub fn WelcomeGate() -> impl IntoView {
    let WelcomeGateHandle { visible, close } = use_welcome_gate();

    view! {
        <Show when=move || visible.get()>
            <WelcomeModal on_close=close/>
        </Show>
    }
}
