//! One-time welcome dialog preference.
//!
//! The dismissal is stored in `localStorage` as a small JSON object. Like the
//! other browser preferences, persistence is best effort: storage errors are
//! logged and otherwise ignored, and SSR never shows the dialog.

#[cfg(test)]
#[path = "welcome_test.rs"]
mod welcome_test;

use serde::{Deserialize, Serialize};

pub const WELCOME_STORAGE_KEY: &str = "reader_welcome_dismissed";

/// Persisted welcome-dialog preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomePreference {
    pub dismissed: bool,
}

/// Parse a stored value. Bare `true`/`false` from older builds is accepted.
pub fn parse_preference(raw: &str) -> Option<WelcomePreference> {
    serde_json::from_str::<WelcomePreference>(raw)
        .ok()
        .or_else(|| {
            serde_json::from_str::<bool>(raw)
                .ok()
                .map(|dismissed| WelcomePreference { dismissed })
        })
}

/// The dialog shows until a dismissal has been stored.
pub fn welcome_visible(stored: Option<WelcomePreference>) -> bool {
    !stored.is_some_and(|pref| pref.dismissed)
}

/// Whether the welcome dialog should open on this page load.
pub fn should_show_welcome() -> bool {
    #[cfg(feature = "hydrate")]
    {
        welcome_visible(load_preference())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Remember that the user has seen the welcome dialog.
pub fn dismiss_welcome() {
    save_preference(WelcomePreference { dismissed: true });
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn load_preference() -> Option<WelcomePreference> {
    let raw = local_storage()?.get_item(WELCOME_STORAGE_KEY).ok().flatten()?;
    parse_preference(&raw)
}

fn save_preference(pref: WelcomePreference) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(&pref) else {
            return;
        };
        if storage.set_item(WELCOME_STORAGE_KEY, &raw).is_err() {
            leptos::logging::warn!("failed to persist welcome dismissal");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pref;
    }
}
