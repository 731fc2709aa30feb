//! Responsive device and viewport detection.
//!
//! Classifies the browser viewport into mobile / tablet / desktop using
//! width breakpoints and keeps a reactive copy up to date while the window is
//! resized. Resize events are debounced so a drag-resize produces one update.
//!
//! TRADE-OFFS
//! ==========
//! Detection is browser-only. SSR renders with [`DeviceInfo::default`] (a
//! desktop viewport) and the first client-side read corrects it.

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::util::deferred::DeferredTask;

/// Quiet period after the last `resize` event before the viewport is re-read.
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Width thresholds (exclusive upper bounds) between device classes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoints {
    pub mobile_max: f64,
    pub tablet_max: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: 768.0,
            tablet_max: 1024.0,
        }
    }
}

impl Breakpoints {
    pub fn classify(&self, width: f64) -> DeviceClass {
        if width < self.mobile_max {
            DeviceClass::Mobile
        } else if width < self.tablet_max {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

/// Snapshot of the current device as seen by the reader layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceInfo {
    pub viewport: Viewport,
    pub class: DeviceClass,
    /// Whether the device reports touch input points.
    pub touch: bool,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            viewport: Viewport {
                width: 1280.0,
                height: 800.0,
            },
            class: DeviceClass::Desktop,
            touch: false,
        }
    }
}

impl DeviceInfo {
    pub fn from_viewport(viewport: Viewport, touch: bool, breakpoints: &Breakpoints) -> Self {
        Self {
            viewport,
            class: breakpoints.classify(viewport.width),
            touch,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.class == DeviceClass::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.class == DeviceClass::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.class == DeviceClass::Desktop
    }

    /// Portrait when taller than wide.
    pub fn is_portrait(&self) -> bool {
        self.viewport.height > self.viewport.width
    }
}

/// Read the live viewport. Returns `None` outside the browser.
pub fn read_device_info(breakpoints: &Breakpoints) -> Option<DeviceInfo> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        let touch = window.navigator().max_touch_points() > 0;
        Some(DeviceInfo::from_viewport(Viewport { width, height }, touch, breakpoints))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = breakpoints;
        None
    }
}

/// Apply a fresh reading to `info`. A signal disposed while a debounce timer
/// was pending is left alone.
#[cfg(any(test, feature = "hydrate"))]
fn refresh_device_info(info: RwSignal<DeviceInfo>, next: Option<DeviceInfo>) {
    let Some(next) = next else {
        return;
    };
    if info.try_get_untracked().is_some_and(|current| current != next) {
        let _ = info.try_set(next);
    }
}

/// Cancel the pending debounce timer, if any.
#[cfg(any(test, feature = "hydrate"))]
fn cancel_pending(pending: StoredValue<Option<DeferredTask>, LocalStorage>) {
    if let Some(task) = pending.try_update_value(Option::take).flatten() {
        task.cancel();
    }
}

/// Reactive device info, refreshed on debounced window resizes.
///
/// The resize listener and any pending debounce timer are released when the
/// calling owner is cleaned up.
pub fn use_device_info(breakpoints: Breakpoints) -> ReadSignal<DeviceInfo> {
    let info = RwSignal::new(read_device_info(&breakpoints).unwrap_or_default());

    #[cfg(feature = "hydrate")]
    {
        let pending = StoredValue::new_local(None::<DeferredTask>);
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            let task = DeferredTask::schedule(RESIZE_DEBOUNCE_MS, move || {
                refresh_device_info(info, read_device_info(&breakpoints));
            });
            // Replacing the previous task cancels it.
            let _ = pending.try_update_value(|slot| *slot = Some(task));
        });
        on_cleanup(move || {
            handle.remove();
            cancel_pending(pending);
        });
    }

    info.read_only()
}
