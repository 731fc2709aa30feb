use super::*;

fn viewport(width: f64, height: f64) -> Viewport {
    Viewport { width, height }
}

// =============================================================
// Breakpoints
// =============================================================

#[test]
fn default_breakpoints_match_reader_layout() {
    let bp = Breakpoints::default();
    assert_eq!(bp.mobile_max, 768.0);
    assert_eq!(bp.tablet_max, 1024.0);
}

#[test]
fn classify_below_mobile_max_is_mobile() {
    let bp = Breakpoints::default();
    assert_eq!(bp.classify(320.0), DeviceClass::Mobile);
    assert_eq!(bp.classify(767.9), DeviceClass::Mobile);
}

#[test]
fn classify_boundaries_are_exclusive() {
    let bp = Breakpoints::default();
    assert_eq!(bp.classify(768.0), DeviceClass::Tablet);
    assert_eq!(bp.classify(1023.0), DeviceClass::Tablet);
    assert_eq!(bp.classify(1024.0), DeviceClass::Desktop);
    assert_eq!(bp.classify(2560.0), DeviceClass::Desktop);
}

#[test]
fn classify_respects_custom_breakpoints() {
    let bp = Breakpoints {
        mobile_max: 600.0,
        tablet_max: 900.0,
    };
    assert_eq!(bp.classify(700.0), DeviceClass::Tablet);
    assert_eq!(bp.classify(900.0), DeviceClass::Desktop);
}

// =============================================================
// DeviceInfo
// =============================================================

#[test]
fn device_info_default_is_landscape_desktop() {
    let info = DeviceInfo::default();
    assert!(info.is_desktop());
    assert!(!info.touch);
    assert!(!info.is_portrait());
    assert_eq!(DeviceClass::default(), DeviceClass::Desktop);
}

#[test]
fn device_info_from_phone_viewport() {
    let info = DeviceInfo::from_viewport(viewport(390.0, 844.0), true, &Breakpoints::default());
    assert!(info.is_mobile());
    assert!(!info.is_tablet());
    assert!(!info.is_desktop());
    assert!(info.is_portrait());
    assert!(info.touch);
}

#[test]
fn device_info_from_tablet_viewport() {
    let info = DeviceInfo::from_viewport(viewport(1000.0, 700.0), true, &Breakpoints::default());
    assert!(info.is_tablet());
    assert!(!info.is_portrait());
}

// =============================================================
// Browser reads
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_device_info_is_none_outside_browser() {
    assert_eq!(read_device_info(&Breakpoints::default()), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn use_device_info_starts_from_default_outside_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let info = use_device_info(Breakpoints::default());
        assert_eq!(info.get_untracked(), DeviceInfo::default());
    });
}

// =============================================================
// Debounce cleanup
// =============================================================

#[test]
fn cancel_pending_empties_the_timer_slot() {
    let owner = Owner::new();
    owner.with(|| {
        let pending = StoredValue::new_local(Some(DeferredTask::schedule(RESIZE_DEBOUNCE_MS, || {})));
        cancel_pending(pending);
        assert!(pending.with_value(Option::is_none));
        // A second cleanup finds nothing to cancel.
        cancel_pending(pending);
        assert!(pending.with_value(Option::is_none));
    });
}

#[test]
fn cancel_pending_after_owner_disposal_is_a_no_op() {
    let owner = Owner::new();
    let pending = owner.with(|| StoredValue::new_local(None::<DeferredTask>));
    pending.dispose();
    cancel_pending(pending);
}

#[test]
fn refresh_device_info_updates_a_changed_viewport() {
    let owner = Owner::new();
    owner.with(|| {
        let info = RwSignal::new(DeviceInfo::default());
        let phone = DeviceInfo::from_viewport(viewport(390.0, 844.0), true, &Breakpoints::default());
        refresh_device_info(info, Some(phone));
        assert_eq!(info.get_untracked(), phone);
        refresh_device_info(info, None);
        assert_eq!(info.get_untracked(), phone);
    });
}

#[test]
fn refresh_device_info_skips_a_disposed_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let info = RwSignal::new(DeviceInfo::default());
        info.dispose();
        let phone = DeviceInfo::from_viewport(viewport(390.0, 844.0), true, &Breakpoints::default());
        refresh_device_info(info, Some(phone));
        assert_eq!(info.try_get_untracked(), None);
    });
}
