use super::*;

#[test]
fn parse_font_size_accepts_plain_numbers() {
    assert_eq!(parse_font_size("14"), Some(14.0));
    assert_eq!(parse_font_size(" 18.5 "), Some(18.5));
}

#[test]
fn parse_font_size_clamps_to_supported_range() {
    assert_eq!(parse_font_size("1"), Some(MIN_FONT_SIZE));
    assert_eq!(parse_font_size("400"), Some(MAX_FONT_SIZE));
}

#[test]
fn parse_font_size_rejects_non_numbers() {
    assert_eq!(parse_font_size(""), None);
    assert_eq!(parse_font_size("big"), None);
    assert_eq!(parse_font_size("NaN"), None);
    assert_eq!(parse_font_size("inf"), None);
}

#[test]
fn textarea_style_uses_draft_dimensions() {
    assert_eq!(textarea_style(300.0, 120.0), "width: 300px; height: 120px;");
    assert_eq!(textarea_style(250.5, 80.0), "width: 250.5px; height: 80px;");
}

// =============================================================
// Settling a save or delete
// =============================================================

#[test]
fn settle_busy_failure_shows_error_and_unlocks_buttons() {
    let owner = Owner::new();
    owner.with(|| {
        let busy = RwSignal::new(true);
        let error = RwSignal::new(None::<String>);
        let closed = RwSignal::new(false);
        let on_closed = Callback::new(move |()| closed.set(true));

        settle_busy(busy, error, on_closed, Err(AnnotationModalError::SaveInFlight), "save");

        assert!(!busy.get_untracked());
        assert_eq!(error.get_untracked(), Some(AnnotationModalError::SaveInFlight.to_string()));
        assert!(!closed.get_untracked());
    });
}

#[test]
fn settle_busy_success_closes_without_touching_signals() {
    let owner = Owner::new();
    owner.with(|| {
        let busy = RwSignal::new(true);
        let error = RwSignal::new(None::<String>);
        let closed = RwSignal::new(false);
        let on_closed = Callback::new(move |()| closed.set(true));

        settle_busy(busy, error, on_closed, Ok(()), "delete");

        assert!(closed.get_untracked());
        assert!(busy.get_untracked());
    });
}

#[test]
fn settle_busy_after_unmount_does_not_panic() {
    let owner = Owner::new();
    owner.with(|| {
        let busy = RwSignal::new(true);
        let error = RwSignal::new(None::<String>);
        let on_closed = Callback::new(|()| {});
        busy.dispose();
        error.dispose();

        settle_busy(busy, error, on_closed, Err(AnnotationModalError::SessionClosed), "save");

        assert_eq!(busy.try_get_untracked(), None);
    });
}
