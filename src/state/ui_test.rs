use super::*;
use crate::util::device::{Breakpoints, Viewport};

fn device(width: f64) -> DeviceInfo {
    DeviceInfo::from_viewport(
        Viewport {
            width,
            height: 800.0,
        },
        false,
        &Breakpoints::default(),
    )
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_tool_is_select() {
    let state = UiState::default();
    assert_eq!(state.active_tool, ToolType::Select);
    assert_eq!(ToolType::default(), ToolType::Select);
}

#[test]
fn ui_state_default_sidebar_expanded_on_desktop() {
    let state = UiState::default();
    assert!(state.sidebar_expanded);
    assert!(state.device.is_desktop());
}

// =============================================================
// Tool deactivation
// =============================================================

#[test]
fn deactivate_tool_returns_to_select() {
    let mut state = UiState {
        active_tool: ToolType::Text,
        ..UiState::default()
    };
    state.deactivate_tool();
    assert_eq!(state.active_tool, ToolType::Select);
}

#[test]
fn tool_type_variants_are_distinct() {
    assert_ne!(ToolType::Select, ToolType::Hand);
    assert_ne!(ToolType::Select, ToolType::Text);
    assert_ne!(ToolType::Hand, ToolType::Text);
}

// =============================================================
// Device updates
// =============================================================

#[test]
fn entering_mobile_collapses_sidebar() {
    let mut state = UiState::default();
    state.apply_device(device(400.0));
    assert!(!state.sidebar_expanded);
    assert!(state.device.is_mobile());
}

#[test]
fn staying_mobile_keeps_user_sidebar_choice() {
    let mut state = UiState::default();
    state.apply_device(device(400.0));
    state.sidebar_expanded = true;
    state.apply_device(device(380.0));
    assert!(state.sidebar_expanded);
}

#[test]
fn leaving_mobile_does_not_force_sidebar_open() {
    let mut state = UiState::default();
    state.apply_device(device(400.0));
    state.apply_device(device(1400.0));
    assert!(!state.sidebar_expanded);
    assert!(state.device.is_desktop());
}
