//! Reader chrome state (active tool, sidebar, device class).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns apart from the annotation controller
//! so the host can wire `on_tool_deactivated` and resize updates into one
//! place.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::device::DeviceInfo;

/// Interaction tools offered by the reader toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolType {
    #[default]
    Select,
    Hand,
    /// Places text annotations on click.
    Text,
}

/// UI state for the reader shell.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub active_tool: ToolType,
    pub sidebar_expanded: bool,
    pub device: DeviceInfo,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_tool: ToolType::Select,
            sidebar_expanded: true,
            device: DeviceInfo::default(),
        }
    }
}

impl UiState {
    /// Return to the select tool after an annotation is committed or dismissed.
    pub fn deactivate_tool(&mut self) {
        self.active_tool = ToolType::Select;
    }

    /// Record a new device snapshot. Entering the mobile class collapses the sidebar.
    pub fn apply_device(&mut self, device: DeviceInfo) {
        if device.is_mobile() && !self.device.is_mobile() {
            self.sidebar_expanded = false;
        }
        self.device = device;
    }
}
