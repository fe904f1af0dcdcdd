//! UI Model
//!
//! Focus, dialogs, the preview modal and transient messages.

use std::time::Instant;

use super::types::PreviewState;
use crate::logic;
use crate::logic::sequencing::RequestSequencer;
use crate::{FilterField, Focus};

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Signed-in administrator, shown in the status bar
    pub admin_name: Option<String>,

    // ============================================
    // FOCUS
    // ============================================
    pub focus: Focus,

    /// Dropdown list open for this filter
    pub open_dropdown: Option<FilterField>,

    /// Highlighted row in the open dropdown (0 is "unselected")
    pub dropdown_index: usize,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Blocking message; must be dismissed before anything else
    pub alert: Option<String>,

    /// Delete confirmation for this resource name
    pub confirm_delete: Option<String>,

    /// Preview modal
    pub preview: Option<PreviewState>,

    /// Orders preview downloads; a closed or replaced modal ignores late results
    pub preview_requests: RequestSequencer,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            admin_name: None,
            focus: Focus::Filter(FilterField::Branch),
            open_dropdown: None,
            dropdown_index: 0,
            alert: None,
            confirm_delete: None,
            preview: None,
            preview_requests: RequestSequencer::new(),
            toast_message: None,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.alert.is_some() || self.confirm_delete.is_some() || self.preview.is_some()
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.alert = None;
        self.confirm_delete = None;
        self.close_preview();
        self.open_dropdown = None;
    }

    pub fn show_alert(&mut self, message: String) {
        tracing::debug!("Alert: {}", message);
        self.alert = Some(message);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
        self.preview_requests.cancel();
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        self.open_dropdown = None;
        self.focus = logic::ui::cycle_focus(self.focus, forward);
    }
}
