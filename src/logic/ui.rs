//! UI state transition logic
//!
//! Pure functions for focus cycling and toast timing.

use crate::{FilterField, Focus};

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 2500;

/// Focus order: the four dropdowns, the upload form, then the resource list
const FOCUS_ORDER: [Focus; 7] = [
    Focus::Filter(FilterField::Branch),
    Focus::Filter(FilterField::Semester),
    Focus::Filter(FilterField::Category),
    Focus::Filter(FilterField::Subject),
    Focus::PdfName,
    Focus::FilePath,
    Focus::Resources,
];

/// Cycle focus forward (Tab) or backward (Shift-Tab), wrapping at both ends
///
/// # Examples
/// ```
/// use resadmin::{FilterField, Focus};
/// use resadmin::logic::ui::cycle_focus;
///
/// assert_eq!(cycle_focus(Focus::Resources, true), Focus::Filter(FilterField::Branch));
/// assert_eq!(cycle_focus(Focus::Filter(FilterField::Branch), false), Focus::Resources);
/// ```
pub fn cycle_focus(current: Focus, forward: bool) -> Focus {
    let len = FOCUS_ORDER.len();
    let idx = FOCUS_ORDER.iter().position(|f| *f == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    FOCUS_ORDER[next]
}

pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}
