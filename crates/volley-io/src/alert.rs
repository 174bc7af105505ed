//! Blocking modal-style warnings via `window.alert()`.
//!
//! The one user-visible error surface this app has: the
//! missing-required-field warning raised by the send trigger.

/// Show a blocking warning dialog.
///
/// Silently does nothing when no browser window is present (e.g. during
/// tests), matching how the analytics hook degrades.
pub fn warn(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.alert_with_message(message);
}
