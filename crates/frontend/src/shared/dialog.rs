//! Blocking browser dialogs.
//!
//! Store errors and mutation outcomes are surfaced through `window.alert`;
//! destructive actions go through `window.confirm`.

/// Show a blocking acknowledgment dialog.
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Ask the user to confirm an action. Returns `false` without a window.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|win| win.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
