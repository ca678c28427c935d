//! Small DOM helpers

/// Ask the user for an explicit yes/no via the native confirm dialog.
/// Answers `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
