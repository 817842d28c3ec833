//! Blocking browser dialogs

/// Show a blocking alert; used for failed form validation
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("alert failed: {}", message);
        }
    }
}
