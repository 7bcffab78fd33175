//! User Notification

use leptos::prelude::window;

/// Blocking browser alert
pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        log::error!("[Notify] alert() failed: {:?}", e);
    }
}
