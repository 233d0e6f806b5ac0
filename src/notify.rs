//! Blocking user notifications behind a small port so the component
//! logic does not depend on the browser's modal alert directly.

pub trait Notifier {
    /// Surfaces a blocking message to the user. Returns once dismissed.
    fn notify(&self, message: &str);
}

/// Production notifier backed by `window.alert`.
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        } else {
            log::warn!("no window available for alert: {message}");
        }
    }
}
