use super::storage;

/// Blocking browser alert, used for failures of mutating actions.
pub fn alert(message: &str) {
    match storage::window() {
        Ok(win) => {
            let _ = win.alert_with_message(message);
        }
        Err(_) => log::warn!("alert: {}", message),
    }
}
