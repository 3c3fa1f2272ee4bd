use super::storage;

/// Full-page navigation, same as following a link.
pub fn redirect(path: &str) {
    match storage::window() {
        Ok(win) => {
            if let Err(err) = win.location().set_href(path) {
                log::warn!("navigation to {} failed: {:?}", path, err);
            }
        }
        Err(err) => log::debug!("skipping navigation to {}: {}", path, err),
    }
}

pub fn go_back() {
    let Ok(win) = storage::window() else {
        return;
    };
    if let Err(err) = win.history().and_then(|history| history.back()) {
        log::warn!("history back failed: {:?}", err);
    }
}
