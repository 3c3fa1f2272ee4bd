pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

/// Browser entry point: logging, panic hook, config warm-up, then the router.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(LOG_LEVEL) {
        web_sys::console::warn_1(&format!("console logger unavailable: {}", err).into());
    }
    log::info!("starting {}", components::layout::APP_NAME);

    leptos::spawn_local(config::init());
    router::mount_app();
}
