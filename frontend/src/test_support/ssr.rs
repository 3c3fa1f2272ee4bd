use leptos::*;

use crate::state::session::{provide_session, Session, SessionStore};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders with an in-memory session, signed in when `session` is given.
pub fn render_with_session<F, N>(session: Option<Session>, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        let store = SessionStore::in_memory();
        if let Some(session) = session.as_ref() {
            store.save(session).expect("memory store accepts sessions");
        }
        provide_session(store);
        view()
    })
}
