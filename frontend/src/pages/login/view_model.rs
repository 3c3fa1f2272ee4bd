use super::{
    repository::LoginRepository,
    utils::{build_request, session_from_response, LOGIN_FAILED},
};
use crate::{
    api::{ApiError, LoginRequest},
    state::session::{use_session, Role, Session, SessionContext},
    utils::navigation::redirect,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub role: RwSignal<Role>,
    pub show_password: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<(LoginRequest, Role), Result<Session, ApiError>>,
}

impl LoginViewModel {
    /// Validates and dispatches. Returns whether a request went out.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        let role = self.role.get_untracked();
        let request = self
            .email
            .with_untracked(|email| self.password.with_untracked(|pw| build_request(email, pw, role)));
        match request {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch((request, role));
                true
            }
            Err(message) => {
                self.error.set(Some(message));
                false
            }
        }
    }
}

/// Stores the session and moves to the role's dashboard, or reports the failure.
pub fn finish_login(
    session: SessionContext,
    error: RwSignal<Option<String>>,
    result: Result<Session, ApiError>,
) -> Option<Role> {
    let outcome = result.and_then(|s| {
        let role = s.role;
        session
            .sign_in(s)
            .map(|_| role)
            .map_err(ApiError::unknown)
    });
    match outcome {
        Ok(role) => {
            error.set(None);
            Some(role)
        }
        Err(err) => {
            log::warn!("login failed: {}", err);
            let message = if err.error.trim().is_empty() { LOGIN_FAILED.to_string() } else { err.error };
            error.set(Some(message));
            None
        }
    }
}

pub fn use_login_view_model(initial_role: Role) -> LoginViewModel {
    let session = use_session();
    let repository = LoginRepository::from_context();
    let error = create_rw_signal(None::<String>);

    let login_action = create_action(move |(request, role): &(LoginRequest, Role)| {
        let repo = repository.clone();
        let request = request.clone();
        let role = *role;
        async move {
            let response = repo.login(request).await?;
            session_from_response(response, role)
        }
    });

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            if let Some(role) = finish_login(session, error, result) {
                redirect(role.dashboard_path());
            }
        }
    });

    LoginViewModel {
        email: create_rw_signal(String::new()),
        password: create_rw_signal(String::new()),
        role: create_rw_signal(initial_role),
        show_password: create_rw_signal(false),
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionStore;
    use crate::test_support::{helpers::session, ssr::with_runtime};

    #[test]
    fn empty_form_is_not_dispatched() {
        with_runtime(|| {
            let vm = use_login_view_model(Role::Employee);
            assert!(!vm.submit());
            assert_eq!(
                vm.error.get_untracked().as_deref(),
                Some("Please enter username and password.")
            );
            assert_eq!(vm.login_action.version().get_untracked(), 0);
        });
    }

    #[test]
    fn successful_login_signs_in() {
        with_runtime(|| {
            let store = SessionStore::in_memory();
            let ctx = SessionContext::new(store.clone());
            let error = create_rw_signal(Some("old".to_string()));

            let role = finish_login(ctx, error, Ok(session(Role::Hr)));
            assert_eq!(role, Some(Role::Hr));
            assert_eq!(error.get_untracked(), None);
            assert_eq!(store.load().map(|s| s.role), Some(Role::Hr));
            assert_eq!(ctx.role(), Some(Role::Hr));
        });
    }

    #[test]
    fn failed_login_shows_server_message() {
        with_runtime(|| {
            let store = SessionStore::in_memory();
            let ctx = SessionContext::new(store.clone());
            let error = create_rw_signal(None);

            let role = finish_login(ctx, error, Err(ApiError::from_status(401, "Invalid credentials")));
            assert_eq!(role, None);
            assert_eq!(error.get_untracked().as_deref(), Some("Invalid credentials"));
            assert!(store.load().is_none());
        });
    }
}
