use crate::{
    api::{ApiError, LoginRequest, LoginResponse},
    state::session::{Role, Session},
};

pub const LOGIN_FAILED: &str = "Login failed. Check credentials and backend.";

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Please enter username and password.".into());
    }
    Ok(())
}

pub fn build_request(email: &str, password: &str, role: Role) -> Result<LoginRequest, String> {
    validate_credentials(email, password)?;
    Ok(LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
        login_role: role.as_str().to_string(),
    })
}

/// The server's `loginRole` wins when it parses; otherwise the role picked on the form.
pub fn session_from_response(response: LoginResponse, selected: Role) -> Result<Session, ApiError> {
    let token = response
        .token
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| ApiError::decode(LOGIN_FAILED))?;
    let role = response
        .login_role
        .as_deref()
        .and_then(Role::parse)
        .unwrap_or(selected);
    Ok(Session {
        role,
        token,
        profile: response.profile,
    })
}
