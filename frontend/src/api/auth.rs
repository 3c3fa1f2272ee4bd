use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse},
};

impl ApiClient {
    /// `POST /auth/login`. Storing the session is left to the caller.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response = self
            .send(self.http_client().post(url).json(request))
            .await?;
        Self::expect_json::<LoginResponse>(response, "Login failed. Check credentials and backend.")
            .await?
            .ok_or_else(|| ApiError::decode("Login response was empty."))
    }
}
