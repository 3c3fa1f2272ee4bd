use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{
    api::types::{decode_payload, ApiError, ServerMessage},
    config,
    state::session::SessionStore,
};

/// Bounded wait for file-bearing submissions.
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionStore,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: SessionStore::browser(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
            session: SessionStore::in_memory(),
        }
    }

    pub fn with_session(mut self, session: SessionStore) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    /// Attaches the bearer token when one is stored.
    pub(crate) fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) fn require_token(&self) -> Result<String, ApiError> {
        self.session.token().ok_or_else(ApiError::no_session)
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("session rejected by the server; clearing stored credentials");
            self.session.clear();
        }
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            log::error!("request failed: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })?;
        self.handle_unauthorized_status(response.status());
        Ok(response)
    }

    /// Like [`ApiClient::send`], but gives up with `TIMEOUT` after `limit`.
    pub(crate) async fn send_bounded(
        &self,
        builder: RequestBuilder,
        limit: Duration,
    ) -> Result<Response, ApiError> {
        let timed_out = || {
            log::error!("request timed out after {}s", limit.as_secs());
            ApiError::timeout(format!(
                "The server did not respond within {} seconds.",
                limit.as_secs()
            ))
        };

        #[cfg(target_arch = "wasm32")]
        let response = {
            use futures::future::{select, Either};
            let request = Box::pin(builder.send());
            let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(
                limit.as_millis().min(u32::MAX as u128) as u32,
            ));
            match select(request, timer).await {
                Either::Left((result, _)) => result.map_err(|e| {
                    log::error!("request failed: {}", e);
                    ApiError::request_failed(format!("Request failed: {}", e))
                })?,
                Either::Right(_) => return Err(timed_out()),
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        let response = builder.timeout(limit).send().await.map_err(|e| {
            if e.is_timeout() {
                timed_out()
            } else {
                log::error!("request failed: {}", e);
                ApiError::request_failed(format!("Request failed: {}", e))
            }
        })?;

        self.handle_unauthorized_status(response.status());
        Ok(response)
    }

    pub(crate) async fn read_body(response: Response) -> Result<(StatusCode, Vec<u8>), ApiError> {
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            log::error!("failed to read response body: {}", e);
            ApiError::request_failed(format!("Failed to read response: {}", e))
        })?;
        Ok((status, bytes.to_vec()))
    }

    /// Success body decoded through the envelope; failures carry the server message.
    pub(crate) async fn expect_json<T: DeserializeOwned>(
        response: Response,
        fallback: &str,
    ) -> Result<Option<T>, ApiError> {
        let (status, body) = Self::read_body(response).await?;
        if !status.is_success() {
            return Err(error_from_body(status, &body, fallback));
        }
        decode_payload(&body)
    }

    /// Success check for calls whose body only carries an optional `message`.
    pub(crate) async fn expect_success(
        response: Response,
        fallback: &str,
    ) -> Result<Option<String>, ApiError> {
        let (status, body) = Self::read_body(response).await?;
        if !status.is_success() {
            return Err(error_from_body(status, &body, fallback));
        }
        Ok(crate::api::types::envelope_message(&body))
    }
}

pub fn error_from_body(status: StatusCode, body: &[u8], fallback: &str) -> ApiError {
    let message = serde_json::from_slice::<ServerMessage>(body)
        .ok()
        .and_then(|m| m.text())
        .unwrap_or_else(|| {
            if fallback.is_empty() {
                format!("Request failed with status {}", status.as_u16())
            } else {
                fallback.to_string()
            }
        });
    log::warn!("server answered {}: {}", status.as_u16(), message);
    ApiError::from_status(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_are_percent_encoded() {
        assert_eq!(encode_segment("42"), "42");
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_segment("x-y_z.~"), "x-y_z.~");
    }

    #[test]
    fn error_body_message_wins_over_fallback() {
        let err = error_from_body(
            StatusCode::BAD_REQUEST,
            br#"{"message":"Email already exists"}"#,
            "Failed",
        );
        assert_eq!(err.error, "Email already exists");
        assert_eq!(err.code, "HTTP_400");

        let err = error_from_body(StatusCode::NOT_FOUND, b"not json", "Job not found");
        assert_eq!(err.error, "Job not found");
        assert!(err.is_not_found());

        let err = error_from_body(StatusCode::INTERNAL_SERVER_ERROR, b"", "");
        assert_eq!(err.error, "Request failed with status 500");
    }

    #[test]
    fn base_url_is_trimmed() {
        let client = ApiClient::new_with_base_url("http://localhost:9000/api/");
        assert_eq!(client.base_url.as_deref(), Some("http://localhost:9000/api"));
    }
}
