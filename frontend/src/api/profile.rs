use reqwest::multipart::{Form, Part};
use serde_json::Value;

use super::{
    client::{encode_segment, ApiClient, UPLOAD_TIMEOUT},
    types::{ApiError, FileUpload, PersonRecord},
};
use crate::state::session::Role;

/// Picture URL from an upload answer: a bare string, `photoUrl` / `profilePictureUrl`,
/// or either of those wrapped in `data`.
pub fn extract_photo_url(body: &Value) -> Option<String> {
    match body {
        Value::String(url) if !url.trim().is_empty() => Some(url.trim().to_string()),
        Value::Object(map) => ["photoUrl", "profilePictureUrl", "profilePic"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .filter(|url| !url.trim().is_empty())
            .map(str::to_string)
            .or_else(|| map.get("data").and_then(extract_photo_url)),
        _ => None,
    }
}

impl ApiClient {
    /// `GET /{role}/profile`; needs a stored token.
    pub async fn fetch_profile(&self, role: Role) -> Result<PersonRecord, ApiError> {
        let token = self.require_token()?;
        let url = self.endpoint(&role.profile_path()).await;
        let response = self
            .send(self.http_client().get(url).bearer_auth(token))
            .await?;
        Self::expect_json::<PersonRecord>(response, "Failed to load profile from server.")
            .await?
            .ok_or_else(|| ApiError::decode("Profile not available."))
    }

    /// `PUT /{role}/profile`. Falls back to the submitted record when the answer has none.
    pub async fn update_profile(
        &self,
        role: Role,
        record: &PersonRecord,
    ) -> Result<PersonRecord, ApiError> {
        let token = self.require_token()?;
        let url = self.endpoint(&role.profile_path()).await;
        let response = self
            .send(self.http_client().put(url).bearer_auth(token).json(record))
            .await?;
        let updated = Self::expect_json::<PersonRecord>(response, "Failed to update profile.")
            .await?;
        Ok(updated.unwrap_or_else(|| record.clone()))
    }

    /// `PUT /employee/{id}/profile-picture` as multipart part `file`.
    pub async fn upload_profile_picture(
        &self,
        person_id: &str,
        file: FileUpload,
    ) -> Result<String, ApiError> {
        let token = self.require_token()?;
        let url = self
            .endpoint(&format!(
                "/employee/{}/profile-picture",
                encode_segment(person_id)
            ))
            .await;
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime_type)
            .map_err(|e| ApiError::validation(format!("Unsupported file type: {}", e)))?;
        let form = Form::new().part("file", part);
        let response = self
            .send_bounded(
                self.http_client()
                    .put(url)
                    .bearer_auth(token)
                    .multipart(form),
                UPLOAD_TIMEOUT,
            )
            .await?;
        let (status, body) = Self::read_body(response).await?;
        if !status.is_success() {
            return Err(super::client::error_from_body(
                status,
                &body,
                "Failed to upload image",
            ));
        }
        serde_json::from_slice::<Value>(&body)
            .ok()
            .as_ref()
            .and_then(extract_photo_url)
            .ok_or_else(|| ApiError::decode("Upload succeeded but no picture URL was returned."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn photo_url_is_found_in_known_shapes() {
        assert_eq!(
            extract_photo_url(&json!("https://cdn/x.png")).as_deref(),
            Some("https://cdn/x.png")
        );
        assert_eq!(
            extract_photo_url(&json!({"photoUrl": "/a.png"})).as_deref(),
            Some("/a.png")
        );
        assert_eq!(
            extract_photo_url(&json!({"data": {"profilePictureUrl": "/b.png"}})).as_deref(),
            Some("/b.png")
        );
        assert_eq!(
            extract_photo_url(&json!({"data": "/c.png", "message": "ok"})).as_deref(),
            Some("/c.png")
        );
        assert!(extract_photo_url(&json!({"message": "ok"})).is_none());
        assert!(extract_photo_url(&json!("")).is_none());
    }
}
