use reqwest::multipart::{Form, Part};
use serde_json::Value;

use super::{
    client::{encode_segment, error_from_body, ApiClient, UPLOAD_TIMEOUT},
    types::{ApiError, ApplicationRequest, FileUpload, JobPosting},
};

/// An application counts as created on HTTP 201, a body `code` of 201, or `status: "CREATED"`.
pub fn is_application_created(status: u16, body: &Value) -> bool {
    if status == 201 {
        return true;
    }
    let code_created = match body.get("code") {
        Some(Value::Number(n)) => n.as_u64() == Some(201),
        Some(Value::String(s)) => s.trim() == "201",
        _ => false,
    };
    let status_created = body
        .get("status")
        .and_then(Value::as_str)
        .is_some_and(|s| s.eq_ignore_ascii_case("CREATED"));
    code_created || status_created
}

fn application_error(body: &Value) -> String {
    ["message", "error", "msg"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or("Failed to apply.")
        .to_string()
}

impl ApiClient {
    /// Public job board.
    pub async fn list_open_jobs(&self) -> Result<Vec<JobPosting>, ApiError> {
        let url = self.endpoint("/career/jobs").await;
        let response = self.send(self.http_client().get(url)).await?;
        Ok(Self::expect_json::<Vec<JobPosting>>(response, "Could not fetch jobs.")
            .await?
            .unwrap_or_default())
    }

    pub async fn fetch_job(&self, job_id: &str) -> Result<JobPosting, ApiError> {
        let url = self
            .endpoint(&format!("/career/job/{}", encode_segment(job_id)))
            .await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::expect_json::<JobPosting>(response, "Could not fetch job details.")
            .await?
            .ok_or_else(|| ApiError::from_status(404, "No job data available."))
    }

    /// Multipart `POST /career/applyJob`: JSON part `data` plus the `resume` file.
    pub async fn apply_for_job(
        &self,
        application: &ApplicationRequest,
        resume: Option<FileUpload>,
    ) -> Result<(), ApiError> {
        let url = self.endpoint("/career/applyJob").await;
        let data = serde_json::to_string(application)
            .map_err(|e| ApiError::validation(format!("Invalid application: {}", e)))?;
        let data_part = Part::text(data)
            .mime_str("application/json")
            .map_err(|e| ApiError::unknown(e.to_string()))?;
        let mut form = Form::new().part("data", data_part);
        if let Some(file) = resume {
            let resume_part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.mime_type)
                .map_err(|e| ApiError::validation(format!("Unsupported file type: {}", e)))?;
            form = form.part("resume", resume_part);
        }
        let response = self
            .send_bounded(self.http_client().post(url).multipart(form), UPLOAD_TIMEOUT)
            .await?;
        let (status, bytes) = Self::read_body(response).await?;
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        if is_application_created(status.as_u16(), &body) {
            log::info!("application submitted");
            return Ok(());
        }
        if status.is_success() {
            return Err(ApiError::unknown(application_error(&body)));
        }
        Err(error_from_body(status, &bytes, "Failed to apply."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn created_detection_accepts_each_signal() {
        assert!(is_application_created(201, &Value::Null));
        assert!(is_application_created(200, &json!({"code": 201})));
        assert!(is_application_created(200, &json!({"code": "201"})));
        assert!(is_application_created(200, &json!({"status": "CREATED"})));
        assert!(!is_application_created(200, &json!({"status": "OK"})));
        assert!(!is_application_created(400, &json!({"code": 400})));
    }

    #[test]
    fn application_error_prefers_server_text() {
        assert_eq!(application_error(&json!({"error": "Already applied"})), "Already applied");
        assert_eq!(application_error(&json!({"msg": "Closed"})), "Closed");
        assert_eq!(application_error(&Value::Null), "Failed to apply.");
    }
}
