use reqwest::StatusCode;
use serde_json::Value;

use super::{
    client::{error_from_body, ApiClient},
    types::{envelope_message, ApiError, BinaryDocument},
};

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl ApiClient {
    /// Admin "Generate": asks the server to build today's report.
    pub async fn generate_admin_report(&self) -> Result<String, ApiError> {
        let url = self.endpoint("/admin/reports/daily").await;
        let response = self.send(self.authorize(self.http_client().get(url))).await?;
        let (status, body) = Self::read_body(response).await?;
        if !status.is_success() {
            return Err(error_from_body(status, &body, "Failed to generate report"));
        }
        Ok(envelope_message(&body).unwrap_or_else(|| "Report generation success!".to_string()))
    }

    /// HR "Generate". `Ok(false)` when the server answered without report data.
    pub async fn generate_hr_daily_report(&self) -> Result<bool, ApiError> {
        let url = self.endpoint("/hr/dailyReport/generate").await;
        let response = self
            .send(self.authorize(self.http_client().post(url)))
            .await?;
        let (status, body) = Self::read_body(response).await?;
        if !status.is_success() {
            return Err(error_from_body(status, &body, "Failed to generate."));
        }
        let value: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        Ok(value.get("data").is_some_and(is_truthy))
    }

    /// Server-relative path of today's report, if one exists.
    pub async fn daily_report_path(&self) -> Result<Option<String>, ApiError> {
        let url = self.endpoint("/hr/dailyReport/url").await;
        let response = self.send(self.authorize(self.http_client().get(url))).await?;
        let path = Self::expect_json::<String>(response, "Failed to load daily report.").await?;
        Ok(path.filter(|p| !p.trim().is_empty()))
    }

    /// Binary daily report. `None` when the server has nothing for today.
    pub async fn fetch_daily_report_pdf(&self) -> Result<Option<BinaryDocument>, ApiError> {
        let url = self.endpoint("/admin/reports/daily").await;
        let response = self
            .send(
                self.authorize(self.http_client().get(url))
                    .header(reqwest::header::ACCEPT, "application/pdf"),
            )
            .await?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/pdf")
            .to_string();
        let (status, bytes) = Self::read_body(response).await?;
        if status == StatusCode::NO_CONTENT || status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(error_from_body(status, &bytes, "Failed to load report"));
        }
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(BinaryDocument {
            bytes,
            content_type,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_follows_loose_rules() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("reports/2025-01-02.pdf")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!({})));
    }
}
