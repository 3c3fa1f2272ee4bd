use leptos::*;
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "TIMEOUT")
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "DECODE_ERROR")
    }

    pub fn no_session() -> Self {
        Self::with_code("No auth token found.", "NO_SESSION")
    }

    pub fn from_status(status: u16, msg: impl Into<String>) -> Self {
        let code = match status {
            401 => "UNAUTHORIZED".to_string(),
            404 => "NOT_FOUND".to_string(),
            other => format!("HTTP_{}", other),
        };
        Self {
            error: msg.into(),
            code,
            details: None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code == "NOT_FOUND"
    }
}

/// Error body returned by the backend on non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl ServerMessage {
    pub fn text(&self) -> Option<String> {
        [&self.message, &self.error, &self.msg]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Keys a status-only envelope may carry without a payload.
const ENVELOPE_KEYS: [&str; 7] = [
    "message",
    "msg",
    "status",
    "statusCode",
    "success",
    "code",
    "error",
];

fn is_bare_envelope(map: &serde_json::Map<String, Value>) -> bool {
    !map.is_empty() && map.keys().all(|key| ENVELOPE_KEYS.contains(&key.as_str()))
}

/// Decodes a success body that is either `{ "data": T, ... }` or a bare `T`.
///
/// An empty body, `null`, `{ "data": null }` or an envelope with only status keys
/// (`{ "message": "..." }`) yield `Ok(None)`. Anything else that does not deserialize
/// into `T` is a `DECODE_ERROR`.
pub fn decode_payload<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::decode(format!("Response is not valid JSON: {}", e)))?;
    let inner = match value {
        Value::Null => return Ok(None),
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        Value::Object(map) if is_bare_envelope(&map) => return Ok(None),
        other => other,
    };
    if inner.is_null() {
        return Ok(None);
    }
    serde_json::from_value(inner)
        .map(Some)
        .map_err(|e| ApiError::decode(format!("Unexpected response shape: {}", e)))
}

/// Reads the top-level `message` of an envelope, if any.
pub fn envelope_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ServerMessage>(body)
        .ok()
        .and_then(|m| m.message)
        .filter(|m| !m.trim().is_empty())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Unified HR / Employee profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    #[serde(default, alias = "_id", deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mobile: Option<String>,
    #[serde(
        default,
        alias = "hrCardNumber",
        alias = "empCardNumber",
        deserialize_with = "lenient_string"
    )]
    pub card_number: Option<String>,
    #[serde(default)]
    pub job_role: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub joining_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub salary: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub days_present: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub paid_leaves: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bank_account_number: Option<String>,
    #[serde(default)]
    pub ifsc_code: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pf_number: Option<String>,
    #[serde(default)]
    pub pan_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uan_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub eps_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub esi_number: Option<String>,
    #[serde(default, alias = "profilePictureUrl", alias = "photoUrl")]
    pub profile_pic: Option<String>,
    #[serde(default, alias = "role", alias = "Role")]
    pub login_role: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl PersonRecord {
    pub fn given_name(&self) -> String {
        non_blank(&self.first_name)
            .map(str::to_string)
            .or_else(|| {
                non_blank(&self.name)
                    .and_then(|n| n.split_whitespace().next())
                    .map(str::to_string)
            })
            .unwrap_or_default()
    }

    pub fn family_name(&self) -> String {
        if non_blank(&self.first_name).is_some() {
            return non_blank(&self.last_name).unwrap_or_default().to_string();
        }
        non_blank(&self.last_name)
            .map(str::to_string)
            .or_else(|| {
                non_blank(&self.name).map(|n| n.split_whitespace().skip(1).collect::<Vec<_>>().join(" "))
            })
            .unwrap_or_default()
    }

    pub fn full_name(&self) -> String {
        let first = self.given_name();
        let last = self.family_name();
        format!("{} {}", first, last).trim().to_string()
    }

    /// Stable key for list rendering; falls back to the email when the server omits an id.
    pub fn key(&self) -> String {
        non_blank(&self.id)
            .or_else(|| non_blank(&self.email))
            .unwrap_or_default()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub card_number: String,
    pub job_role: String,
    pub domain: String,
    pub gender: String,
    pub joining_date: Option<String>,
    pub salary: Option<f64>,
    pub days_present: i64,
    pub paid_leaves: i64,
    pub password: String,
    pub bank_account_number: String,
    pub bank_name: String,
    pub ifsc_code: String,
    pub pf_number: String,
    pub pan_number: String,
    pub uan_number: String,
    pub eps_number: String,
    pub esi_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRequest {
    pub days_present: i64,
    pub paid_leaves: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub login_role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub login_role: Option<String>,
    #[serde(flatten)]
    pub profile: PersonRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    #[serde(default, alias = "_id", deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub employee_email: Option<String>,
    #[serde(default)]
    pub payslip_month: Option<String>,
    #[serde(default)]
    pub generated_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePayslipRequest {
    pub payslip_month: String,
}

/// Requirements / responsibilities arrive either as free text or as a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    List(Vec<Value>),
    Text(String),
    Other(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default, alias = "_id", deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, alias = "title")]
    pub job_title: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default, alias = "experience")]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<TextOrList>,
    #[serde(default)]
    pub responsibilities: Option<TextOrList>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub posted_date: Option<String>,
    #[serde(default)]
    pub closing_date: Option<String>,
    #[serde(default, alias = "active", deserialize_with = "lenient_bool")]
    pub is_active: Option<bool>,
}

impl JobPosting {
    pub fn key(&self) -> String {
        self.id.clone().unwrap_or_else(|| "unknown".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub job_title: String,
    pub domain: String,
    pub experience_level: String,
    pub job_type: String,
    pub description: String,
    pub requirements: String,
    pub responsibilities: String,
    pub salary_range: String,
    pub closing_date: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub job_id: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
}

/// File picked by the user, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Binary document returned by a download endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryDocument {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_codes() {
        assert_eq!(ApiError::validation("bad").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::request_failed("net").code, "REQUEST_FAILED");
        assert_eq!(ApiError::timeout("slow").code, "TIMEOUT");
        assert_eq!(ApiError::decode("shape").code, "DECODE_ERROR");
        assert_eq!(ApiError::from_status(401, "x").code, "UNAUTHORIZED");
        assert!(ApiError::from_status(404, "x").is_not_found());
        assert_eq!(ApiError::from_status(500, "x").code, "HTTP_500");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn server_message_prefers_message_then_error_then_msg() {
        let body: ServerMessage =
            serde_json::from_value(json!({"error": "E", "msg": "M"})).unwrap();
        assert_eq!(body.text().as_deref(), Some("E"));
        let body: ServerMessage =
            serde_json::from_value(json!({"message": " ", "msg": "M"})).unwrap();
        assert_eq!(body.text().as_deref(), Some("M"));
        assert!(ServerMessage::default().text().is_none());
    }

    #[test]
    fn decode_payload_unwraps_envelope_and_bare_bodies() {
        let enveloped: Option<Vec<Payslip>> =
            decode_payload(br#"{"data":[{"id":7,"fileName":"a.pdf"}],"message":"ok"}"#).unwrap();
        let enveloped = enveloped.unwrap();
        assert_eq!(enveloped[0].id.as_deref(), Some("7"));

        let bare: Option<Vec<Payslip>> = decode_payload(br#"[{"id":"p1"}]"#).unwrap();
        assert_eq!(bare.unwrap()[0].id.as_deref(), Some("p1"));
    }

    #[test]
    fn decode_payload_treats_missing_data_as_none() {
        assert_eq!(decode_payload::<Vec<Payslip>>(b"").unwrap(), None);
        assert_eq!(decode_payload::<Vec<Payslip>>(b"  null ").unwrap(), None);
        assert_eq!(
            decode_payload::<Vec<Payslip>>(br#"{"data":null}"#).unwrap(),
            None
        );
    }

    #[test]
    fn decode_payload_treats_status_only_envelope_as_none() {
        assert_eq!(
            decode_payload::<PersonRecord>(br#"{"message":"Profile updated","success":true}"#)
                .unwrap(),
            None
        );
        let record: Option<PersonRecord> =
            decode_payload(br#"{"id":3,"firstName":"Ravi","message":"ok"}"#).unwrap();
        assert_eq!(record.and_then(|r| r.first_name).as_deref(), Some("Ravi"));
    }

    #[test]
    fn decode_payload_fails_loudly_on_shape_mismatch() {
        let err = decode_payload::<Vec<Payslip>>(br#"{"data":{"unexpected":true}}"#).unwrap_err();
        assert_eq!(err.code, "DECODE_ERROR");
        let err = decode_payload::<Vec<Payslip>>(b"<html>").unwrap_err();
        assert_eq!(err.code, "DECODE_ERROR");
    }

    #[test]
    fn person_record_accepts_hr_dto_aliases() {
        let record: PersonRecord = serde_json::from_value(json!({
            "id": 12,
            "name": "Asha Rao Menon",
            "email": "asha@example.com",
            "hrCardNumber": 4411
        }))
        .unwrap();
        assert_eq!(record.id.as_deref(), Some("12"));
        assert_eq!(record.card_number.as_deref(), Some("4411"));
        assert_eq!(record.given_name(), "Asha");
        assert_eq!(record.family_name(), "Rao Menon");
        assert_eq!(record.full_name(), "Asha Rao Menon");
    }

    #[test]
    fn person_record_prefers_explicit_names_and_reads_role() {
        let record: PersonRecord = serde_json::from_value(json!({
            "_id": "e-1",
            "firstName": "Ravi",
            "lastName": "Kumar",
            "Role": "Employee",
            "salary": "45000.50",
            "daysPresent": 20
        }))
        .unwrap();
        assert_eq!(record.key(), "e-1");
        assert_eq!(record.full_name(), "Ravi Kumar");
        assert_eq!(record.login_role.as_deref(), Some("Employee"));
        assert_eq!(record.salary, Some(45000.5));
        assert_eq!(record.days_present, Some(20));
    }

    #[test]
    fn login_response_flattens_profile() {
        let response: LoginResponse = serde_json::from_value(json!({
            "token": "t-1",
            "loginRole": "hr",
            "id": 3,
            "firstName": "Meera",
            "email": "meera@example.com"
        }))
        .unwrap();
        assert_eq!(response.token.as_deref(), Some("t-1"));
        assert_eq!(response.login_role.as_deref(), Some("hr"));
        assert_eq!(response.profile.given_name(), "Meera");
    }

    #[test]
    fn job_posting_accepts_text_or_list_fields() {
        let job: JobPosting = serde_json::from_value(json!({
            "id": 5,
            "title": "Backend Engineer",
            "requirements": ["Rust", "SQL"],
            "responsibilities": "Build APIs; Review code",
            "isActive": "true"
        }))
        .unwrap();
        assert_eq!(job.job_title.as_deref(), Some("Backend Engineer"));
        assert!(matches!(job.requirements, Some(TextOrList::List(_))));
        assert!(matches!(job.responsibilities, Some(TextOrList::Text(_))));
        assert_eq!(job.is_active, Some(true));
    }

    #[test]
    fn create_person_request_serializes_camel_case() {
        let request = CreatePersonRequest {
            first_name: "A".into(),
            last_name: String::new(),
            email: "a@b.co".into(),
            mobile: String::new(),
            card_number: String::new(),
            job_role: String::new(),
            domain: String::new(),
            gender: String::new(),
            joining_date: None,
            salary: Some(1000.0),
            days_present: 0,
            paid_leaves: 0,
            password: "pw".into(),
            bank_account_number: String::new(),
            bank_name: String::new(),
            ifsc_code: String::new(),
            pf_number: String::new(),
            pan_number: String::new(),
            uan_number: String::new(),
            eps_number: String::new(),
            esi_number: String::new(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["firstName"], "A");
        assert_eq!(value["joiningDate"], Value::Null);
        assert_eq!(value["ifscCode"], "");
        assert_eq!(value["salary"], 1000.0);
    }
}
