use crate::{
    api::{ApiError, PersonRecord},
    utils::format::display_or_dash,
};

pub const LOAD_FAILED: &str = "Failed to load profile from server.";
pub const UPLOAD_FAILED: &str = "Failed to upload image";

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    Loading,
    Ready(PersonRecord),
    Failed(String),
}

/// Missing-token and empty-profile messages pass through; anything else is a load failure.
pub fn profile_error(err: &ApiError) -> String {
    match err.code.as_str() {
        "NO_SESSION" | "DECODE_ERROR" => err.error.clone(),
        _ => LOAD_FAILED.to_string(),
    }
}

pub fn profile_rows(person: &PersonRecord) -> Vec<(&'static str, String)> {
    let text = |v: &Option<String>| display_or_dash(v.as_deref());
    let count = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_else(|| display_or_dash(None));
    vec![
        ("Email", text(&person.email)),
        ("Mobile", text(&person.mobile)),
        ("Card Number", text(&person.card_number)),
        ("Gender", text(&person.gender)),
        ("Joining Date", text(&person.joining_date)),
        ("Job Role", text(&person.job_role.clone().or_else(|| person.domain.clone()))),
        ("Days Present", count(person.days_present)),
        ("Paid Leaves", count(person.paid_leaves)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::person;

    fn value_of(rows: &[(&'static str, String)], label: &str) -> String {
        rows.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    }

    #[test]
    fn error_copy() {
        assert_eq!(profile_error(&ApiError::no_session()), "No auth token found.");
        assert_eq!(
            profile_error(&ApiError::decode("Profile not available.")),
            "Profile not available."
        );
        assert_eq!(profile_error(&ApiError::from_status(500, "boom")), LOAD_FAILED);
    }

    #[test]
    fn job_role_falls_back_to_domain() {
        let mut record = person("1", "Asha", "HR");
        assert_eq!(value_of(&profile_rows(&record), "Job Role"), "Engineer");
        record.job_role = None;
        assert_eq!(value_of(&profile_rows(&record), "Job Role"), "Platform");
        record.domain = None;
        assert_eq!(value_of(&profile_rows(&record), "Job Role"), "—");
        assert_eq!(value_of(&profile_rows(&record), "Days Present"), "21");
        assert_eq!(value_of(&profile_rows(&PersonRecord::default()), "Paid Leaves"), "—");
    }
}
