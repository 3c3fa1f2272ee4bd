use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::api::TextOrList;

pub const MASK_CHAR: char = '*';
pub const EMPTY_VALUE: &str = "—";

/// Replaces all but the last `visible` characters with [`MASK_CHAR`]. Empty input renders as
/// [`EMPTY_VALUE`] like every other missing field.
pub fn mask_sensitive(value: &str, visible: usize, reveal: bool) -> String {
    if value.is_empty() {
        return EMPTY_VALUE.to_string();
    }
    let len = value.chars().count();
    if reveal || len <= visible {
        return value.to_string();
    }
    let tail: String = value.chars().skip(len - visible).collect();
    let mut masked: String = std::iter::repeat(MASK_CHAR).take(len - visible).collect();
    masked.push_str(&tail);
    masked
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot with text on both sides
/// somewhere after it.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .any(|(idx, _)| idx > 0 && idx + 1 < domain.len())
}

pub fn display_or_dash(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(EMPTY_VALUE)
        .to_string()
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// `dd Mon yyyy, hh:mm AM`. Unparseable input is shown as received.
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|ts| ts.format("%d %b %Y, %I:%M %p").to_string())
        .unwrap_or_else(|| raw.to_string())
}

const LIST_SEPARATORS: [char; 5] = ['\n', ';', '•', '·', ','];

fn flatten_value(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push(s.trim().to_string()),
        Value::Array(items) => items.iter().for_each(|item| flatten_value(item, out)),
        Value::Object(map) => map.values().for_each(|item| flatten_value(item, out)),
        other => out.push(other.to_string()),
    }
}

/// Splits free text on line breaks, `;`, bullets and commas. Lists are kept as given.
pub fn normalize_list(value: Option<&TextOrList>) -> Vec<String> {
    let mut items = Vec::new();
    match value {
        None => {}
        Some(TextOrList::Text(text)) => {
            items.extend(text.split(LIST_SEPARATORS).map(|s| s.trim().to_string()));
        }
        Some(TextOrList::List(values)) => values.iter().for_each(|v| flatten_value(v, &mut items)),
        Some(TextOrList::Other(value)) => flatten_value(value, &mut items),
    }
    items.retain(|item| !item.is_empty());
    items
}

pub fn initials_avatar_url(name: &str) -> String {
    let name = if name.trim().is_empty() { "User" } else { name.trim() };
    let encoded =
        percent_encoding::utf8_percent_encode(name, percent_encoding::NON_ALPHANUMERIC).to_string();
    format!(
        "https://ui-avatars.com/api/?name={}&background=0D8ABC&color=fff",
        encoded
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn masks_all_but_trailing_characters() {
        assert_eq!(mask_sensitive("1234567890", 4, false), "******7890");
        assert_eq!(mask_sensitive("ABCDE1234F", 3, false), "*******34F");
        assert_eq!(mask_sensitive("1234567890", 4, true), "1234567890");
        assert_eq!(mask_sensitive("ABCDE1234F", 3, true), "ABCDE1234F");
    }

    #[test]
    fn masking_short_or_empty_values() {
        assert_eq!(mask_sensitive("", 4, false), EMPTY_VALUE);
        assert_eq!(mask_sensitive("123", 4, false), "123");
        assert_eq!(mask_sensitive("1234", 4, false), "1234");
    }

    #[test]
    fn email_validation_matches_simple_pattern() {
        assert!(is_valid_email("asha@example.com"));
        assert!(is_valid_email("a.b@c.co.in"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("asha"));
        assert!(!is_valid_email("asha@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("asha@.com"));
        assert!(!is_valid_email("asha@example."));
        assert!(!is_valid_email("as ha@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn formats_timestamps_like_the_payslip_cards() {
        assert_eq!(format_timestamp("2025-01-02T10:15:00"), "02 Jan 2025, 10:15 AM");
        assert_eq!(format_timestamp("2025-03-09T18:05:30.123"), "09 Mar 2025, 06:05 PM");
        assert_eq!(format_timestamp("2025-03-09T18:05:30+05:30"), "09 Mar 2025, 06:05 PM");
        assert_eq!(format_timestamp("2025-03-09"), "09 Mar 2025, 12:00 AM");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn normalizes_text_and_list_fields() {
        let text = TextOrList::Text("Rust; SQL\n• Docker · Git,  ,AWS".into());
        assert_eq!(
            normalize_list(Some(&text)),
            vec!["Rust", "SQL", "Docker", "Git", "AWS"]
        );

        let list = TextOrList::List(vec![json!(" Rust "), json!(3), json!(null), json!("")]);
        assert_eq!(normalize_list(Some(&list)), vec!["Rust", "3"]);

        let nested = TextOrList::Other(json!({"a": ["x", {"b": "y"}]}));
        assert_eq!(normalize_list(Some(&nested)), vec!["x", "y"]);

        assert!(normalize_list(None).is_empty());
    }

    #[test]
    fn display_helpers_fall_back() {
        assert_eq!(display_or_dash(None), EMPTY_VALUE);
        assert_eq!(display_or_dash(Some("  ")), EMPTY_VALUE);
        assert_eq!(display_or_dash(Some("HR")), "HR");
        assert!(initials_avatar_url("Asha Rao").contains("name=Asha%20Rao"));
        assert!(initials_avatar_url("").contains("name=User"));
    }
}
