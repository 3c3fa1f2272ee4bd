use crate::{
    api::Payslip,
    state::collection::Searchable,
    utils::format::{display_or_dash, format_timestamp},
};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this payslip?";
pub const DELETE_FAILED: &str = "Failed to delete payslip.";
pub const VIEW_FAILED: &str = "Failed to view payslip.";
pub const DOWNLOAD_FAILED: &str = "Failed to download payslip.";

impl Searchable for Payslip {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.file_name.clone().unwrap_or_default(),
            self.payslip_month.clone().unwrap_or_default(),
        ]
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub fn payslip_id(payslip: &Payslip) -> String {
    non_blank(&payslip.id).unwrap_or_default().to_string()
}

pub fn payslip_title(payslip: &Payslip) -> String {
    non_blank(&payslip.file_name)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Payslip #{}", payslip_id(payslip)))
}

pub fn download_name(payslip: &Payslip) -> String {
    non_blank(&payslip.file_name)
        .map(str::to_string)
        .unwrap_or_else(|| format!("payslip_{}.pdf", payslip_id(payslip)))
}

pub fn display_email(payslip: &Payslip) -> String {
    display_or_dash(payslip.employee_email.as_deref())
}

pub fn display_month(payslip: &Payslip) -> String {
    non_blank(&payslip.payslip_month)
        .unwrap_or("N/A")
        .to_string()
}

pub fn display_generated(payslip: &Payslip) -> String {
    non_blank(&payslip.generated_date)
        .map(format_timestamp)
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::payslip;

    #[test]
    fn fallbacks_for_missing_fields() {
        let bare = Payslip {
            id: Some("9".into()),
            ..Default::default()
        };
        assert_eq!(payslip_title(&bare), "Payslip #9");
        assert_eq!(download_name(&bare), "payslip_9.pdf");
        assert_eq!(display_email(&bare), "—");
        assert_eq!(display_month(&bare), "N/A");
        assert_eq!(display_generated(&bare), "N/A");
    }

    #[test]
    fn present_fields_are_formatted() {
        let slip = payslip("3");
        assert_eq!(payslip_title(&slip), "payslip-3.pdf");
        assert_eq!(download_name(&slip), "payslip-3.pdf");
        assert_eq!(display_month(&slip), "2025-01");
        assert_eq!(display_generated(&slip), "01 Feb 2025, 09:30 AM");
    }
}
