use crate::{
    api::{ApiError, BinaryDocument},
    config::join_asset_url,
    utils::download::ObjectUrl,
};
use std::rc::Rc;

pub const NO_DAILY_REPORT: &str = "No daily report available for today.";
pub const NO_REPORT: &str = "No report available.";
pub const REPORT_FILE_NAME: &str = "DailyReport.pdf";

#[derive(Debug, Clone, PartialEq)]
pub enum ReportSource {
    /// In-memory PDF; the URL is revoked once the last handle drops.
    Object(Rc<ObjectUrl>),
    Remote(String),
}

impl ReportSource {
    pub fn href(&self) -> String {
        match self {
            ReportSource::Object(url) => url.as_str().to_string(),
            ReportSource::Remote(url) => url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportState {
    Loading,
    Ready(ReportSource),
    /// Nothing generated yet. Not an error.
    Missing,
    Failed(String),
}

impl ReportState {
    pub fn object_url(&self) -> Option<Rc<ObjectUrl>> {
        match self {
            ReportState::Ready(ReportSource::Object(url)) => Some(url.clone()),
            _ => None,
        }
    }
}

pub fn settle_path(result: Result<Option<String>, ApiError>, asset_base: &str) -> ReportState {
    match result {
        Ok(Some(path)) => ReportState::Ready(ReportSource::Remote(join_asset_url(asset_base, &path))),
        Ok(None) => ReportState::Missing,
        Err(err) => {
            log::error!("daily report lookup failed: {}", err);
            ReportState::Failed(err.error)
        }
    }
}

pub fn settle_document<F>(result: Result<Option<BinaryDocument>, ApiError>, make_url: F) -> ReportState
where
    F: FnOnce(&BinaryDocument) -> Result<ObjectUrl, String>,
{
    match result {
        Ok(None) => ReportState::Missing,
        Ok(Some(document)) => match make_url(&document) {
            Ok(url) => ReportState::Ready(ReportSource::Object(Rc::new(url))),
            Err(message) => ReportState::Failed(message),
        },
        Err(err) => {
            log::error!("report download failed: {}", err);
            ReportState::Failed(err.error)
        }
    }
}

pub fn admin_generate_message(result: Result<String, ApiError>) -> String {
    match result {
        Ok(message) => message,
        Err(err) => {
            log::error!("report generation failed: {}", err);
            "Failed to generate report".to_string()
        }
    }
}

pub fn hr_generate_message(result: Result<bool, ApiError>) -> String {
    match result {
        Ok(true) => "Daily report generated!".to_string(),
        Ok(false) => "Failed to generate.".to_string(),
        Err(err) => format!("Error generating report: {}", err.error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> BinaryDocument {
        BinaryDocument {
            bytes: b"%PDF-1.4".to_vec(),
            content_type: "application/pdf".into(),
        }
    }

    #[test]
    fn empty_report_is_missing_not_failed() {
        let state = settle_document(Ok(None), |_| panic!("no url for an absent report"));
        assert_eq!(state, ReportState::Missing);
        assert_eq!(settle_path(Ok(None), "https://portal.example.com"), ReportState::Missing);
    }

    #[test]
    fn document_errors_surface() {
        let state = settle_document(Ok(Some(pdf())), |doc| {
            assert_eq!(doc.content_type, "application/pdf");
            Err("Failed to create blob".into())
        });
        assert_eq!(state, ReportState::Failed("Failed to create blob".into()));

        let state = settle_document(Err(ApiError::from_status(500, "Failed to load report")), |_| {
            panic!("no url on error")
        });
        assert_eq!(state, ReportState::Failed("Failed to load report".into()));
    }

    #[test]
    fn daily_path_is_absolute() {
        let state = settle_path(Ok(Some("/files/daily.pdf".into())), "https://portal.example.com");
        assert_eq!(
            state,
            ReportState::Ready(ReportSource::Remote("https://portal.example.com/files/daily.pdf".into()))
        );
        assert_eq!(state.object_url(), None);
    }

    #[test]
    fn generate_messages() {
        assert_eq!(admin_generate_message(Ok("Report queued".into())), "Report queued");
        assert_eq!(
            admin_generate_message(Err(ApiError::request_failed("offline"))),
            "Failed to generate report"
        );
        assert_eq!(hr_generate_message(Ok(true)), "Daily report generated!");
        assert_eq!(hr_generate_message(Ok(false)), "Failed to generate.");
        assert_eq!(
            hr_generate_message(Err(ApiError::from_status(500, "disk full"))),
            "Error generating report: disk full"
        );
    }
}
