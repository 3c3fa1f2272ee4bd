use crate::api::{ApiClient, ApiError, BinaryDocument};
use leptos::use_context;
use std::rc::Rc;

#[derive(Clone)]
pub struct ReportsRepository {
    client: Rc<ApiClient>,
}

impl ReportsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_client(Rc::new(api))
    }

    pub async fn generate_admin_report(&self) -> Result<String, ApiError> {
        self.client.generate_admin_report().await
    }

    pub async fn generate_hr_report(&self) -> Result<bool, ApiError> {
        self.client.generate_hr_daily_report().await
    }

    pub async fn daily_report_path(&self) -> Result<Option<String>, ApiError> {
        self.client.daily_report_path().await
    }

    pub async fn daily_report_pdf(&self) -> Result<Option<BinaryDocument>, ApiError> {
        self.client.fetch_daily_report_pdf().await
    }
}
