use crate::api::{ApiClient, ApiError, BinaryDocument, Payslip};
use leptos::use_context;
use std::rc::Rc;

#[derive(Clone)]
pub struct PayslipRepository {
    client: Rc<ApiClient>,
}

impl Default for PayslipRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PayslipRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_client(Rc::new(api))
    }

    pub async fn fetch_payslips(&self, employee_id: String) -> Result<Vec<Payslip>, ApiError> {
        self.client.list_payslips(&employee_id).await
    }

    pub async fn fetch_document(&self, payslip_id: String) -> Result<BinaryDocument, ApiError> {
        self.client.download_payslip(&payslip_id).await
    }

    pub async fn remove_payslip(&self, payslip_id: String) -> Result<(), ApiError> {
        self.client.delete_payslip(&payslip_id).await
    }
}
