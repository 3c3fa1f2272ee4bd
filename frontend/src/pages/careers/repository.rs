use crate::api::{ApiClient, ApiError, ApplicationRequest, FileUpload, JobPosting};
use leptos::use_context;
use std::rc::Rc;

#[derive(Clone)]
pub struct CareersRepository {
    client: Rc<ApiClient>,
}

impl Default for CareersRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CareersRepository {
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

    pub async fn fetch_open_jobs(&self) -> Result<Vec<JobPosting>, ApiError> {
        self.client.list_open_jobs().await
    }

    pub async fn fetch_job(&self, job_id: String) -> Result<JobPosting, ApiError> {
        self.client.fetch_job(&job_id).await
    }

    pub async fn submit_application(
        &self,
        request: ApplicationRequest,
        resume: Option<FileUpload>,
    ) -> Result<(), ApiError> {
        self.client.apply_for_job(&request, resume).await
    }
}
