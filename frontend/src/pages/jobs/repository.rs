use crate::api::{ApiClient, ApiError, CreateJobRequest, JobPosting};
use std::rc::Rc;

#[derive(Clone)]
pub struct JobsRepository {
    client: Rc<ApiClient>,
}

impl Default for JobsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl JobsRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_jobs(&self) -> Result<Vec<JobPosting>, ApiError> {
        self.client.list_jobs().await
    }

    pub async fn post_job(&self, request: CreateJobRequest) -> Result<Option<String>, ApiError> {
        self.client.create_job(&request).await
    }

    pub async fn remove_job(&self, job_id: String) -> Result<(), ApiError> {
        self.client.delete_job(&job_id).await
    }
}
