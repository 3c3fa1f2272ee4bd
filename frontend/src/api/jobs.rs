use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, CreateJobRequest, JobPosting},
};

impl ApiClient {
    pub async fn list_jobs(&self) -> Result<Vec<JobPosting>, ApiError> {
        let url = self.endpoint("/hr/jobs").await;
        let response = self.send(self.authorize(self.http_client().get(url))).await?;
        Ok(Self::expect_json::<Vec<JobPosting>>(response, "Failed to load jobs.")
            .await?
            .unwrap_or_default())
    }

    pub async fn create_job(&self, request: &CreateJobRequest) -> Result<Option<String>, ApiError> {
        let url = self.endpoint("/hr/job/add").await;
        let response = self
            .send(self.authorize(self.http_client().post(url)).json(request))
            .await?;
        Self::expect_success(response, "Failed to add job.").await
    }

    pub async fn delete_job(&self, job_id: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/hr/job/delete/{}", encode_segment(job_id)))
            .await;
        let response = self
            .send(self.authorize(self.http_client().delete(url)))
            .await?;
        Self::expect_success(response, "Failed to delete job.")
            .await
            .map(|_| ())
    }
}
