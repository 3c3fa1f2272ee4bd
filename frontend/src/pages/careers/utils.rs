use crate::{
    api::{ApiError, ApplicationRequest, JobPosting},
    utils::format::is_valid_email,
};

pub const RESUME_ACCEPT: &str = ".pdf,.doc,.docx";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFormState {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl ApplicationFormState {
    pub fn to_request(&self, job_id: Option<String>) -> Result<ApplicationRequest, String> {
        if self.full_name.trim().is_empty() {
            return Err("Full name is required.".into());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required.".into());
        }
        if !is_valid_email(self.email.trim()) {
            return Err("Please enter a valid email.".into());
        }
        Ok(ApplicationRequest {
            job_id,
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicationStage {
    #[default]
    Form,
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobDetailsState {
    Loading,
    NotFound(String),
    Ready(JobPosting),
}

impl JobDetailsState {
    /// A missing id never reaches the network; 404s keep the server text, other failures get a generic one.
    pub fn from_fetch(result: Option<Result<JobPosting, ApiError>>) -> Self {
        match result {
            None => JobDetailsState::Loading,
            Some(Ok(job)) => JobDetailsState::Ready(job),
            Some(Err(err)) if err.is_not_found() || err.code == "VALIDATION_ERROR" => {
                JobDetailsState::NotFound(err.error)
            }
            Some(Err(err)) => {
                log::error!("job fetch failed: {} ({})", err.error, err.code);
                JobDetailsState::NotFound("Could not fetch job details.".into())
            }
        }
    }
}

pub fn missing_job_id() -> ApiError {
    ApiError::validation("No job id provided.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::job;

    #[test]
    fn application_requires_name_and_valid_email() {
        let mut form = ApplicationFormState::default();
        assert_eq!(form.to_request(None), Err("Full name is required.".into()));
        form.full_name = "Kiran".into();
        assert_eq!(form.to_request(None), Err("Email is required.".into()));
        form.email = "kiran@".into();
        assert_eq!(form.to_request(None), Err("Please enter a valid email.".into()));
        form.email = " kiran@example.com ".into();
        let request = form.to_request(Some("7".into())).unwrap();
        assert_eq!(request.email, "kiran@example.com");
        assert_eq!(request.job_id.as_deref(), Some("7"));
        assert_eq!(request.phone_number, "");
    }

    #[test]
    fn details_state_from_fetch() {
        assert_eq!(JobDetailsState::from_fetch(None), JobDetailsState::Loading);
        assert_eq!(
            JobDetailsState::from_fetch(Some(Ok(job("1", "Rust Engineer")))),
            JobDetailsState::Ready(job("1", "Rust Engineer"))
        );
        assert_eq!(
            JobDetailsState::from_fetch(Some(Err(ApiError::from_status(404, "No job data available.")))),
            JobDetailsState::NotFound("No job data available.".into())
        );
        assert_eq!(
            JobDetailsState::from_fetch(Some(Err(missing_job_id()))),
            JobDetailsState::NotFound("No job id provided.".into())
        );
        assert_eq!(
            JobDetailsState::from_fetch(Some(Err(ApiError::request_failed("offline")))),
            JobDetailsState::NotFound("Could not fetch job details.".into())
        );
    }
}
