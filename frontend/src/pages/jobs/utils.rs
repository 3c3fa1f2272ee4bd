use crate::{
    api::{CreateJobRequest, JobPosting},
    state::collection::Searchable,
};
use chrono::NaiveDate;

pub const DELETE_FAILED: &str = "Failed to delete job.";

impl Searchable for JobPosting {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.job_title.clone().unwrap_or_default(),
            self.domain.clone().unwrap_or_default(),
        ]
    }
}

fn text_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
}

pub fn job_title(job: &JobPosting) -> String {
    text_or(&job.job_title, "Untitled Role").to_string()
}

pub fn job_experience(job: &JobPosting) -> String {
    text_or(&job.experience_level, "Not specified").to_string()
}

pub fn job_domain(job: &JobPosting) -> String {
    text_or(&job.domain, "General").to_string()
}

pub fn job_type(job: &JobPosting) -> String {
    text_or(&job.job_type, "N/A").to_string()
}

pub fn salary_range(job: &JobPosting) -> String {
    text_or(&job.salary_range, "Not specified").to_string()
}

pub fn date_or_na(value: &Option<String>) -> String {
    text_or(value, "N/A").to_string()
}

pub fn delete_prompt(job: &JobPosting) -> String {
    format!("Delete job \"{}\" (ID: {})?", job_title(job), job.key())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddJobFormState {
    pub job_title: String,
    pub domain: String,
    pub experience_level: String,
    pub job_type: String,
    pub description: String,
    pub requirements: String,
    pub responsibilities: String,
    pub salary_range: String,
    pub closing_date: String,
    pub is_active: bool,
}

impl Default for AddJobFormState {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            domain: String::new(),
            experience_level: String::new(),
            job_type: "Full-time".to_string(),
            description: String::new(),
            requirements: String::new(),
            responsibilities: String::new(),
            salary_range: String::new(),
            closing_date: String::new(),
            is_active: true,
        }
    }
}

impl AddJobFormState {
    pub fn validate(&self) -> Result<(), String> {
        if self.job_title.trim().is_empty() {
            return Err("Job title is required.".into());
        }
        let closing = self.closing_date.trim();
        if !closing.is_empty() && NaiveDate::parse_from_str(closing, "%Y-%m-%d").is_err() {
            return Err("Closing date must be in YYYY-MM-DD format.".into());
        }
        Ok(())
    }

    pub fn to_request(&self) -> Result<CreateJobRequest, String> {
        self.validate()?;
        let closing = self.closing_date.trim();
        Ok(CreateJobRequest {
            job_title: self.job_title.trim().to_string(),
            domain: self.domain.trim().to_string(),
            experience_level: self.experience_level.trim().to_string(),
            job_type: self.job_type.trim().to_string(),
            description: self.description.trim().to_string(),
            requirements: self.requirements.trim().to_string(),
            responsibilities: self.responsibilities.trim().to_string(),
            salary_range: self.salary_range.trim().to_string(),
            closing_date: (!closing.is_empty()).then(|| closing.to_string()),
            is_active: self.is_active,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
