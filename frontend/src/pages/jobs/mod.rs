pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use components::{add_form::AddJobForm, detail::JobDetailsView, list::JobList};
pub use view_model::use_job_list;
