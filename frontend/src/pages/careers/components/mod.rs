pub mod application_form;
pub mod job_board;
pub mod success;
