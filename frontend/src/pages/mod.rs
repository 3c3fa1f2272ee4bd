pub mod careers;
pub mod dashboards;
pub mod home;
pub mod jobs;
pub mod login;
pub mod payslips;
pub mod people;
pub mod profile;
pub mod reports;
