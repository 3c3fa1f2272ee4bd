pub mod admin;
pub mod employee;
pub mod hr;
pub mod utils;
pub mod view_model;

pub use admin::AdminDashboard;
pub use employee::EmployeeDashboard;
pub use hr::HrDashboard;
