mod auth;
mod careers;
pub mod client;
mod jobs;
mod payslips;
mod people;
mod profile;
mod reports;
pub mod types;

pub use client::*;
pub use people::{PeopleSource, PersonKind};
pub use types::*;
