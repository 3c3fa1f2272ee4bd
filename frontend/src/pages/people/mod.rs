pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use components::{add_form::AddPersonForm, list::PeopleList};
pub use view_model::use_people_list;
