pub mod add_form;
pub mod card;
pub mod detail;
pub mod list;
