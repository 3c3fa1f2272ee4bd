pub mod components;
pub mod repository;
pub mod utils;

pub use components::list::{PayslipList, PayslipListModal};
