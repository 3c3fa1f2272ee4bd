pub mod collection;
pub mod delete_flow;
pub mod message;
pub mod session;
