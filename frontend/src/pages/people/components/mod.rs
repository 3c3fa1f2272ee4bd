pub mod add_form;
pub mod attendance_modal;
pub mod card;
pub mod detail_modal;
pub mod edit_form;
pub mod field;
pub mod generate_payslip_modal;
pub mod list;
