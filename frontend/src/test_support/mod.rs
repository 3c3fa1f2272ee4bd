#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{CreatePersonRequest, JobPosting, Payslip, PersonRecord, TextOrList};
    use crate::state::session::{Role, Session};

    pub fn person(id: &str, first: &str, role: &str) -> PersonRecord {
        PersonRecord {
            id: Some(id.into()),
            first_name: Some(first.into()),
            last_name: Some("Example".into()),
            email: Some(format!("{}@example.com", first.to_lowercase())),
            mobile: Some("9876543210".into()),
            card_number: Some(format!("C-{}", id)),
            job_role: Some("Engineer".into()),
            domain: Some("Platform".into()),
            gender: Some("Female".into()),
            joining_date: Some("2024-04-01".into()),
            salary: Some(55000.0),
            days_present: Some(21),
            paid_leaves: Some(1),
            bank_account_number: Some("1234567890".into()),
            ifsc_code: Some("SBIN0000123".into()),
            bank_name: Some("State Bank".into()),
            pan_number: Some("ABCDE1234F".into()),
            login_role: Some(role.into()),
            ..Default::default()
        }
    }

    pub fn session(role: Role) -> Session {
        Session {
            role,
            token: "t-1".into(),
            profile: person("7", "Meera", role.label()),
        }
    }

    pub fn create_person_request() -> CreatePersonRequest {
        CreatePersonRequest {
            first_name: "Ravi".into(),
            last_name: "Kumar".into(),
            email: "ravi@example.com".into(),
            mobile: String::new(),
            card_number: String::new(),
            job_role: String::new(),
            domain: String::new(),
            gender: "Male".into(),
            joining_date: None,
            salary: None,
            days_present: 0,
            paid_leaves: 0,
            password: "Secret#1".into(),
            bank_account_number: String::new(),
            bank_name: String::new(),
            ifsc_code: String::new(),
            pf_number: String::new(),
            pan_number: String::new(),
            uan_number: String::new(),
            eps_number: String::new(),
            esi_number: String::new(),
        }
    }

    pub fn job(id: &str, title: &str) -> JobPosting {
        JobPosting {
            id: Some(id.into()),
            job_title: Some(title.into()),
            domain: Some("Engineering".into()),
            experience_level: Some("2-4 years".into()),
            job_type: Some("Full-time".into()),
            description: Some("Build services.".into()),
            requirements: Some(TextOrList::Text("Rust; SQL".into())),
            responsibilities: None,
            salary_range: Some("10-15 LPA".into()),
            posted_date: Some("2025-01-02".into()),
            closing_date: None,
            is_active: Some(true),
        }
    }

    pub fn payslip(id: &str) -> Payslip {
        Payslip {
            id: Some(id.into()),
            file_name: Some(format!("payslip-{}.pdf", id)),
            employee_email: Some("ravi@example.com".into()),
            payslip_month: Some("2025-01".into()),
            generated_date: Some("2025-02-01T09:30:00".into()),
        }
    }
}
