use crate::{
    api::{AttendanceRequest, CreatePersonRequest, PersonKind, PersonRecord},
    state::collection::Searchable,
    utils::format::{initials_avatar_url, is_valid_email},
};

pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// Uploaded picture when set, else a generated initials avatar.
pub fn person_avatar(person: &PersonRecord) -> String {
    person
        .profile_pic
        .clone()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| initials_avatar_url(&person.full_name()))
}

impl Searchable for PersonRecord {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.email.clone().unwrap_or_default(),
            self.card_number.clone().unwrap_or_default(),
        ]
    }

    fn category(&self) -> Option<String> {
        self.login_role.clone()
    }
}

pub fn delete_prompt(kind: PersonKind) -> &'static str {
    match kind {
        PersonKind::Hr => "Are you sure you want to delete this HR?",
        PersonKind::Employee => "Are you sure you want to delete this employee?",
    }
}

pub fn delete_failure(kind: PersonKind) -> &'static str {
    match kind {
        PersonKind::Hr => "Failed to delete HR.",
        PersonKind::Employee => "Failed to delete employee.",
    }
}

pub fn add_success_fallback(kind: PersonKind) -> String {
    format!("{} added successfully.", kind.label())
}

/// Blank is "not given"; anything else must be a decimal number.
pub fn parse_salary(raw: &str) -> Result<Option<f64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Some)
        .ok_or_else(|| "Salary must be a number.".to_string())
}

pub fn parse_count(raw: &str, label: &str) -> Result<i64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    match raw.parse::<i64>() {
        Ok(value) if value >= 0 => Ok(value),
        _ => Err(format!("{} must be a non-negative whole number.", label)),
    }
}

/// `YYYY-MM` with a month between 01 and 12.
pub fn is_valid_month(raw: &str) -> bool {
    chrono::NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d").is_ok()
        && raw.trim().len() == 7
}

fn blank_to_none(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonField {
    FirstName,
    LastName,
    Email,
    Mobile,
    CardNumber,
    JobRole,
    Domain,
    Gender,
    JoiningDate,
    Salary,
    BankName,
    BankAccountNumber,
    IfscCode,
    PfNumber,
    EpsNumber,
    Password,
    PanNumber,
    UanNumber,
    EsiNumber,
}

/// Wizard step one, in the order Enter walks through them.
pub const STEP_ONE_FIELDS: [PersonField; 10] = [
    PersonField::FirstName,
    PersonField::Email,
    PersonField::CardNumber,
    PersonField::Domain,
    PersonField::Salary,
    PersonField::LastName,
    PersonField::Mobile,
    PersonField::JobRole,
    PersonField::Gender,
    PersonField::JoiningDate,
];

pub const STEP_TWO_FIELDS: [PersonField; 9] = [
    PersonField::BankName,
    PersonField::BankAccountNumber,
    PersonField::IfscCode,
    PersonField::PfNumber,
    PersonField::EpsNumber,
    PersonField::Password,
    PersonField::PanNumber,
    PersonField::UanNumber,
    PersonField::EsiNumber,
];

/// Everything the edit view exposes; the credential stays write-only.
pub const EDITABLE_FIELDS: [PersonField; 18] = [
    PersonField::FirstName,
    PersonField::LastName,
    PersonField::Email,
    PersonField::Mobile,
    PersonField::CardNumber,
    PersonField::JobRole,
    PersonField::Domain,
    PersonField::Gender,
    PersonField::JoiningDate,
    PersonField::Salary,
    PersonField::BankName,
    PersonField::BankAccountNumber,
    PersonField::IfscCode,
    PersonField::PfNumber,
    PersonField::EpsNumber,
    PersonField::PanNumber,
    PersonField::UanNumber,
    PersonField::EsiNumber,
];

impl PersonField {
    pub fn label(self) -> &'static str {
        match self {
            PersonField::FirstName => "First Name *",
            PersonField::LastName => "Last Name",
            PersonField::Email => "Email *",
            PersonField::Mobile => "Mobile",
            PersonField::CardNumber => "Card Number",
            PersonField::JobRole => "Job Role",
            PersonField::Domain => "Domain",
            PersonField::Gender => "Gender",
            PersonField::JoiningDate => "Joining Date",
            PersonField::Salary => "Salary",
            PersonField::BankName => "Bank Name",
            PersonField::BankAccountNumber => "Bank Account Number",
            PersonField::IfscCode => "IFSC Code",
            PersonField::PfNumber => "PF Number",
            PersonField::EpsNumber => "EPS Number",
            PersonField::Password => "Password *",
            PersonField::PanNumber => "PAN Number",
            PersonField::UanNumber => "UAN Number",
            PersonField::EsiNumber => "ESI Number",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            PersonField::Email => "email",
            PersonField::Password => "password",
            PersonField::JoiningDate => "date",
            PersonField::Mobile => "tel",
            _ => "text",
        }
    }

    pub fn is_choice(self) -> bool {
        self == PersonField::Gender
    }
}

/// Text-level draft of a person record, shared by the add wizard and the edit view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub card_number: String,
    pub job_role: String,
    pub domain: String,
    pub gender: String,
    pub joining_date: String,
    pub salary: String,
    pub bank_name: String,
    pub bank_account_number: String,
    pub ifsc_code: String,
    pub pf_number: String,
    pub eps_number: String,
    pub password: String,
    pub pan_number: String,
    pub uan_number: String,
    pub esi_number: String,
}

impl PersonFields {
    pub fn get(&self, field: PersonField) -> &str {
        match field {
            PersonField::FirstName => &self.first_name,
            PersonField::LastName => &self.last_name,
            PersonField::Email => &self.email,
            PersonField::Mobile => &self.mobile,
            PersonField::CardNumber => &self.card_number,
            PersonField::JobRole => &self.job_role,
            PersonField::Domain => &self.domain,
            PersonField::Gender => &self.gender,
            PersonField::JoiningDate => &self.joining_date,
            PersonField::Salary => &self.salary,
            PersonField::BankName => &self.bank_name,
            PersonField::BankAccountNumber => &self.bank_account_number,
            PersonField::IfscCode => &self.ifsc_code,
            PersonField::PfNumber => &self.pf_number,
            PersonField::EpsNumber => &self.eps_number,
            PersonField::Password => &self.password,
            PersonField::PanNumber => &self.pan_number,
            PersonField::UanNumber => &self.uan_number,
            PersonField::EsiNumber => &self.esi_number,
        }
    }

    pub fn set(&mut self, field: PersonField, value: String) {
        let slot = match field {
            PersonField::FirstName => &mut self.first_name,
            PersonField::LastName => &mut self.last_name,
            PersonField::Email => &mut self.email,
            PersonField::Mobile => &mut self.mobile,
            PersonField::CardNumber => &mut self.card_number,
            PersonField::JobRole => &mut self.job_role,
            PersonField::Domain => &mut self.domain,
            PersonField::Gender => &mut self.gender,
            PersonField::JoiningDate => &mut self.joining_date,
            PersonField::Salary => &mut self.salary,
            PersonField::BankName => &mut self.bank_name,
            PersonField::BankAccountNumber => &mut self.bank_account_number,
            PersonField::IfscCode => &mut self.ifsc_code,
            PersonField::PfNumber => &mut self.pf_number,
            PersonField::EpsNumber => &mut self.eps_number,
            PersonField::Password => &mut self.password,
            PersonField::PanNumber => &mut self.pan_number,
            PersonField::UanNumber => &mut self.uan_number,
            PersonField::EsiNumber => &mut self.esi_number,
        };
        *slot = value;
    }

    pub fn from_record(record: &PersonRecord) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            first_name: record.given_name(),
            last_name: record.family_name(),
            email: text(&record.email),
            mobile: text(&record.mobile),
            card_number: text(&record.card_number),
            job_role: text(&record.job_role),
            domain: text(&record.domain),
            gender: text(&record.gender),
            joining_date: text(&record.joining_date),
            salary: record.salary.map(|s| s.to_string()).unwrap_or_default(),
            bank_name: text(&record.bank_name),
            bank_account_number: text(&record.bank_account_number),
            ifsc_code: text(&record.ifsc_code),
            pf_number: text(&record.pf_number),
            eps_number: text(&record.eps_number),
            password: String::new(),
            pan_number: text(&record.pan_number),
            uan_number: text(&record.uan_number),
            esi_number: text(&record.esi_number),
        }
    }

    /// First-name and email checks shared by every person form.
    fn validate_identity(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("First Name is required.".into());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required.".into());
        }
        if !is_valid_email(self.email.trim()) {
            return Err("Please enter a valid email.".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Details,
    Banking,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Details => 1,
            WizardStep::Banking => 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddPersonFormState {
    pub step: WizardStep,
    pub fields: PersonFields,
}

impl AddPersonFormState {
    pub fn validate_step_one(&self) -> Result<(), String> {
        self.fields.validate_identity()?;
        parse_salary(&self.fields.salary).map(|_| ())
    }

    /// Advances to banking details only when step one is valid.
    pub fn next(&mut self) -> Result<(), String> {
        self.validate_step_one()?;
        self.step = WizardStep::Banking;
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = WizardStep::Details;
    }

    pub fn validate_all(&self) -> Result<(), String> {
        let fields = &self.fields;
        if fields.first_name.trim().is_empty()
            || fields.email.trim().is_empty()
            || fields.password.is_empty()
        {
            return Err("Please fill required fields: First Name, Email, Password.".into());
        }
        if !is_valid_email(fields.email.trim()) {
            return Err("Please enter a valid email.".into());
        }
        parse_salary(&fields.salary).map(|_| ())
    }

    pub fn to_request(&self) -> Result<CreatePersonRequest, String> {
        self.validate_all()?;
        let f = &self.fields;
        Ok(CreatePersonRequest {
            first_name: f.first_name.trim().to_string(),
            last_name: f.last_name.trim().to_string(),
            email: f.email.trim().to_string(),
            mobile: f.mobile.trim().to_string(),
            card_number: f.card_number.trim().to_string(),
            job_role: f.job_role.trim().to_string(),
            domain: f.domain.trim().to_string(),
            gender: f.gender.clone(),
            joining_date: blank_to_none(&f.joining_date),
            salary: parse_salary(&f.salary)?,
            days_present: 0,
            paid_leaves: 0,
            password: f.password.clone(),
            bank_account_number: f.bank_account_number.trim().to_string(),
            bank_name: f.bank_name.trim().to_string(),
            ifsc_code: f.ifsc_code.trim().to_string(),
            pf_number: f.pf_number.trim().to_string(),
            pan_number: f.pan_number.trim().to_string(),
            uan_number: f.uan_number.trim().to_string(),
            eps_number: f.eps_number.trim().to_string(),
            esi_number: f.esi_number.trim().to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditPersonFormState {
    pub original: PersonRecord,
    pub fields: PersonFields,
}

impl EditPersonFormState {
    pub fn new(record: &PersonRecord) -> Self {
        Self {
            original: record.clone(),
            fields: PersonFields::from_record(record),
        }
    }

    /// The original record with every editable field replaced by the draft.
    pub fn to_record(&self) -> Result<PersonRecord, String> {
        self.fields.validate_identity()?;
        let f = &self.fields;
        let mut record = self.original.clone();
        record.first_name = blank_to_none(&f.first_name);
        record.last_name = blank_to_none(&f.last_name);
        record.name = None;
        record.email = blank_to_none(&f.email);
        record.mobile = blank_to_none(&f.mobile);
        record.card_number = blank_to_none(&f.card_number);
        record.job_role = blank_to_none(&f.job_role);
        record.domain = blank_to_none(&f.domain);
        record.gender = blank_to_none(&f.gender);
        record.joining_date = blank_to_none(&f.joining_date);
        record.salary = parse_salary(&f.salary)?;
        record.bank_name = blank_to_none(&f.bank_name);
        record.bank_account_number = blank_to_none(&f.bank_account_number);
        record.ifsc_code = blank_to_none(&f.ifsc_code);
        record.pf_number = blank_to_none(&f.pf_number);
        record.eps_number = blank_to_none(&f.eps_number);
        record.pan_number = blank_to_none(&f.pan_number);
        record.uan_number = blank_to_none(&f.uan_number);
        record.esi_number = blank_to_none(&f.esi_number);
        Ok(record)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFormState {
    pub days_present: String,
    pub paid_leaves: String,
}

impl AttendanceFormState {
    pub fn to_request(&self) -> Result<AttendanceRequest, String> {
        Ok(AttendanceRequest {
            days_present: parse_count(&self.days_present, "Days present")?,
            paid_leaves: parse_count(&self.paid_leaves, "Paid leaves")?,
        })
    }
}

pub fn validate_payslip_month(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("Please select a month.".into());
    }
    if !is_valid_month(raw) {
        return Err("Month must be in YYYY-MM format.".into());
    }
    Ok(raw.trim().to_string())
}
