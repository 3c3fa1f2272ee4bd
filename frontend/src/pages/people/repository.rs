use crate::api::{
    ApiClient, ApiError, AttendanceRequest, CreatePersonRequest, PeopleSource, PersonKind,
    PersonRecord,
};
use crate::state::session::Role;
use std::rc::Rc;

#[derive(Clone)]
pub struct PeopleRepository {
    client: Rc<ApiClient>,
}

impl Default for PeopleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PeopleRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_people(&self, source: PeopleSource) -> Result<Vec<PersonRecord>, ApiError> {
        self.client.list_people(source).await
    }

    pub async fn add_person(
        &self,
        kind: PersonKind,
        request: CreatePersonRequest,
    ) -> Result<Option<String>, ApiError> {
        self.client.create_person(kind, &request).await
    }

    pub async fn remove_person(&self, kind: PersonKind, id: String) -> Result<(), ApiError> {
        self.client.delete_person(kind, &id).await
    }

    pub async fn save_person(
        &self,
        kind: PersonKind,
        record: PersonRecord,
    ) -> Result<PersonRecord, ApiError> {
        let id = record
            .id
            .clone()
            .ok_or_else(|| ApiError::validation("Record has no id."))?;
        self.client.update_person(kind, &id, &record).await
    }

    pub async fn save_own_profile(
        &self,
        role: Role,
        record: PersonRecord,
    ) -> Result<PersonRecord, ApiError> {
        self.client.update_profile(role, &record).await
    }

    pub async fn add_attendance(
        &self,
        kind: PersonKind,
        id: String,
        request: AttendanceRequest,
    ) -> Result<Option<String>, ApiError> {
        self.client.record_attendance(kind, &id, &request).await
    }

    pub async fn generate_payslip(
        &self,
        employee_id: String,
        month: String,
    ) -> Result<Option<String>, ApiError> {
        self.client.generate_payslip(&employee_id, &month).await
    }
}
