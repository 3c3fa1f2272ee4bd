use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, AttendanceRequest, CreatePersonRequest, PersonRecord},
};

/// Which kind of person record a mutation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonKind {
    Hr,
    Employee,
}

impl PersonKind {
    pub fn label(&self) -> &'static str {
        match self {
            PersonKind::Hr => "HR",
            PersonKind::Employee => "Employee",
        }
    }

    pub fn create_path(&self) -> &'static str {
        match self {
            PersonKind::Hr => "/admin/addhr",
            PersonKind::Employee => "/hr/add",
        }
    }

    pub fn delete_path(&self, id: &str) -> String {
        match self {
            PersonKind::Hr => format!("/admin/deleteHr/{}", encode_segment(id)),
            PersonKind::Employee => format!("/hr/delete/{}", encode_segment(id)),
        }
    }

    pub fn update_path(&self, id: &str) -> String {
        match self {
            PersonKind::Hr => format!("/admin/updateHr/{}", encode_segment(id)),
            PersonKind::Employee => format!("/hr/update/{}", encode_segment(id)),
        }
    }

    pub fn attendance_path(&self, id: &str) -> String {
        match self {
            PersonKind::Hr => format!("/admin/attendance/{}", encode_segment(id)),
            PersonKind::Employee => format!("/hr/attendance/{}", encode_segment(id)),
        }
    }
}

/// Which collection a people list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeopleSource {
    AdminHrList,
    AdminEmployeeList,
    HrEmployeeList,
}

impl PeopleSource {
    pub fn list_path(&self) -> &'static str {
        match self {
            PeopleSource::AdminHrList => "/admin/getHrList",
            PeopleSource::AdminEmployeeList => "/admin/getEmpList",
            PeopleSource::HrEmployeeList => "/hr/getEmpList",
        }
    }

    pub fn kind(&self) -> PersonKind {
        match self {
            PeopleSource::AdminHrList => PersonKind::Hr,
            PeopleSource::AdminEmployeeList | PeopleSource::HrEmployeeList => PersonKind::Employee,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PeopleSource::AdminHrList => "HR List",
            PeopleSource::AdminEmployeeList | PeopleSource::HrEmployeeList => "Employee List",
        }
    }

    pub fn category_options(&self) -> &'static [&'static str] {
        match self {
            PeopleSource::AdminHrList => &[],
            PeopleSource::AdminEmployeeList => &["ALL", "Admin", "HR", "Employee"],
            PeopleSource::HrEmployeeList => &["ALL", "HR", "Employee"],
        }
    }
}

impl ApiClient {
    pub async fn list_people(&self, source: PeopleSource) -> Result<Vec<PersonRecord>, ApiError> {
        let url = self.endpoint(source.list_path()).await;
        let response = self.send(self.authorize(self.http_client().get(url))).await?;
        let fallback = format!("Failed to load {}.", source.title().to_lowercase());
        Ok(Self::expect_json::<Vec<PersonRecord>>(response, &fallback)
            .await?
            .unwrap_or_default())
    }

    /// Returns the server's confirmation message, if it sent one.
    pub async fn create_person(
        &self,
        kind: PersonKind,
        request: &CreatePersonRequest,
    ) -> Result<Option<String>, ApiError> {
        let url = self.endpoint(kind.create_path()).await;
        let response = self
            .send(self.authorize(self.http_client().post(url)).json(request))
            .await?;
        let fallback = format!("Failed to add {}. Please check details.", kind.label());
        Self::expect_success(response, &fallback).await
    }

    pub async fn delete_person(&self, kind: PersonKind, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&kind.delete_path(id)).await;
        let response = self
            .send(self.authorize(self.http_client().delete(url)))
            .await?;
        let fallback = format!("Failed to delete {}.", kind.label());
        Self::expect_success(response, &fallback).await.map(|_| ())
    }

    pub async fn update_person(
        &self,
        kind: PersonKind,
        id: &str,
        record: &PersonRecord,
    ) -> Result<PersonRecord, ApiError> {
        let url = self.endpoint(&kind.update_path(id)).await;
        let response = self
            .send(self.authorize(self.http_client().put(url)).json(record))
            .await?;
        let fallback = format!("Failed to update {}.", kind.label());
        let updated = Self::expect_json::<PersonRecord>(response, &fallback).await?;
        Ok(updated.unwrap_or_else(|| record.clone()))
    }

    pub async fn record_attendance(
        &self,
        kind: PersonKind,
        id: &str,
        request: &AttendanceRequest,
    ) -> Result<Option<String>, ApiError> {
        let url = self.endpoint(&kind.attendance_path(id)).await;
        let response = self
            .send(self.authorize(self.http_client().post(url)).json(request))
            .await?;
        Self::expect_success(response, "Failed to add attendance.").await
    }
}
