use crate::api::{ApiClient, ApiError, FileUpload, PersonRecord};
use crate::state::session::Role;
use leptos::use_context;
use std::rc::Rc;

#[derive(Clone)]
pub struct ProfileRepository {
    client: Rc<ApiClient>,
}

impl ProfileRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_client(Rc::new(api))
    }

    pub async fn fetch_profile(&self, role: Role) -> Result<PersonRecord, ApiError> {
        self.client.fetch_profile(role).await
    }

    pub async fn upload_picture(&self, person_id: String, file: FileUpload) -> Result<String, ApiError> {
        self.client.upload_profile_picture(&person_id, file).await
    }
}
