use super::{
    repository::ProfileRepository,
    utils::{profile_error, ProfileState, UPLOAD_FAILED},
};
use crate::{
    api::{ApiError, PersonRecord},
    state::session::{use_session, Role, SessionContext},
    utils::{dialog::alert, file::read_file},
};
use leptos::*;

/// Cached profile first; otherwise one authenticated fetch whose result is cached.
pub async fn load_profile(
    session: SessionContext,
    repo: ProfileRepository,
    role: Role,
) -> Result<PersonRecord, String> {
    if let Some(profile) = session.cached_profile(role) {
        return Ok(profile);
    }
    if session.token().is_none() {
        return Err(ApiError::no_session().error);
    }
    match repo.fetch_profile(role).await {
        Ok(profile) => {
            session.update_profile(role, profile.clone());
            Ok(profile)
        }
        Err(err) => {
            log::error!("profile fetch for {} failed: {}", role, err);
            Err(profile_error(&err))
        }
    }
}

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub role: Role,
    pub state: RwSignal<ProfileState>,
    pub editing: RwSignal<bool>,
    pub upload_action: Action<web_sys::File, Result<String, ApiError>>,
    session: SessionContext,
}

impl ProfileViewModel {
    /// Replaces the shown profile and the session copy.
    pub fn apply_update(&self, profile: PersonRecord) {
        self.session.update_profile(self.role, profile.clone());
        self.state.set(ProfileState::Ready(profile));
    }

    pub fn apply_picture(&self, url: String) {
        let current = self.state.with_untracked(|state| match state {
            ProfileState::Ready(profile) => Some(profile.clone()),
            _ => None,
        });
        if let Some(mut profile) = current {
            profile.profile_pic = Some(url);
            self.apply_update(profile);
        }
    }
}

pub fn use_profile(role: Role) -> ProfileViewModel {
    let session = use_session();
    let repository = ProfileRepository::from_context();
    let state = create_rw_signal(ProfileState::Loading);
    let editing = create_rw_signal(false);

    let loader = repository.clone();
    create_effect(move |_| {
        let repo = loader.clone();
        spawn_local(async move {
            let next = match load_profile(session, repo, role).await {
                Ok(profile) => ProfileState::Ready(profile),
                Err(message) => ProfileState::Failed(message),
            };
            state.set(next);
        });
    });

    let upload_action = create_action(move |file: &web_sys::File| {
        let repo = repository.clone();
        let file = file.clone();
        let person_id = state.with_untracked(|state| match state {
            ProfileState::Ready(profile) => profile.id.clone(),
            _ => None,
        });
        async move {
            let person_id = person_id.ok_or_else(|| ApiError::validation("Profile not available."))?;
            let upload = read_file(&file).await.map_err(ApiError::validation)?;
            repo.upload_picture(person_id, upload).await
        }
    });

    let vm = ProfileViewModel {
        role,
        state,
        editing,
        upload_action,
        session,
    };

    create_effect(move |_| {
        if let Some(result) = upload_action.value().get() {
            match result {
                Ok(url) => vm.apply_picture(url),
                Err(err) => {
                    log::error!("profile picture upload failed: {}", err);
                    alert(UPLOAD_FAILED);
                }
            }
        }
    });

    vm
}
