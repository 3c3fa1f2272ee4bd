use crate::{api::PersonRecord, utils::storage as storage_utils};
use leptos::*;
use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

pub const TOKEN_KEY: &str = "neb_token";
pub const ROLE_KEY: &str = "neb_role";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Hr,
    Employee,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Hr, Role::Employee];

    pub fn parse(value: &str) -> Option<Role> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(value))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Hr => "hr",
            Role::Employee => "employee",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Hr => "HR",
            Role::Employee => "Employee",
        }
    }

    pub fn profile_key(&self) -> &'static str {
        match self {
            Role::Admin => "neb_admin_info",
            Role::Hr => "neb_hr_info",
            Role::Employee => "neb_employee_info",
        }
    }

    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Hr => "/hr",
            Role::Employee => "/employee",
        }
    }

    pub fn login_path(&self) -> String {
        format!("/login/{}", self.as_str())
    }

    pub fn profile_path(&self) -> String {
        format!("/{}/profile", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub role: Role,
    pub token: String,
    pub profile: PersonRecord,
}

/// Durable key/value storage behind the session.
pub trait SessionBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

pub struct LocalStorageBackend;

impl SessionBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        storage_utils::local_storage()
            .ok()?
            .get_item(key)
            .ok()
            .flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        storage_utils::local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store {}", key))
    }

    fn remove(&self, key: &str) {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn SessionBackend>,
}

impl SessionStore {
    pub fn browser() -> Self {
        Self::with_backend(Rc::new(LocalStorageBackend))
    }

    pub fn in_memory() -> Self {
        Self::with_backend(Rc::new(MemoryBackend::default()))
    }

    pub fn with_backend(backend: Rc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    pub fn token(&self) -> Option<String> {
        self.backend
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn role(&self) -> Option<Role> {
        self.backend.get(ROLE_KEY).as_deref().and_then(Role::parse)
    }

    pub fn cached_profile(&self, role: Role) -> Option<PersonRecord> {
        let raw = self.backend.get(role.profile_key())?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                log::warn!("discarding unreadable {} profile: {}", role, err);
                None
            }
        }
    }

    pub fn load(&self) -> Option<Session> {
        let role = self.role()?;
        let token = self.token()?;
        let profile = self.cached_profile(role)?;
        Some(Session {
            role,
            token,
            profile,
        })
    }

    /// Persists the session and drops the profile cached for any other role.
    pub fn save(&self, session: &Session) -> Result<(), String> {
        self.backend.set(TOKEN_KEY, &session.token)?;
        self.backend.set(ROLE_KEY, session.role.as_str())?;
        self.store_profile(session.role, &session.profile)?;
        Role::ALL
            .into_iter()
            .filter(|role| *role != session.role)
            .for_each(|role| self.backend.remove(role.profile_key()));
        Ok(())
    }

    pub fn store_profile(&self, role: Role, profile: &PersonRecord) -> Result<(), String> {
        let raw = serde_json::to_string(profile)
            .map_err(|e| format!("Failed to serialize profile: {}", e))?;
        self.backend.set(role.profile_key(), &raw)
    }

    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(ROLE_KEY);
        for role in Role::ALL {
            self.backend.remove(role.profile_key());
        }
    }
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Option<Session>>,
    store: StoredValue<SessionStore>,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        let initial = store.load();
        Self {
            session: create_rw_signal(initial),
            store: store_value(store),
        }
    }

    pub fn store(&self) -> SessionStore {
        self.store.get_value()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.with(|s| s.as_ref().map(|s| s.role))
    }

    pub fn token(&self) -> Option<String> {
        self.store.with_value(SessionStore::token)
    }

    /// Profile for `role`: the live session first, then the durable cache.
    pub fn cached_profile(&self, role: Role) -> Option<PersonRecord> {
        self.session
            .with_untracked(|s| {
                s.as_ref()
                    .filter(|s| s.role == role)
                    .map(|s| s.profile.clone())
            })
            .or_else(|| self.store.with_value(|store| store.cached_profile(role)))
    }

    pub fn sign_in(&self, session: Session) -> Result<(), String> {
        self.store.with_value(|store| store.save(&session))?;
        log::info!("signed in as {}", session.role);
        self.session.set(Some(session));
        Ok(())
    }

    pub fn sign_out(&self) {
        self.store.with_value(SessionStore::clear);
        self.session.set(None);
    }

    pub fn update_profile(&self, role: Role, profile: PersonRecord) {
        if let Err(err) = self
            .store
            .with_value(|store| store.store_profile(role, &profile))
        {
            log::warn!("{}", err);
        }
        self.session.update(|current| {
            if let Some(session) = current.as_mut().filter(|s| s.role == role) {
                session.profile = profile;
            }
        });
    }
}

pub fn provide_session(store: SessionStore) -> SessionContext {
    let ctx = SessionContext::new(store);
    provide_context(ctx);
    ctx
}

#[component]
pub fn SessionProvider(store: SessionStore, children: Children) -> impl IntoView {
    provide_session(store);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| SessionContext::new(SessionStore::in_memory()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trips_a_session() {
        let store = SessionStore::browser();
        store.clear();
        let session = Session {
            role: Role::Employee,
            token: "t-browser".into(),
            profile: PersonRecord {
                id: Some("11".into()),
                ..Default::default()
            },
        };
        store.save(&session).unwrap();
        assert_eq!(store.load(), Some(session));

        store.clear();
        assert!(store.load().is_none());
        assert!(store.token().is_none());
    }
}
