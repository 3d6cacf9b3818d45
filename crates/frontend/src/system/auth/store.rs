//! Shared session state.

use contracts::auth::AdminUser;
use leptos::prelude::*;

use super::api::{self, AuthError};
use super::storage;

/// Signed-in admin profile shared through context. `None` means the
/// viewer is signed out and only the login page is reachable.
#[derive(Clone, Copy)]
pub struct SessionStore {
    admin: RwSignal<Option<AdminUser>>,
}

impl SessionStore {
    /// Builds the store, restoring any session persisted by a previous
    /// visit. Corrupt storage entries are dropped silently.
    pub fn init() -> Self {
        Self {
            admin: RwSignal::new(storage::load_session()),
        }
    }

    /// Reactive signed-in check for route guards.
    pub fn is_authenticated(&self) -> bool {
        self.admin.with(|a| a.is_some())
    }

    pub fn admin(&self) -> Option<AdminUser> {
        self.admin.get()
    }

    /// Admin id used to scope backend requests.
    pub fn admin_id(&self) -> Option<String> {
        self.admin.with(|a| a.as_ref().map(|admin| admin.admin_id.clone()))
    }

    /// Verifies credentials against the backend; on success the profile
    /// is kept in memory and mirrored to local storage.
    pub async fn sign_in(&self, email: String, password: String) -> Result<(), AuthError> {
        let profile = api::login(email, password).await?;
        storage::save_session(&profile);
        self.admin.set(Some(profile));
        Ok(())
    }

    /// Drops both the in-memory session and the persisted copy.
    pub fn sign_out(&self) {
        storage::clear_session();
        self.admin.set(None);
    }
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("SessionStore should be provided by App")
}
