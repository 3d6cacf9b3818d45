//! Session persistence in browser local storage.

use contracts::auth::AdminUser;
use web_sys::Storage;

const SESSION_KEY: &str = "admin_user";

fn get_local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Persist the signed-in profile for the next page load.
pub fn save_session(admin: &AdminUser) {
    if let (Some(storage), Ok(json)) = (get_local_storage(), serde_json::to_string(admin)) {
        let _ = storage.set_item(SESSION_KEY, &json);
    }
}

/// Restore the persisted session, if any. A malformed entry is removed
/// and treated as signed out rather than surfaced as an error.
pub fn load_session() -> Option<AdminUser> {
    let storage = get_local_storage()?;
    let raw = storage.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str::<AdminUser>(&raw) {
        Ok(admin) => Some(admin),
        Err(_) => {
            let _ = storage.remove_item(SESSION_KEY);
            None
        }
    }
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
