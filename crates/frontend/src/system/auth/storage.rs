use contracts::system::session::SessionInfo;
use web_sys::window;

const SESSION_KEY: &str = "tourism_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save session to localStorage
pub fn save_session(session: &SessionInfo) {
    let Ok(json) = serde_json::to_string(session) else {
        return;
    };
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(SESSION_KEY, &json);
    }
}

/// Load session from localStorage. A corrupted entry is dropped.
pub fn load_session() -> Option<SessionInfo> {
    let raw = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Stored session is unreadable, clearing: {}", e);
            clear_session();
            None
        }
    }
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
