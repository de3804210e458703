//! Browser Session Storage
//!
//! The token and user id live in `localStorage` under `auth_token` and
//! `user_id`.

use trip_planner::session::{SessionStore, TOKEN_KEY, USER_ID_KEY};
use trip_planner::{ClientError, ClientResult, Session};

/// `SessionStore` backed by the window's local storage
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

fn local_storage() -> ClientResult<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| ClientError::Storage("localStorage unavailable".to_string()))
}

fn storage_error(e: wasm_bindgen::JsValue) -> ClientError {
    ClientError::Storage(format!("{:?}", e))
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<Session> {
        let storage = local_storage().ok()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let user_id = storage.get_item(USER_ID_KEY).ok().flatten()?;
        Some(Session { token, user_id })
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        let storage = local_storage()?;
        storage
            .set_item(TOKEN_KEY, &session.token)
            .map_err(storage_error)?;
        storage
            .set_item(USER_ID_KEY, &session.user_id)
            .map_err(storage_error)
    }

    fn clear(&self) -> ClientResult<()> {
        let storage = local_storage()?;
        storage.remove_item(TOKEN_KEY).map_err(storage_error)?;
        storage.remove_item(USER_ID_KEY).map_err(storage_error)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_save_load_clear() {
        let store = LocalSessionStore;
        store.clear().unwrap();
        assert!(store.load().is_none());
        assert_eq!(store.user_id(), Err(ClientError::NotLoggedIn));

        let session = Session {
            token: "tok".to_string(),
            user_id: "42".to_string(),
        };
        store.save(&session).unwrap();
        assert_eq!(store.load(), Some(session));
        assert_eq!(store.user_id().unwrap(), "42");

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[wasm_bindgen_test]
    fn test_token_without_user_id_is_no_session() {
        let store = LocalSessionStore;
        store.clear().unwrap();
        let storage = local_storage().unwrap();
        storage.set_item(TOKEN_KEY, "tok").unwrap();

        assert!(store.load().is_none());
        store.clear().unwrap();
    }
}
