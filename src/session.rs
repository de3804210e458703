//! Session Storage
//!
//! Where the token and user id live between requests. The browser client
//! keeps them in local storage; the terminal client in a JSON file.

use crate::error::{ClientError, ClientResult};
use crate::models::Session;

/// Storage key of the auth token
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key of the user id
pub const USER_ID_KEY: &str = "user_id";

/// Persistence for the current session
///
/// Reads and writes are unsynchronized; one client owns the store.
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;

    /// User id of the current session, or `NotLoggedIn`
    fn user_id(&self) -> ClientResult<String> {
        self.load()
            .map(|s| s.user_id)
            .filter(|id| !id.is_empty())
            .ok_or(ClientError::NotLoggedIn)
    }
}

#[cfg(feature = "native")]
pub use file::FileSessionStore;

#[cfg(feature = "native")]
mod file {
    use std::path::{Path, PathBuf};

    use super::SessionStore;
    use crate::error::{ClientError, ClientResult};
    use crate::models::Session;

    /// Session kept as JSON in a single file
    #[derive(Debug, Clone)]
    pub struct FileSessionStore {
        path: PathBuf,
    }

    impl FileSessionStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl SessionStore for FileSessionStore {
        fn load(&self) -> Option<Session> {
            let content = std::fs::read_to_string(&self.path).ok()?;
            match serde_json::from_str(&content) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable session file {:?}: {}", self.path, e);
                    None
                }
            }
        }

        fn save(&self, session: &Session) -> ClientResult<()> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ClientError::Storage(format!("Cannot create {:?}: {}", parent, e)))?;
            }
            let json = serde_json::to_string_pretty(session)
                .map_err(|e| ClientError::Storage(e.to_string()))?;
            std::fs::write(&self.path, json)
                .map_err(|e| ClientError::Storage(format!("Cannot write {:?}: {}", self.path, e)))?;
            tracing::debug!("Session saved to {:?}", self.path);
            Ok(())
        }

        fn clear(&self) -> ClientResult<()> {
            match std::fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(ClientError::Storage(format!(
                    "Cannot remove {:?}: {}",
                    self.path, e
                ))),
            }
        }
    }
}
