//! Persisted operator session.
//!
//! The session (API token plus the logged-in user) is stored as JSON in a
//! single file. [`SessionStore`] is created explicitly and handed to whoever
//! needs it; there is no process-wide session.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::DeskConfig;
use crate::error::{DeskError, DeskResult};
use crate::models::Session;

/// File-backed store for the operator session.
///
/// # Example
///
/// ```no_run
/// use payrun_desk::session::SessionStore;
///
/// let store = SessionStore::new("/tmp/desk/session.json");
/// match store.init()? {
///     Some(session) => println!("Signed in as {}", session.user.name),
///     None => println!("No session"),
/// }
/// # Ok::<(), payrun_desk::error::DeskError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by the file at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the configured session path.
    pub fn from_config(config: &DeskConfig) -> Self {
        Self::new(config.session.path.clone())
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted session.
    ///
    /// Returns `None` if nothing is persisted. A file that exists but cannot
    /// be read or parsed is a `Session` error.
    pub fn init(&self) -> DeskResult<Option<Session>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No persisted session");
                return Ok(None);
            }
            Err(err) => return Err(self.storage_error("read", err)),
        };

        let session: Session =
            serde_json::from_str(&content).map_err(|err| self.storage_error("parse", err))?;
        debug!(user_id = %session.user.id, "Restored persisted session");
        Ok(Some(session))
    }

    /// Persists `session`, replacing any previous one.
    pub fn persist(&self, session: &Session) -> DeskResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.storage_error("create", err))?;
        }
        let json =
            serde_json::to_string_pretty(session).map_err(|err| self.storage_error("encode", err))?;
        fs::write(&self.path, json).map_err(|err| self.storage_error("write", err))?;
        info!(user_id = %session.user.id, role = session.user.role.as_str(), "Session persisted");
        Ok(())
    }

    /// Clears the persisted session (logout). Clearing an absent session is
    /// not an error.
    pub fn teardown(&self) -> DeskResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Session cleared");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.storage_error("remove", err)),
        }
    }

    fn storage_error(&self, action: &str, err: impl std::fmt::Display) -> DeskError {
        DeskError::Session {
            message: format!("failed to {} {}: {}", action, self.path.display(), err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, SessionUser};

    fn session() -> Session {
        Session {
            token: "tok_abc".to_string(),
            user: SessionUser {
                id: "u_7".to_string(),
                name: "Robin".to_string(),
                role: Role::Admin,
            },
        }
    }

    #[test]
    fn test_init_without_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        assert!(store.init().unwrap().is_none());
    }

    #[test]
    fn test_persist_then_init_restores_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested/session.json"));
        store.persist(&session()).unwrap();
        assert_eq!(store.init().unwrap(), Some(session()));
    }

    #[test]
    fn test_teardown_clears_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        store.persist(&session()).unwrap();
        store.teardown().unwrap();
        assert!(store.init().unwrap().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_teardown_twice_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        store.teardown().unwrap();
        store.teardown().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_session_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        let result = SessionStore::new(path).init();
        assert!(matches!(result, Err(DeskError::Session { .. })));
    }

    #[test]
    fn test_from_config_uses_session_path() {
        let config = DeskConfig::default();
        let store = SessionStore::from_config(&config);
        assert_eq!(store.path(), config.session.path.as_path());
    }
}
