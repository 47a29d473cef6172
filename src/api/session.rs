//! Signed-in identity, stored independently of the access credential.
//!
//! A session can outlive the in-memory token (for example when a file-backed
//! session is loaded by a new process); the first authorized call then has to
//! go through a refresh before it can succeed.

use super::errors::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Hr,
    Employee,
    Candidate,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Hr, Role::Employee, Role::Candidate];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Hr => "HR",
            Role::Employee => "EMPLOYEE",
            Role::Candidate => "CANDIDATE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "HR" => Ok(Role::Hr),
            "EMPLOYEE" => Ok(Role::Employee),
            "CANDIDATE" => Ok(Role::Candidate),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub company_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

pub trait SessionStore: Send + Sync {
    /// Returns the stored session, if any.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn load(&self) -> Result<Option<Session>, ApiError>;

    /// Persists the session, replacing any previous one.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, session: &Session) -> Result<(), ApiError>;

    /// Removes the stored session. Clearing an empty store is not an error.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be modified.
    fn clear(&self) -> Result<(), ApiError>;
}

/// Session kept for the lifetime of the process.
#[derive(Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, ApiError> {
        Ok(self
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, session: &Session) -> Result<(), ApiError> {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ApiError> {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Session stored as a JSON file, so separate CLI invocations share an identity.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store at `path`, creating parent directories if needed.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ApiError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ApiError::Config(format!("Failed to create session directory: {e}"))
            })?;
        }
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, ApiError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ApiError::Config(format!("Failed to read session file: {e}")))?;

        match serde_json::from_str(&content) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                // A corrupt file is treated as signed out rather than fatal.
                debug!("ignoring unreadable session file: {err}");
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), ApiError> {
        let content = serde_json::to_string_pretty(session)
            .map_err(|e| ApiError::Config(format!("Failed to serialize session: {e}")))?;

        std::fs::write(&self.path, content)
            .map_err(|e| ApiError::Config(format!("Failed to write session file: {e}")))
    }

    fn clear(&self) -> Result<(), ApiError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApiError::Config(format!(
                "Failed to remove session file: {err}"
            ))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn session() -> Session {
        Session {
            id: "u-1".to_string(),
            email: "hr@example.com".to_string(),
            name: "Hana Reyes".to_string(),
            role: Role::Hr,
            company_id: "c-1".to_string(),
            department: None,
        }
    }

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("recruit-admin-session-{}", Uuid::new_v4()))
            .join("session.json")
    }

    #[test]
    fn role_round_trips_through_strings() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert_eq!("hr".parse::<Role>().unwrap(), Role::Hr);
        assert!("owner".parse::<Role>().is_err());
        assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"EMPLOYEE\"");
    }

    #[test]
    fn memory_store_saves_and_clears() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save(&session()).unwrap();
        assert_eq!(store.load().unwrap(), Some(session()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let path = temp_path();
        let store = FileSessionStore::new(&path).unwrap();
        store.save(&session()).unwrap();

        let reopened = FileSessionStore::new(&path).unwrap();
        assert_eq!(reopened.load().unwrap(), Some(session()));

        reopened.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Clearing twice is fine.
        reopened.clear().unwrap();

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn file_store_treats_corrupt_file_as_signed_out() {
        let path = temp_path();
        let store = FileSessionStore::new(&path).unwrap();
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(store.load().unwrap(), None);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
