//! Session state with file-backed persistence
//!
//! Holds the optional current user for the whole process. The user record
//! is persisted to a single JSON file under a fixed key and rehydrated at
//! startup; unreadable or unparseable content is treated as logged-out and
//! the file is removed, never surfaced as an error.
//!
//! Login is a mock OAuth flow: a simulated network delay followed by a
//! deterministic user derived from the chosen provider. The delay seam is
//! where a real identity-provider call would slot in.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use studyhub_common::types::User;
use studyhub_common::{Result, StudyHubError};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Fixed key the current-user record is stored under
pub const SESSION_STORAGE_KEY: &str = "study-hub-user";

/// Supported mock OAuth providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Github,
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "google" => Ok(Provider::Google),
            "github" => Ok(Provider::Github),
            _ => Err(format!("Invalid provider: {}", s)),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Google => write!(f, "google"),
            Provider::Github => write!(f, "github"),
        }
    }
}

/// Shared handle to the process-wide session state
#[derive(Clone)]
pub struct SessionStore {
    path: PathBuf,
    current: Arc<RwLock<Option<User>>>,
}

impl SessionStore {
    /// Open the store, rehydrating any persisted user
    ///
    /// A missing file means anonymous. A file that cannot be parsed also
    /// means anonymous, and the offending file is deleted.
    pub async fn open(path: PathBuf) -> Result<Self> {
        let current = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => match serde_json::from_str::<User>(&contents) {
                Ok(user) => {
                    debug!(user_id = %user.id, "Rehydrated persisted session");
                    Some(user)
                },
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Stored session is unparseable, clearing it");
                    let _ = tokio::fs::remove_file(&path).await;
                    None
                },
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read stored session, treating as logged out");
                None
            },
        };

        Ok(Self {
            path,
            current: Arc::new(RwLock::new(current)),
        })
    }

    /// The current user, if authenticated
    pub async fn current(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    /// Mock OAuth login
    ///
    /// Sleeps for the simulated network delay, then installs and persists
    /// the deterministic mock user for the provider.
    pub async fn login(&self, provider: Provider, delay: Duration) -> Result<User> {
        tokio::time::sleep(delay).await;

        let user = mock_user(provider);
        self.persist(&user).await?;
        *self.current.write().await = Some(user.clone());

        info!(user_id = %user.id, provider = %provider, "User logged in");
        Ok(user)
    }

    /// Log out, clearing in-memory state and the persisted file
    pub async fn logout(&self) -> Result<()> {
        *self.current.write().await = None;

        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {},
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {},
            Err(e) => return Err(StudyHubError::Io(e)),
        }

        info!("User logged out");
        Ok(())
    }

    async fn persist(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_string_pretty(user)?;
        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }
}

/// The deterministic mock user for a provider
fn mock_user(provider: Provider) -> User {
    let (id, name, email) = match provider {
        Provider::Google => ("user-google", "John Doe", "john.doe@iiti.ac.in"),
        Provider::Github => ("user-github", "Jane Smith", "jane.smith@iiti.ac.in"),
    };

    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: Some(format!(
            "https://ui-avatars.com/api/?name={}&background=random",
            name.replace(' ', "+")
        )),
        department: Some("Computer Science".to_string()),
        semester: Some(5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join(format!("{}.json", SESSION_STORAGE_KEY))
    }

    #[tokio::test]
    async fn test_open_missing_file_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(session_path(&dir)).await.unwrap();
        assert!(store.current().await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_cleared_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = session_path(&dir);
        std::fs::write(&path, "{not json at all").unwrap();

        let store = SessionStore::open(path.clone()).await.unwrap();
        assert!(store.current().await.is_none());
        assert!(!path.exists(), "corrupt session file should be removed");
    }

    #[tokio::test]
    async fn test_login_persists_and_rehydrates() {
        let dir = tempfile::tempdir().unwrap();
        let path = session_path(&dir);

        let store = SessionStore::open(path.clone()).await.unwrap();
        let user = store
            .login(Provider::Google, Duration::from_millis(0))
            .await
            .unwrap();
        assert_eq!(user.id, "user-google");
        assert_eq!(store.current().await, Some(user.clone()));

        // A fresh store rehydrates the same user from disk
        let reopened = SessionStore::open(path).await.unwrap();
        assert_eq!(reopened.current().await, Some(user));
    }

    #[tokio::test]
    async fn test_logout_clears_state_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = session_path(&dir);

        let store = SessionStore::open(path.clone()).await.unwrap();
        store
            .login(Provider::Github, Duration::from_millis(0))
            .await
            .unwrap();
        assert!(path.exists());

        store.logout().await.unwrap();
        assert!(store.current().await.is_none());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_logout_when_already_anonymous_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(session_path(&dir)).await.unwrap();
        assert!(store.logout().await.is_ok());
    }

    #[test]
    fn test_mock_users_are_deterministic() {
        let a = mock_user(Provider::Google);
        let b = mock_user(Provider::Google);
        assert_eq!(a, b);
        assert_ne!(a, mock_user(Provider::Github));
    }

    #[test]
    fn test_provider_parsing() {
        assert_eq!("google".parse::<Provider>().unwrap(), Provider::Google);
        assert!("gitlab".parse::<Provider>().is_err());
    }
}
