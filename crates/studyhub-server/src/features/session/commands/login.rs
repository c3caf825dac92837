//! Login command
//!
//! Mock OAuth: the provider name selects a deterministic user after a
//! simulated network delay.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use studyhub_common::types::User;
use studyhub_common::StudyHubError;

use crate::session::{Provider, SessionStore};

/// Command to log in with a mock OAuth provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCommand {
    /// Provider name as sent on the wire, `google` or `github`
    pub provider: String,
}

/// Errors that can occur when logging in
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid provider: {0}")]
    InvalidProvider(String),
    #[error("Could not persist session: {0}")]
    Persistence(#[from] StudyHubError),
}

/// Handles the login command
#[tracing::instrument(skip(session), fields(provider = %command.provider))]
pub async fn handle(
    session: SessionStore,
    command: LoginCommand,
    delay: Duration,
) -> Result<User, LoginError> {
    let provider: Provider = command
        .provider
        .parse()
        .map_err(|_| LoginError::InvalidProvider(command.provider.clone()))?;

    let user = session.login(provider, delay).await?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> SessionStore {
        let dir = tempfile::tempdir().unwrap();
        SessionStore::open(dir.path().join("session.json"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_login_with_known_provider() {
        let session = store().await;
        let user = handle(
            session.clone(),
            LoginCommand {
                provider: "github".to_string(),
            },
            Duration::from_millis(0),
        )
        .await
        .unwrap();

        assert_eq!(user.id, "user-github");
        assert_eq!(session.current().await, Some(user));
    }

    #[tokio::test]
    async fn test_login_with_unknown_provider() {
        let result = handle(
            store().await,
            LoginCommand {
                provider: "gitlab".to_string(),
            },
            Duration::from_millis(0),
        )
        .await;
        assert!(matches!(result, Err(LoginError::InvalidProvider(p)) if p == "gitlab"));
    }
}
