//! Logout command

use studyhub_common::StudyHubError;

use crate::session::SessionStore;

/// Errors that can occur when logging out
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Could not clear persisted session: {0}")]
    Persistence(#[from] StudyHubError),
}

/// Handles the logout command
///
/// Logging out while already anonymous succeeds.
#[tracing::instrument(skip(session))]
pub async fn handle(session: SessionStore) -> Result<(), LogoutError> {
    session.logout().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Provider;
    use std::time::Duration;

    #[tokio::test]
    async fn test_logout_clears_session() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionStore::open(dir.path().join("session.json"))
            .await
            .unwrap();
        session
            .login(Provider::Google, Duration::from_millis(0))
            .await
            .unwrap();

        handle(session.clone()).await.unwrap();
        assert!(session.current().await.is_none());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionStore::open(dir.path().join("session.json"))
            .await
            .unwrap();

        assert!(handle(session.clone()).await.is_ok());
        assert!(handle(session).await.is_ok());
    }
}
