//! Current session query

use serde::{Deserialize, Serialize};
use studyhub_common::types::User;

use crate::session::SessionStore;

/// The current session state
///
/// `user` is present exactly when `authenticated` is true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentSessionResponse {
    pub authenticated: bool,
    pub user: Option<User>,
}

/// Handles the current session query
#[tracing::instrument(skip(session))]
pub async fn handle(session: SessionStore) -> CurrentSessionResponse {
    let user = session.current().await;
    CurrentSessionResponse {
        authenticated: user.is_some(),
        user,
    }
}
