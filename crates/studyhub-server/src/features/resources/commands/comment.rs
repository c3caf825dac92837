//! Add comment command

use serde::{Deserialize, Serialize};
use studyhub_common::types::Comment;

use crate::catalog::CatalogStore;
use crate::session::SessionStore;

/// Command to comment on a resource
///
/// The optional star rating travels with the comment but does not feed
/// back into the resource's aggregate rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentCommand {
    #[serde(skip)]
    pub resource_id: String,
    #[serde(default)]
    pub content: String,
    pub rating: Option<u8>,
}

/// Errors that can occur when adding a comment
#[derive(Debug, thiserror::Error)]
pub enum AddCommentError {
    #[error("Authentication required")]
    NotAuthenticated,
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Comment content is required")]
    ContentRequired,
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}

/// Handles the add comment command
#[tracing::instrument(skip(catalog, session, command), fields(resource_id = %command.resource_id))]
pub async fn handle(
    catalog: CatalogStore,
    session: SessionStore,
    command: AddCommentCommand,
) -> Result<Comment, AddCommentError> {
    let user = session
        .current()
        .await
        .ok_or(AddCommentError::NotAuthenticated)?;

    if command.content.trim().is_empty() {
        return Err(AddCommentError::ContentRequired);
    }
    if let Some(rating) = command.rating {
        if !(1..=5).contains(&rating) {
            return Err(AddCommentError::InvalidRating(rating));
        }
    }

    if catalog.get(&command.resource_id).await.is_none() {
        return Err(AddCommentError::NotFound(command.resource_id));
    }

    let comment = catalog
        .add_comment(&command.resource_id, &user, command.content, command.rating)
        .await;

    tracing::info!(comment_id = %comment.id, user_id = %user.id, "Comment added");
    Ok(comment)
}
