//! Rate resource command
//!
//! Requires an authenticated session and accepts a 1-5 star rating. The
//! stored aggregate rating is part of the seeded dataset and is never
//! recomputed at runtime; the command acknowledges the submission.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogStore;
use crate::session::SessionStore;

/// Command to rate a resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateResourceCommand {
    #[serde(skip)]
    pub resource_id: String,
    pub rating: u8,
}

/// Acknowledgement returned for an accepted rating
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateResourceResponse {
    pub resource_id: String,
    pub rating: u8,
}

/// Errors that can occur when rating a resource
#[derive(Debug, thiserror::Error)]
pub enum RateResourceError {
    #[error("Authentication required")]
    NotAuthenticated,
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}

/// Handles the rate resource command
#[tracing::instrument(skip(catalog, session))]
pub async fn handle(
    catalog: CatalogStore,
    session: SessionStore,
    command: RateResourceCommand,
) -> Result<RateResourceResponse, RateResourceError> {
    let user = session
        .current()
        .await
        .ok_or(RateResourceError::NotAuthenticated)?;

    if !(1..=5).contains(&command.rating) {
        return Err(RateResourceError::InvalidRating(command.rating));
    }

    let resource = catalog
        .get(&command.resource_id)
        .await
        .ok_or(RateResourceError::NotFound(command.resource_id))?;

    tracing::info!(
        resource_id = %resource.id,
        user_id = %user.id,
        rating = command.rating,
        "Rating accepted"
    );

    Ok(RateResourceResponse {
        resource_id: resource.id,
        rating: command.rating,
    })
}
