//! Download resource command
//!
//! Requires an authenticated session and acknowledges the download with
//! the resource's file URL. Download counters are part of the seeded
//! dataset and are never mutated at runtime.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogStore;
use crate::session::SessionStore;

/// Command to download a resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadResourceCommand {
    pub resource_id: String,
}

/// Acknowledgement returned for a permitted download
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResourceResponse {
    pub resource_id: String,
    pub file_url: String,
}

/// Errors that can occur when downloading a resource
#[derive(Debug, thiserror::Error)]
pub enum DownloadResourceError {
    #[error("Authentication required")]
    NotAuthenticated,
    #[error("Resource not found: {0}")]
    NotFound(String),
}

/// Handles the download resource command
#[tracing::instrument(skip(catalog, session))]
pub async fn handle(
    catalog: CatalogStore,
    session: SessionStore,
    command: DownloadResourceCommand,
) -> Result<DownloadResourceResponse, DownloadResourceError> {
    let user = session
        .current()
        .await
        .ok_or(DownloadResourceError::NotAuthenticated)?;

    let resource = catalog
        .get(&command.resource_id)
        .await
        .ok_or(DownloadResourceError::NotFound(command.resource_id))?;

    tracing::info!(resource_id = %resource.id, user_id = %user.id, "Download acknowledged");

    Ok(DownloadResourceResponse {
        resource_id: resource.id,
        file_url: resource.file_url,
    })
}
