//! List comments query

use serde::{Deserialize, Serialize};
use studyhub_common::types::Comment;

use crate::catalog::CatalogStore;

/// Query to list the comments left on a resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCommentsQuery {
    pub resource_id: String,
}

/// Errors that can occur when listing comments
#[derive(Debug, thiserror::Error)]
pub enum ListCommentsError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),
}

/// Handles the list comments query
///
/// A resource with no comments yields an empty list; only an unknown
/// resource id is an error.
#[tracing::instrument(skip(catalog))]
pub async fn handle(
    catalog: CatalogStore,
    query: ListCommentsQuery,
) -> Result<Vec<Comment>, ListCommentsError> {
    if catalog.get(&query.resource_id).await.is_none() {
        return Err(ListCommentsError::ResourceNotFound(query.resource_id));
    }

    Ok(catalog.comments(&query.resource_id).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_comments_for_seeded_resource() {
        let catalog = CatalogStore::seeded();
        let comments = handle(
            catalog,
            ListCommentsQuery {
                resource_id: "r1".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(!comments.is_empty());
        assert!(comments.iter().all(|c| c.resource_id == "r1"));
    }

    #[tokio::test]
    async fn test_resource_without_comments_is_empty_list() {
        let catalog = CatalogStore::seeded();
        let comments = handle(
            catalog,
            ListCommentsQuery {
                resource_id: "r5".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_resource_is_not_found() {
        let catalog = CatalogStore::seeded();
        let result = handle(
            catalog,
            ListCommentsQuery {
                resource_id: "missing".to_string(),
            },
        )
        .await;
        assert!(matches!(result, Err(ListCommentsError::ResourceNotFound(_))));
    }
}
