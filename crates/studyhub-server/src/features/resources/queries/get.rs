//! Get single resource query

use serde::{Deserialize, Serialize};
use studyhub_common::types::Resource;

use crate::catalog::CatalogStore;

/// Query to fetch one resource by its identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetResourceQuery {
    pub id: String,
}

/// Errors that can occur when fetching a resource
#[derive(Debug, thiserror::Error)]
pub enum GetResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),
}

/// Handles the get resource query
#[tracing::instrument(skip(catalog))]
pub async fn handle(
    catalog: CatalogStore,
    query: GetResourceQuery,
) -> Result<Resource, GetResourceError> {
    catalog
        .get(&query.id)
        .await
        .ok_or(GetResourceError::NotFound(query.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_existing_resource() {
        let catalog = CatalogStore::seeded();
        let resource = handle(
            catalog,
            GetResourceQuery {
                id: "r1".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(resource.id, "r1");
    }

    #[tokio::test]
    async fn test_get_unknown_resource_is_not_found() {
        let catalog = CatalogStore::seeded();
        let result = handle(
            catalog,
            GetResourceQuery {
                id: "r999".to_string(),
            },
        )
        .await;
        assert!(matches!(result, Err(GetResourceError::NotFound(id)) if id == "r999"));
    }
}
