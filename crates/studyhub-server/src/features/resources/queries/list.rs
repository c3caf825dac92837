//! List resources query
//!
//! Decodes a filter specification from the request's raw query string,
//! runs the filter/sort engine against the full collection, and returns
//! the result set together with the canonical query string for the
//! applied filter (the shareable form of the current view).

use serde::{Deserialize, Serialize};
use studyhub_common::types::Resource;

use crate::catalog::filter::{FilterParseError, SearchFilters};
use crate::catalog::{search, CatalogStore};

/// Query to list resources with filtering and sorting
///
/// `query_string` is the raw (still percent-encoded) query string of the
/// listing request; recognized parameters are `query`, `semester`,
/// `subject`, `fileType`, `tags`, and `sortBy`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResourcesQuery {
    pub query_string: String,
}

/// Response containing the filtered, ordered result set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResourcesResponse {
    /// Matching resources in their final order
    pub items: Vec<Resource>,
    /// The decoded filter specification that was applied
    pub filters: SearchFilters,
    /// Canonical encoding of `filters`, suitable for a shareable URL
    pub canonical_query: String,
}

/// Errors that can occur when listing resources
#[derive(Debug, thiserror::Error)]
pub enum ListResourcesError {
    /// The query string could not be decoded into a filter specification
    #[error(transparent)]
    Filter(#[from] FilterParseError),
}

/// Handles the list resources query
///
/// An empty result set is a valid response, not an error. An empty or
/// absent query string returns the full collection in `recent` order.
#[tracing::instrument(skip(catalog, query), fields(query_string = %query.query_string))]
pub async fn handle(
    catalog: CatalogStore,
    query: ListResourcesQuery,
) -> Result<ListResourcesResponse, ListResourcesError> {
    let filters = SearchFilters::decode(&query.query_string)?;

    let resources = catalog.all().await;
    let items = search::apply(&resources, &filters);
    let canonical_query = filters.encode();

    tracing::debug!(
        matched = items.len(),
        total = resources.len(),
        "Catalog listing computed"
    );

    Ok(ListResourcesResponse {
        items,
        filters,
        canonical_query,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_query_returns_everything_recent_first() {
        let catalog = CatalogStore::seeded();
        let total = catalog.len().await;

        let response = handle(catalog, ListResourcesQuery::default()).await.unwrap();
        assert_eq!(response.items.len(), total);
        assert_eq!(response.canonical_query, "");
        for pair in response.items.windows(2) {
            assert!(pair[0].upload_date >= pair[1].upload_date);
        }
    }

    #[tokio::test]
    async fn test_filtered_listing_reports_canonical_query() {
        let catalog = CatalogStore::seeded();
        let query = ListResourcesQuery {
            query_string: "sortBy=popular&semester=5".to_string(),
        };

        let response = handle(catalog, query).await.unwrap();
        assert!(response.items.iter().all(|r| r.semester == 5));
        // Canonical order is fixed regardless of input parameter order
        assert_eq!(response.canonical_query, "semester=5&sortBy=popular");
    }

    #[tokio::test]
    async fn test_invalid_filter_is_an_error() {
        let catalog = CatalogStore::seeded();
        let query = ListResourcesQuery {
            query_string: "semester=0".to_string(),
        };

        let result = handle(catalog, query).await;
        assert!(matches!(
            result,
            Err(ListResourcesError::Filter(FilterParseError::InvalidSemester(_)))
        ));
    }

    #[tokio::test]
    async fn test_no_matches_is_empty_not_error() {
        let catalog = CatalogStore::seeded();
        let query = ListResourcesQuery {
            query_string: "query=quantum%20chromodynamics".to_string(),
        };

        let response = handle(catalog, query).await.unwrap();
        assert!(response.items.is_empty());
    }
}
