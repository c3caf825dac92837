//! List subjects query

use serde::{Deserialize, Serialize};
use studyhub_common::types::Subject;

use crate::catalog::CatalogStore;

/// Query to list subjects, optionally limited to one semester
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSubjectsQuery {
    pub semester: Option<i32>,
}

/// Errors that can occur when listing subjects
#[derive(Debug, thiserror::Error)]
pub enum ListSubjectsError {
    #[error("Invalid semester: {0}")]
    InvalidSemester(i32),
}

/// Handles the list subjects query
#[tracing::instrument(skip(catalog))]
pub async fn handle(
    catalog: CatalogStore,
    query: ListSubjectsQuery,
) -> Result<Vec<Subject>, ListSubjectsError> {
    if let Some(semester) = query.semester {
        if semester < 1 {
            return Err(ListSubjectsError::InvalidSemester(semester));
        }
    }

    let subjects = catalog
        .subjects()
        .iter()
        .filter(|s| query.semester.map_or(true, |sem| s.semester == sem))
        .cloned()
        .collect();

    Ok(subjects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_all_subjects() {
        let catalog = CatalogStore::seeded();
        let total = catalog.subjects().len();

        let subjects = handle(catalog, ListSubjectsQuery::default()).await.unwrap();
        assert_eq!(subjects.len(), total);
    }

    #[tokio::test]
    async fn test_list_subjects_by_semester() {
        let catalog = CatalogStore::seeded();
        let subjects = handle(catalog, ListSubjectsQuery { semester: Some(1) })
            .await
            .unwrap();
        assert!(!subjects.is_empty());
        assert!(subjects.iter().all(|s| s.semester == 1));
    }

    #[tokio::test]
    async fn test_unused_semester_yields_empty_list() {
        let catalog = CatalogStore::seeded();
        let subjects = handle(catalog, ListSubjectsQuery { semester: Some(12) })
            .await
            .unwrap();
        assert!(subjects.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_semester_rejected() {
        let catalog = CatalogStore::seeded();
        let result = handle(catalog, ListSubjectsQuery { semester: Some(0) }).await;
        assert!(matches!(result, Err(ListSubjectsError::InvalidSemester(0))));
    }
}
