//! In-memory resource catalog
//!
//! [`CatalogStore`] owns the ordered resource collection (newest first),
//! the static subject catalog, and per-resource comments. The collection
//! is append-only: resources are prepended on insertion and there is no
//! update or delete. All state lives behind a single async lock so every
//! request observes a consistent snapshot.

pub mod filter;
pub mod search;
pub mod seed;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use studyhub_common::types::{Comment, NewResource, Resource, Subject};
use tokio::sync::RwLock;

/// Shared handle to the in-memory catalog
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<CatalogInner>>,
    subjects: Arc<Vec<Subject>>,
}

struct CatalogInner {
    /// Ordered newest-first
    resources: Vec<Resource>,
    /// Comments keyed by resource id
    comments: HashMap<String, Vec<Comment>>,
}

impl CatalogStore {
    /// Create a catalog from explicit data (newest-first resource order)
    pub fn new(
        subjects: Vec<Subject>,
        resources: Vec<Resource>,
        comments: HashMap<String, Vec<Comment>>,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CatalogInner {
                resources,
                comments,
            })),
            subjects: Arc::new(subjects),
        }
    }

    /// Create a catalog populated with the static seed dataset
    pub fn seeded() -> Self {
        Self::new(seed::subjects(), seed::resources(), seed::comments())
    }

    /// Create an empty catalog (no subjects, no resources)
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), HashMap::new())
    }

    /// Number of resources in the catalog
    pub async fn len(&self) -> usize {
        self.inner.read().await.resources.len()
    }

    /// Snapshot of the full collection in its stored (newest-first) order
    pub async fn all(&self) -> Vec<Resource> {
        self.inner.read().await.resources.clone()
    }

    /// Look up a resource by id
    pub async fn get(&self, id: &str) -> Option<Resource> {
        self.inner
            .read()
            .await
            .resources
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Insert a resource draft at the front of the collection
    ///
    /// Assigns the next sequential id and forces rating, download count,
    /// and view count to zero regardless of the draft.
    pub async fn add(&self, draft: NewResource) -> Resource {
        let mut inner = self.inner.write().await;

        // Monotonic because no removal operation exists
        let id = format!("r{}", inner.resources.len() + 1);

        let resource = Resource {
            id,
            title: draft.title,
            description: draft.description,
            subject_id: draft.subject_id,
            subject: draft.subject,
            semester: draft.semester,
            file_type: draft.file_type,
            file_url: draft.file_url,
            thumbnail_url: draft.thumbnail_url,
            tags: draft.tags,
            upload_date: draft.upload_date,
            uploader_id: draft.uploader_id,
            uploader_name: draft.uploader_name,
            rating: 0.0,
            download_count: 0,
            view_count: 0,
        };

        inner.resources.insert(0, resource.clone());
        tracing::debug!(resource_id = %resource.id, "Resource added to catalog");

        resource
    }

    /// The static subject catalog
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Look up a subject by id
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Comments for a resource, oldest first
    pub async fn comments(&self, resource_id: &str) -> Vec<Comment> {
        self.inner
            .read()
            .await
            .comments
            .get(resource_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Append a comment to a resource
    pub async fn add_comment(
        &self,
        resource_id: &str,
        user: &studyhub_common::types::User,
        content: String,
        rating: Option<u8>,
    ) -> Comment {
        let mut inner = self.inner.write().await;

        let total: usize = inner.comments.values().map(|c| c.len()).sum();
        let comment = Comment {
            id: format!("c{}", total + 1),
            resource_id: resource_id.to_string(),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            user_avatar: user.avatar.clone(),
            content,
            created_at: Utc::now(),
            rating,
        };

        inner
            .comments
            .entry(resource_id.to_string())
            .or_default()
            .push(comment.clone());

        comment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyhub_common::types::{FileType, User};

    fn draft(title: &str) -> NewResource {
        NewResource {
            title: title.to_string(),
            description: "A description".to_string(),
            subject_id: "s1".to_string(),
            subject: "Data Structures & Algorithms".to_string(),
            semester: 3,
            file_type: FileType::Pdf,
            file_url: "#".to_string(),
            thumbnail_url: None,
            tags: vec!["notes".to_string()],
            upload_date: Utc::now(),
            uploader_id: "current-user".to_string(),
            uploader_name: "Current User".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_prepends_and_zeroes_counters() {
        let store = CatalogStore::seeded();
        let before = store.len().await;

        let added = store.add(draft("Fresh Upload")).await;

        assert_eq!(added.rating, 0.0);
        assert_eq!(added.download_count, 0);
        assert_eq!(added.view_count, 0);

        let all = store.all().await;
        assert_eq!(all.len(), before + 1);
        assert_eq!(all[0].id, added.id); // newest first
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let store = CatalogStore::empty();
        let first = store.add(draft("One")).await;
        let second = store.add(draft("Two")).await;
        assert_eq!(first.id, "r1");
        assert_eq!(second.id, "r2");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = CatalogStore::seeded();
        assert!(store.get("r9999").await.is_none());
    }

    #[tokio::test]
    async fn test_subject_lookup() {
        let store = CatalogStore::seeded();
        assert!(store.subject("s1").is_some());
        assert!(store.subject("nope").is_none());
    }

    #[tokio::test]
    async fn test_comment_ids_are_sequential() {
        let store = CatalogStore::empty();
        let user = User {
            id: "user-google".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@iiti.ac.in".to_string(),
            avatar: None,
            department: None,
            semester: None,
        };

        let first = store.add_comment("r1", &user, "Great notes".to_string(), Some(5)).await;
        let second = store.add_comment("r1", &user, "Thanks".to_string(), None).await;
        assert_eq!(first.id, "c1");
        assert_eq!(second.id, "c2");
        assert_eq!(store.comments("r1").await.len(), 2);
        assert!(store.comments("r2").await.is_empty());
    }
}
