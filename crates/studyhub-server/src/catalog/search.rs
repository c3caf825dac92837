//! Filter/sort engine for the resource catalog
//!
//! [`apply`] is a pure function from the full resource collection and a
//! filter specification to a filtered, ordered subset. All predicates are
//! AND-combined; absent or empty filter fields impose no constraint.

use std::cmp::Ordering;

use studyhub_common::types::{Resource, SortKey};

use super::filter::SearchFilters;

/// Apply a filter specification to a resource collection
///
/// Returns a new vector; the input is never mutated. Sorting is stable,
/// so resources that compare equal keep their input order. A `sort_by`
/// of `None` leaves the filtered order untouched.
pub fn apply(resources: &[Resource], filters: &SearchFilters) -> Vec<Resource> {
    let mut filtered: Vec<Resource> = resources
        .iter()
        .filter(|resource| matches(resource, filters))
        .cloned()
        .collect();

    match filters.sort_by {
        Some(SortKey::Recent) => {
            filtered.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
        },
        Some(SortKey::Popular) => {
            filtered.sort_by(|a, b| b.download_count.cmp(&a.download_count));
        },
        Some(SortKey::TopRated) => {
            filtered.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            });
        },
        None => {},
    }

    filtered
}

/// True when a resource satisfies every constraint of the specification
fn matches(resource: &Resource, filters: &SearchFilters) -> bool {
    if !filters.query.is_empty() {
        let query = filters.query.to_lowercase();
        let in_text = resource.title.to_lowercase().contains(&query)
            || resource.description.to_lowercase().contains(&query)
            || resource.subject.to_lowercase().contains(&query)
            || resource
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query));
        if !in_text {
            return false;
        }
    }

    if let Some(semester) = filters.semester {
        if resource.semester != semester {
            return false;
        }
    }

    if let Some(ref subject) = filters.subject {
        if &resource.subject_id != subject {
            return false;
        }
    }

    if let Some(file_type) = filters.file_type {
        if resource.file_type != file_type {
            return false;
        }
    }

    // ANY-of tag intersection
    if !filters.tags.is_empty() {
        let overlaps = filters
            .tags
            .iter()
            .any(|tag| resource.tags.contains(tag));
        if !overlaps {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use studyhub_common::types::FileType;

    fn resource(id: &str, title: &str) -> Resource {
        Resource {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            subject_id: "s1".to_string(),
            subject: "Data Structures".to_string(),
            semester: 3,
            file_type: FileType::Pdf,
            file_url: "#".to_string(),
            thumbnail_url: None,
            tags: Vec::new(),
            upload_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            uploader_id: "u1".to_string(),
            uploader_name: "Uploader".to_string(),
            rating: 0.0,
            download_count: 0,
            view_count: 0,
        }
    }

    fn sample_collection() -> Vec<Resource> {
        let mut june = resource("r2", "Operating Systems Notes");
        june.upload_date = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        june.download_count = 2;
        june.rating = 4.8;
        june.subject_id = "s4".to_string();
        june.subject = "Operating Systems".to_string();
        june.semester = 5;
        june.tags = vec!["final".to_string()];

        let mut jan = resource("r1", "Sorting Algorithms");
        jan.upload_date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        jan.download_count = 10;
        jan.rating = 4.2;
        jan.tags = vec!["midterm".to_string()];

        vec![june, jan]
    }

    #[test]
    fn test_empty_filter_returns_full_collection_recent_order() {
        let collection = sample_collection();
        let result = apply(&collection, &SearchFilters::default());

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "r2"); // June before January
        assert_eq!(result[1].id, "r1");
    }

    #[test]
    fn test_recent_vs_popular_ordering() {
        let collection = sample_collection();

        let recent = apply(
            &collection,
            &SearchFilters {
                sort_by: Some(SortKey::Recent),
                ..Default::default()
            },
        );
        assert_eq!(recent[0].id, "r2");

        let popular = apply(
            &collection,
            &SearchFilters {
                sort_by: Some(SortKey::Popular),
                ..Default::default()
            },
        );
        assert_eq!(popular[0].id, "r1"); // 10 downloads beats 2
    }

    #[test]
    fn test_top_rated_ordering() {
        let collection = sample_collection();
        let result = apply(
            &collection,
            &SearchFilters {
                sort_by: Some(SortKey::TopRated),
                ..Default::default()
            },
        );
        assert_eq!(result[0].id, "r2"); // 4.8 beats 4.2
    }

    #[test]
    fn test_no_sort_preserves_input_order() {
        let mut collection = sample_collection();
        collection.reverse(); // January first
        let result = apply(
            &collection,
            &SearchFilters {
                sort_by: None,
                ..Default::default()
            },
        );
        assert_eq!(result[0].id, "r1");
        assert_eq!(result[1].id, "r2");
    }

    #[test]
    fn test_query_matches_title_description_subject_and_tags() {
        let mut r = resource("r1", "Graph Theory Primer");
        r.description = "Covers spanning trees".to_string();
        r.subject = "Discrete Mathematics".to_string();
        r.tags = vec!["exam-prep".to_string()];
        let collection = vec![r];

        for query in ["graph", "SPANNING", "discrete", "exam-prep"] {
            let filters = SearchFilters {
                query: query.to_string(),
                ..Default::default()
            };
            assert_eq!(apply(&collection, &filters).len(), 1, "query '{}'", query);
        }

        let miss = SearchFilters {
            query: "thermodynamics".to_string(),
            ..Default::default()
        };
        assert!(apply(&collection, &miss).is_empty());
    }

    #[test]
    fn test_tag_filter_is_any_of() {
        let mut r = resource("r1", "Midterm Paper");
        r.tags = vec!["midterm".to_string()];
        let collection = vec![r];

        let filters = SearchFilters {
            tags: vec!["midterm".to_string(), "final".to_string()],
            ..Default::default()
        };
        assert_eq!(apply(&collection, &filters).len(), 1);

        let disjoint = SearchFilters {
            tags: vec!["final".to_string()],
            ..Default::default()
        };
        assert!(apply(&collection, &disjoint).is_empty());
    }

    #[test]
    fn test_combined_subject_and_semester() {
        let mut a = resource("r1", "Match");
        a.subject_id = "CS101".to_string();
        a.semester = 3;
        let mut b = resource("r2", "Wrong semester");
        b.subject_id = "CS101".to_string();
        b.semester = 4;
        let mut c = resource("r3", "Wrong subject");
        c.subject_id = "MA102".to_string();
        c.semester = 3;

        let filters = SearchFilters {
            subject: Some("CS101".to_string()),
            semester: Some(3),
            ..Default::default()
        };

        let result = apply(&[a, b, c], &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "r1");
    }

    #[test]
    fn test_file_type_filter() {
        let mut pdf = resource("r1", "Slides");
        pdf.file_type = FileType::Pdf;
        let mut video = resource("r2", "Lecture");
        video.file_type = FileType::Video;

        let filters = SearchFilters {
            file_type: Some(FileType::Video),
            ..Default::default()
        };
        let result = apply(&[pdf, video], &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "r2");
    }

    #[test]
    fn test_empty_input_returns_empty_output() {
        let filters = SearchFilters {
            query: "anything".to_string(),
            semester: Some(3),
            sort_by: Some(SortKey::Popular),
            ..Default::default()
        };
        assert!(apply(&[], &filters).is_empty());
    }

    #[test]
    fn test_apply_is_deterministic() {
        let collection = sample_collection();
        let filters = SearchFilters {
            sort_by: Some(SortKey::Popular),
            ..Default::default()
        };

        let first: Vec<String> = apply(&collection, &filters)
            .into_iter()
            .map(|r| r.id)
            .collect();
        let second: Vec<String> = apply(&collection, &filters)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let collection = sample_collection();
        let ids_before: Vec<String> = collection.iter().map(|r| r.id.clone()).collect();

        let _ = apply(
            &collection,
            &SearchFilters {
                sort_by: Some(SortKey::Popular),
                ..Default::default()
            },
        );

        let ids_after: Vec<String> = collection.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids_before, ids_after);
    }
}
