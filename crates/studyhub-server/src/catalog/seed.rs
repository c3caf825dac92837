//! Static seed dataset
//!
//! The catalog is seeded once at startup with a small set of subjects,
//! resources, and sample comments. Resources are listed newest first to
//! match the store's ordering invariant.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use studyhub_common::types::{Comment, FileType, Resource, Subject};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0)
        .single()
        .unwrap_or_default()
}

fn avatar(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=random",
        name.replace(' ', "+")
    )
}

/// The static subject catalog
pub fn subjects() -> Vec<Subject> {
    let entries = [
        ("s1", "Data Structures & Algorithms", "CS201", 3, "Computer Science", 2),
        ("s2", "Linear Algebra", "MA102", 2, "Mathematics", 1),
        ("s3", "Mechanics", "PH101", 1, "Physics", 1),
        ("s4", "Operating Systems", "CS305", 5, "Computer Science", 2),
        ("s5", "Signals and Systems", "EE204", 4, "Electrical Engineering", 1),
        ("s6", "Technical Communication", "HS103", 1, "Humanities", 1),
    ];

    entries
        .into_iter()
        .map(|(id, name, code, semester, department, resource_count)| Subject {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            semester,
            department: department.to_string(),
            resource_count,
        })
        .collect()
}

/// The seed resource collection, newest first
pub fn resources() -> Vec<Resource> {
    struct Seed {
        id: &'static str,
        title: &'static str,
        description: &'static str,
        subject_id: &'static str,
        subject: &'static str,
        semester: i32,
        file_type: FileType,
        tags: &'static [&'static str],
        upload_date: DateTime<Utc>,
        uploader_id: &'static str,
        uploader_name: &'static str,
        rating: f64,
        download_count: i64,
        view_count: i64,
    }

    let seeds = [
        Seed {
            id: "r8",
            title: "Operating Systems Final Exam Paper 2024",
            description: "Scanned final exam paper with marking scheme for the OS course.",
            subject_id: "s4",
            subject: "Operating Systems",
            semester: 5,
            file_type: FileType::Pdf,
            tags: &["final", "question-paper"],
            upload_date: date(2024, 6, 10),
            uploader_id: "u3",
            uploader_name: "Priya Sharma",
            rating: 4.8,
            download_count: 2,
            view_count: 15,
        },
        Seed {
            id: "r7",
            title: "Process Scheduling Lecture Recording",
            description: "Full lecture on CPU scheduling policies: FCFS, SJF, round robin.",
            subject_id: "s4",
            subject: "Operating Systems",
            semester: 5,
            file_type: FileType::Video,
            tags: &["lecture"],
            upload_date: date(2024, 5, 28),
            uploader_id: "u2",
            uploader_name: "Arjun Mehta",
            rating: 4.1,
            download_count: 19,
            view_count: 112,
        },
        Seed {
            id: "r6",
            title: "Signals and Systems Lab Manual",
            description: "Complete lab manual with all eight experiments and viva questions.",
            subject_id: "s5",
            subject: "Signals and Systems",
            semester: 4,
            file_type: FileType::Doc,
            tags: &["lab", "manual"],
            upload_date: date(2024, 5, 2),
            uploader_id: "u4",
            uploader_name: "Sneha Iyer",
            rating: 3.9,
            download_count: 34,
            view_count: 96,
        },
        Seed {
            id: "r5",
            title: "Linear Algebra Cheat Sheet",
            description: "One-page summary of eigenvalues, diagonalization, and vector spaces.",
            subject_id: "s2",
            subject: "Linear Algebra",
            semester: 2,
            file_type: FileType::Image,
            tags: &["cheat-sheet", "exam-prep"],
            upload_date: date(2024, 3, 15),
            uploader_id: "u2",
            uploader_name: "Arjun Mehta",
            rating: 4.6,
            download_count: 87,
            view_count: 240,
        },
        Seed {
            id: "r4",
            title: "Mechanics Problem Set Solutions",
            description: "Worked solutions for problem sets 1 through 5, with free-body diagrams.",
            subject_id: "s3",
            subject: "Mechanics",
            semester: 1,
            file_type: FileType::Pdf,
            tags: &["solutions", "problem-set"],
            upload_date: date(2024, 2, 20),
            uploader_id: "u5",
            uploader_name: "Rohan Gupta",
            rating: 4.0,
            download_count: 41,
            view_count: 130,
        },
        Seed {
            id: "r3",
            title: "Technical Report Writing Template",
            description: "Word template following the department's report formatting rules.",
            subject_id: "s6",
            subject: "Technical Communication",
            semester: 1,
            file_type: FileType::Doc,
            tags: &["template"],
            upload_date: date(2024, 2, 5),
            uploader_id: "u4",
            uploader_name: "Sneha Iyer",
            rating: 3.5,
            download_count: 12,
            view_count: 44,
        },
        Seed {
            id: "r2",
            title: "Graph Algorithms Slides",
            description: "Lecture slides covering BFS, DFS, shortest paths, and spanning trees.",
            subject_id: "s1",
            subject: "Data Structures & Algorithms",
            semester: 3,
            file_type: FileType::Ppt,
            tags: &["slides", "graphs"],
            upload_date: date(2024, 1, 18),
            uploader_id: "u3",
            uploader_name: "Priya Sharma",
            rating: 4.4,
            download_count: 56,
            view_count: 210,
        },
        Seed {
            id: "r1",
            title: "Data Structures Midterm Notes",
            description: "Handwritten notes for the midterm: trees, heaps, and hash tables.",
            subject_id: "s1",
            subject: "Data Structures & Algorithms",
            semester: 3,
            file_type: FileType::Pdf,
            tags: &["midterm", "notes"],
            upload_date: date(2024, 1, 1),
            uploader_id: "u1",
            uploader_name: "Rajat Kumar",
            rating: 4.2,
            download_count: 10,
            view_count: 58,
        },
    ];

    seeds
        .into_iter()
        .map(|s| Resource {
            id: s.id.to_string(),
            title: s.title.to_string(),
            description: s.description.to_string(),
            subject_id: s.subject_id.to_string(),
            subject: s.subject.to_string(),
            semester: s.semester,
            file_type: s.file_type,
            file_url: "#".to_string(),
            thumbnail_url: Some(
                "https://images.unsplash.com/photo-1516116216624-53e697fedbea?q=80&w=2128&auto=format&fit=crop"
                    .to_string(),
            ),
            tags: s.tags.iter().map(|t| t.to_string()).collect(),
            upload_date: s.upload_date,
            uploader_id: s.uploader_id.to_string(),
            uploader_name: s.uploader_name.to_string(),
            rating: s.rating,
            download_count: s.download_count,
            view_count: s.view_count,
        })
        .collect()
}

/// Sample comments, keyed by resource id
pub fn comments() -> HashMap<String, Vec<Comment>> {
    let mut map = HashMap::new();

    map.insert(
        "r1".to_string(),
        vec![
            Comment {
                id: "c1".to_string(),
                resource_id: "r1".to_string(),
                user_id: "u1".to_string(),
                user_name: "Rajat Kumar".to_string(),
                user_avatar: Some(avatar("Rajat Kumar")),
                content: "These notes covered everything on the midterm. Thanks for sharing!"
                    .to_string(),
                created_at: date(2024, 1, 12),
                rating: Some(5),
            },
            Comment {
                id: "c2".to_string(),
                resource_id: "r1".to_string(),
                user_id: "u6".to_string(),
                user_name: "Anika Singh".to_string(),
                user_avatar: Some(avatar("Anika Singh")),
                content: "Very readable handwriting. The heap section could use more examples."
                    .to_string(),
                created_at: date(2024, 1, 20),
                rating: Some(4),
            },
        ],
    );

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resources_are_newest_first() {
        let seeded = resources();
        for pair in seeded.windows(2) {
            assert!(pair[0].upload_date >= pair[1].upload_date);
        }
    }

    #[test]
    fn test_resource_subjects_exist() {
        let subject_ids: Vec<String> = subjects().into_iter().map(|s| s.id).collect();
        for resource in resources() {
            assert!(
                subject_ids.contains(&resource.subject_id),
                "resource {} references unknown subject {}",
                resource.id,
                resource.subject_id
            );
        }
    }

    #[test]
    fn test_resource_counts_match() {
        let seeded = resources();
        for subject in subjects() {
            let actual = seeded.iter().filter(|r| r.subject_id == subject.id).count() as i64;
            assert_eq!(
                subject.resource_count, actual,
                "subject {} count mismatch",
                subject.id
            );
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let mut ids: Vec<String> = resources().into_iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), resources().len());
    }
}
