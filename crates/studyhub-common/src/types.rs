//! Common domain types used across StudyHub
//!
//! JSON field names are camelCase to match the catalog's public data model
//! (`subjectId`, `fileType`, `uploadDate`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File type of an uploaded resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Doc,
    Ppt,
    Image,
    Video,
    Other,
}

impl FileType {
    /// Detect a file type from a file name's extension
    ///
    /// Unknown extensions map to [`FileType::Other`].
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        let ext = lower.rsplit('.').next().unwrap_or("");
        match ext {
            "pdf" => FileType::Pdf,
            "doc" | "docx" => FileType::Doc,
            "ppt" | "pptx" => FileType::Ppt,
            "jpg" | "jpeg" | "png" | "gif" => FileType::Image,
            "mp4" | "avi" | "mov" => FileType::Video,
            _ => FileType::Other,
        }
    }
}

impl std::str::FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(FileType::Pdf),
            "doc" => Ok(FileType::Doc),
            "ppt" => Ok(FileType::Ppt),
            "image" => Ok(FileType::Image),
            "video" => Ok(FileType::Video),
            "other" => Ok(FileType::Other),
            _ => Err(format!("Invalid file type: {}", s)),
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FileType::Pdf => "pdf",
            FileType::Doc => "doc",
            FileType::Ppt => "ppt",
            FileType::Image => "image",
            FileType::Video => "video",
            FileType::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// Sort order for catalog listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Newest upload first
    #[default]
    Recent,
    /// Most downloaded first
    Popular,
    /// Highest rated first
    TopRated,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(SortKey::Recent),
            "popular" => Ok(SortKey::Popular),
            "topRated" => Ok(SortKey::TopRated),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SortKey::Recent => "recent",
            SortKey::Popular => "popular",
            SortKey::TopRated => "topRated",
        };
        write!(f, "{}", s)
    }
}

/// A study resource in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Unique id, assigned sequentially at insertion (`r1`, `r2`, ...)
    pub id: String,
    pub title: String,
    pub description: String,
    /// Foreign key into the subject catalog
    pub subject_id: String,
    /// Denormalized subject display name
    pub subject: String,
    pub semester: i32,
    pub file_type: FileType,
    /// Opaque reference; not a real asset in this system
    pub file_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub tags: Vec<String>,
    pub upload_date: DateTime<Utc>,
    pub uploader_id: String,
    pub uploader_name: String,
    pub rating: f64,
    pub download_count: i64,
    pub view_count: i64,
}

/// A resource draft without the store-generated fields
///
/// The store assigns `id` and zeroes `rating`, `download_count`, and
/// `view_count` on insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    pub title: String,
    pub description: String,
    pub subject_id: String,
    pub subject: String,
    pub semester: i32,
    pub file_type: FileType,
    pub file_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub tags: Vec<String>,
    pub upload_date: DateTime<Utc>,
    pub uploader_id: String,
    pub uploader_name: String,
}

/// A subject in the static reference catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub code: String,
    pub semester: i32,
    pub department: String,
    pub resource_count: i64,
}

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<i32>,
}

/// A comment on a resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub resource_id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}
