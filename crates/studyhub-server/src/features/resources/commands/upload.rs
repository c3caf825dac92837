//! Upload resource command
//!
//! The mock upload flow: validate the submission, sleep for the simulated
//! transfer delay, then insert the draft at the front of the catalog. No
//! file bytes are stored; the resulting resource carries a placeholder
//! file URL.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use studyhub_common::types::{FileType, NewResource, Resource, User};

use crate::catalog::CatalogStore;

/// Tags applied when the submission carries none
const DEFAULT_TAGS: [&str; 2] = ["new", "upload"];

/// Command to upload a new resource
///
/// `file_type` wins over `file_name` when both are present; when only a
/// file name is given, the type is sniffed from its extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResourceCommand {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subject_id: String,
    pub semester: Option<i32>,
    pub file_type: Option<FileType>,
    pub file_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Errors that can occur when uploading a resource
#[derive(Debug, thiserror::Error)]
pub enum UploadResourceError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Description is required")]
    DescriptionRequired,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Semester is required")]
    SemesterRequired,
    #[error("Invalid semester: {0}")]
    InvalidSemester(i32),
    #[error("File type is required when no file name is given")]
    FileTypeRequired,
    #[error("Subject not found: {0}")]
    SubjectNotFound(String),
}

/// Handles the upload resource command
///
/// `user` is the authenticated uploader if any; anonymous uploads are
/// attributed to a fixed placeholder identity.
#[tracing::instrument(skip(catalog, command, user), fields(title = %command.title))]
pub async fn handle(
    catalog: CatalogStore,
    command: UploadResourceCommand,
    user: Option<User>,
    delay: Duration,
) -> Result<Resource, UploadResourceError> {
    let draft = validate(&catalog, command, user)?;

    // Simulated file transfer; a real storage backend would slot in here
    tokio::time::sleep(delay).await;

    let resource = catalog.add(draft).await;
    tracing::info!(resource_id = %resource.id, "Resource uploaded");

    Ok(resource)
}

fn validate(
    catalog: &CatalogStore,
    command: UploadResourceCommand,
    user: Option<User>,
) -> Result<NewResource, UploadResourceError> {
    if command.title.trim().is_empty() {
        return Err(UploadResourceError::TitleRequired);
    }
    if command.description.trim().is_empty() {
        return Err(UploadResourceError::DescriptionRequired);
    }
    if command.subject_id.trim().is_empty() {
        return Err(UploadResourceError::SubjectRequired);
    }

    let semester = command.semester.ok_or(UploadResourceError::SemesterRequired)?;
    if semester < 1 {
        return Err(UploadResourceError::InvalidSemester(semester));
    }

    let subject = catalog
        .subject(&command.subject_id)
        .ok_or_else(|| UploadResourceError::SubjectNotFound(command.subject_id.clone()))?;

    let file_type = match (command.file_type, command.file_name.as_deref()) {
        (Some(explicit), _) => explicit,
        (None, Some(name)) => FileType::from_file_name(name),
        (None, None) => return Err(UploadResourceError::FileTypeRequired),
    };

    let tags = if command.tags.is_empty() {
        DEFAULT_TAGS.iter().map(|t| t.to_string()).collect()
    } else {
        command.tags
    };

    let (uploader_id, uploader_name) = match user {
        Some(u) => (u.id, u.name),
        None => ("current-user".to_string(), "Current User".to_string()),
    };

    Ok(NewResource {
        title: command.title,
        description: command.description,
        subject_id: command.subject_id,
        subject: subject.name.clone(),
        semester,
        file_type,
        file_url: "#".to_string(),
        thumbnail_url: None,
        tags,
        upload_date: Utc::now(),
        uploader_id,
        uploader_name,
    })
}
