//! Filter specification and query-string codec
//!
//! [`SearchFilters`] is the filter specification applied by the search
//! engine. This module also owns the bidirectional mapping between a
//! specification and a URL query string: [`SearchFilters::decode`] parses
//! the raw query string of a listing request, and [`SearchFilters::encode`]
//! produces the canonical, shareable query string for the applied filter.
//!
//! Recognized parameters: `query`, `semester`, `subject`, `fileType`,
//! `tags` (comma-joined), `sortBy`. Unrecognized parameters are ignored.

use serde::{Deserialize, Serialize};
use studyhub_common::types::{FileType, SortKey};
use url::form_urlencoded;

/// Errors produced while decoding a filter query string
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterParseError {
    /// Semester is not an integer or is less than 1
    #[error("Semester must be an integer greater than 0, got '{0}'")]
    InvalidSemester(String),
    /// File type is not one of pdf, doc, ppt, image, video, other
    #[error("Invalid file type '{0}'")]
    InvalidFileType(String),
    /// Sort key is not one of recent, popular, topRated
    #[error("Invalid sort key '{0}'")]
    InvalidSortKey(String),
}

/// A filter specification for the resource catalog
///
/// Absent or empty fields impose no constraint. `semester` is optional
/// rather than using a zero sentinel; a wire value of `semester=0` is a
/// decode error. `sort_by: None` means "do not reorder", which is never
/// produced by [`decode`](Self::decode) (a missing `sortBy` defaults to
/// [`SortKey::Recent`]) but remains part of the engine contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            query: String::new(),
            semester: None,
            subject: None,
            file_type: None,
            tags: Vec::new(),
            sort_by: Some(SortKey::Recent),
        }
    }
}

impl SearchFilters {
    /// True when every field is empty/absent (ignoring the sort key)
    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty()
            && self.semester.is_none()
            && self.subject.is_none()
            && self.file_type.is_none()
            && self.tags.is_empty()
    }

    /// Decode a filter specification from a URL query string
    ///
    /// Empty parameter values are treated as absent. A missing `sortBy`
    /// defaults to `recent`.
    pub fn decode(query_string: &str) -> Result<Self, FilterParseError> {
        let mut filters = Self::default();

        for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "query" => filters.query = value.into_owned(),
                "semester" => {
                    let semester: i32 = value
                        .parse()
                        .map_err(|_| FilterParseError::InvalidSemester(value.to_string()))?;
                    if semester < 1 {
                        return Err(FilterParseError::InvalidSemester(value.to_string()));
                    }
                    filters.semester = Some(semester);
                },
                "subject" => filters.subject = Some(value.into_owned()),
                "fileType" => {
                    let file_type = value
                        .parse()
                        .map_err(|_| FilterParseError::InvalidFileType(value.to_string()))?;
                    filters.file_type = Some(file_type);
                },
                "tags" => {
                    filters.tags = value
                        .split(',')
                        .filter(|t| !t.is_empty())
                        .map(|t| t.to_string())
                        .collect();
                },
                "sortBy" => {
                    let sort_by = value
                        .parse()
                        .map_err(|_| FilterParseError::InvalidSortKey(value.to_string()))?;
                    filters.sort_by = Some(sort_by);
                },
                _ => {},
            }
        }

        Ok(filters)
    }

    /// Encode the canonical query string for this specification
    ///
    /// Empty and default fields are omitted, including `sortBy=recent`,
    /// so `decode(encode(f)) == f` holds for any filter produced by
    /// [`decode`](Self::decode).
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if !self.query.is_empty() {
            serializer.append_pair("query", &self.query);
        }
        if let Some(semester) = self.semester {
            serializer.append_pair("semester", &semester.to_string());
        }
        if let Some(ref subject) = self.subject {
            serializer.append_pair("subject", subject);
        }
        if let Some(file_type) = self.file_type {
            serializer.append_pair("fileType", &file_type.to_string());
        }
        if !self.tags.is_empty() {
            serializer.append_pair("tags", &self.tags.join(","));
        }
        if let Some(sort_by) = self.sort_by {
            if sort_by != SortKey::Recent {
                serializer.append_pair("sortBy", &sort_by.to_string());
            }
        }

        serializer.finish()
    }
}
