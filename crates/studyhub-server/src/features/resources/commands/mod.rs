//! Write operations for the resource catalog

pub mod comment;
pub mod download;
pub mod rate;
pub mod upload;

pub use comment::{AddCommentCommand, AddCommentError};
pub use download::{DownloadResourceCommand, DownloadResourceError};
pub use rate::{RateResourceCommand, RateResourceError};
pub use upload::{UploadResourceCommand, UploadResourceError};
