//! Read operations for the resource catalog

pub mod comments;
pub mod get;
pub mod list;

pub use comments::{ListCommentsError, ListCommentsQuery};
pub use get::{GetResourceError, GetResourceQuery};
pub use list::{ListResourcesError, ListResourcesQuery};
