//! Read operations for the subject catalog

pub mod list;

pub use list::{ListSubjectsError, ListSubjectsQuery};
