//! Resource catalog feature
//!
//! Listing with combined filtering/sorting, resource detail, the mock
//! upload flow, and the session-gated download/rate/comment actions.

pub mod commands;
pub mod queries;
pub mod routes;

pub use routes::resources_routes;
