//! Subject catalog feature
//!
//! The subject list is static seed data; the only operation is listing,
//! optionally narrowed to a single semester.

pub mod queries;
pub mod routes;

pub use routes::subjects_routes;
