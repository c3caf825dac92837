//! Session feature
//!
//! Mock OAuth login, logout, and the current-session lookup. The actual
//! session state lives in [`crate::session::SessionStore`]; this slice
//! only maps it onto HTTP.

pub mod commands;
pub mod queries;
pub mod routes;

pub use routes::session_routes;
