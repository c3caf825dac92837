//! Feature modules implementing the StudyHub API
//!
//! Each feature is a vertical slice with its own commands, queries, and
//! routes:
//!
//! - **resources**: catalog listing/filtering, resource detail, mock
//!   upload, and the session-gated download/rate/comment actions
//! - **subjects**: the static subject catalog
//! - **session**: mock OAuth login, logout, and current-session lookup
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `commands/` - Write operations (upload, login, logout, comment)
//! - `queries/` - Read operations (list, get, current)
//! - `routes.rs` - HTTP route definitions
//!
//! Commands and queries expose a `handle` function with its own error
//! enum; `routes.rs` maps those errors onto HTTP responses.

pub mod resources;
pub mod session;
pub mod subjects;

use axum::Router;

use crate::catalog::CatalogStore;
use crate::config::MockConfig;
use crate::session::SessionStore;

/// Shared state for all feature routes
///
/// Owned by the composition root and cloned into each handler; there is
/// no global singleton.
#[derive(Clone)]
pub struct FeatureState {
    /// In-memory resource and subject catalog
    pub catalog: CatalogStore,
    /// Process-wide session state
    pub session: SessionStore,
    /// Simulated-latency settings for the mock login and upload flows
    pub mock: MockConfig,
}

/// Creates the main API router with all feature routes mounted
///
/// Each feature is mounted under its own path prefix:
/// - `/resources` - Catalog operations
/// - `/subjects` - Subject catalog
/// - `/session` - Authentication
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest("/resources", resources::resources_routes())
        .nest("/subjects", subjects::subjects_routes())
        .nest("/session", session::session_routes())
        .with_state(state)
}
