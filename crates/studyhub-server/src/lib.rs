//! StudyHub Server Library
//!
//! HTTP server for a university study-resource catalog.
//!
//! # Overview
//!
//! The StudyHub server provides a REST API for browsing, uploading, and
//! rating study resources:
//!
//! - **Catalog**: In-memory resource store, seeded at startup, with a pure
//!   filter/sort engine and a bidirectional query-string codec for
//!   shareable filter links
//! - **Sessions**: Mock OAuth login with simulated latency, persisted to a
//!   file-backed key-value store
//! - **Configuration**: Environment-based configuration management
//! - **Middleware**: CORS, request tracing, and response compression
//!
//! # Architecture
//!
//! Features follow a command/query split. Each feature is a vertical slice
//! with its own `commands/`, `queries/`, and `routes.rs`:
//!
//! - **Commands** (write operations): upload a resource, log in, log out,
//!   post a comment
//! - **Queries** (read operations): list/filter resources, get a resource,
//!   list subjects, read the current session
//!
//! All catalog state lives in [`catalog::CatalogStore`], owned by the
//! composition root and injected into handlers through
//! [`features::FeatureState`] — there is no global singleton.
//!
//! # Example
//!
//! ```no_run
//! use studyhub_server::{config::Config, serve};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod session;

// Re-export commonly used types
pub use api::{create_router, serve};
pub use error::{AppError, AppResult};
