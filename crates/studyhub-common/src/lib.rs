//! StudyHub Common Library
//!
//! Shared types, utilities, and error handling for the StudyHub project.
//!
//! # Overview
//!
//! This crate provides common functionality used across all StudyHub
//! workspace members:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Logging**: Centralized tracing configuration and initialization
//! - **Types**: Shared domain types (resources, subjects, users)
//!
//! # Example
//!
//! ```no_run
//! use studyhub_common::logging::{init_logging, LogConfig};
//! use tracing::info;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     info!("Application started");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{Result, StudyHubError};
