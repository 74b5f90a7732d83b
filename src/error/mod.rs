//! Error types for the autobroker core.
//!
//! This module provides the error handling system for the lifecycle and identity core, with
//! specialized error types per domain (configuration, identifier allocation, lifecycle
//! transitions, linkage and maintenance tooling). All errors use `thiserror` for ergonomic
//! definitions and convert into [`Error`] through `#[from]` so services can use `?` throughout.

pub mod config;
pub mod identifier;
pub mod lifecycle;
pub mod linkage;
pub mod maintenance;

use thiserror::Error;

use crate::error::{
    config::ConfigError, identifier::IdentifierError, lifecycle::LifecycleError,
    linkage::LinkageError, maintenance::MaintenanceError,
};

/// Main error type for the autobroker core.
///
/// Lookups that find nothing are not errors: services return `Ok(None)` and leave the
/// not-found handling to the caller.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Identifier allocation errors (retry budget exhausted)
/// - Lifecycle errors (transition not allowed from the current state)
/// - Linkage errors (candidate/listing link invariants)
/// - Maintenance errors (link/move tool validation)
/// - Database errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Public identifier allocation failed.
    #[error(transparent)]
    IdentifierError(#[from] IdentifierError),
    /// Lifecycle transition rejected.
    #[error(transparent)]
    LifecycleError(#[from] LifecycleError),
    /// Candidate/listing link rejected.
    #[error(transparent)]
    LinkageError(#[from] LinkageError),
    /// Maintenance tool validation failed.
    #[error(transparent)]
    MaintenanceError(#[from] MaintenanceError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in autobroker's code.
    ///
    /// This error should never occur in normal operation and indicates a programming error
    /// or a broken storage constraint.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
