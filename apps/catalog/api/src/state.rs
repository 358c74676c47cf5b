//! Application state management.
//!
//! This module defines the shared application state passed to request
//! handlers. Cloning is cheap: the MongoDB handles are Arc-backed and
//! share one connection pool.

use database::mongodb::{Client, Database};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Pooled MongoDB client, used for readiness checks
    pub mongo: Client,
    /// Handle to the catalog database
    pub db: Database,
}
