//! Application state and ingestion settings.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::scorecard::rules::FieldRules;

/// Default upload limit of 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Settings governing how uploaded scorecards are accepted and read.
#[derive(Debug, Clone)]
pub struct IngestSettings {
    /// Largest accepted upload in bytes
    pub max_upload_bytes: usize,
    /// Defaulting and required-field rules applied during extraction
    pub rules: FieldRules,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            rules: FieldRules::default(),
        }
    }
}

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool of the relational store
    pub db: DatabaseConnection,
    /// Upload and extraction settings shared across requests
    pub settings: Arc<IngestSettings>,
}

impl AppState {
    /// Creates the application state from a connection and ingestion settings.
    pub fn new(db: DatabaseConnection, settings: IngestSettings) -> Self {
        Self {
            db,
            settings: Arc::new(settings),
        }
    }
}
