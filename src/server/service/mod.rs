//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that coordinates scorecard parsing, extraction
//! and the repositories: ingesting uploaded documents and reading back stored matches.

pub mod ingest;
pub mod summary;
