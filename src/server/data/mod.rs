//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, one repository per
//! stored scorecard entity.

pub mod cricket;
