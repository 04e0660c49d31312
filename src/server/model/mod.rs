//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases and the in-memory records extracted from scorecards before
//! they are persisted.

pub mod app;
pub mod db;
pub mod scorecard;
