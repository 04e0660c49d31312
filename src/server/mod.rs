//! Server application core modules.
//!
//! This module contains all server-side functionality for Scorebook: scorecard parsing and
//! extraction, database repositories, the ingestion service, HTTP routing, configuration
//! and logging.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod logging;
pub mod model;
pub mod router;
pub mod scorecard;
pub mod service;
pub mod startup;
