//! HTTP controller endpoints for the Scorebook web API.
//!
//! This module contains Axum handlers for uploading scorecards and reading back ingested
//! matches. Controllers extract request data, hand it to services, and return appropriate
//! HTTP responses. They use utoipa for OpenAPI documentation.

pub mod matches;
