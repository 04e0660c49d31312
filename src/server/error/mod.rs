//! Error types for the Scorebook server.
//!
//! This module provides the error handling system for the ingestion service, with
//! specialized error types for configuration and scorecard ingestion. All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error definitions.

pub mod config;
pub mod ingest;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, ingest::IngestError},
};

/// Main error type for the Scorebook server.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// error type. `#[from]` conversions allow propagation with the `?` operator, and the
/// `IntoResponse` implementation maps each error to an HTTP response for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Scorecard ingestion error (request, parse, validation, or persistence failure).
    #[error(transparent)]
    IngestError(#[from] IngestError),
    /// Database error outside of an ingestion unit of work.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Empty upload, missing file field, or malformed JSON
/// - 413 Payload Too Large - Upload exceeds the configured size limit
/// - 422 Unprocessable Entity - A required scorecard field is absent or malformed
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::IngestError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
