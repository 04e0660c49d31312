//! Errors raised while ingesting a scorecard upload.
//!
//! Every failure maps onto one of four classes: a bad request (nothing was read), a parse
//! failure (the upload is not well-formed JSON), a validation failure (a required field is
//! absent or malformed), or a persistence failure (the store rejected a write). Only
//! persistence failures are reported to the client as server errors.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Classification of an [`IngestError`] used to pick the caller-facing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestErrorKind {
    /// Nothing usable was uploaded
    Request,
    /// The upload is not well-formed JSON
    Parse,
    /// A required field is absent or malformed
    Validation,
    /// The store rejected a write
    Persistence,
}

/// Failure of a single scorecard upload.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Uploaded scorecard file is empty")]
    /// The uploaded file has no content.
    EmptyUpload,
    #[error("Upload is missing the `file` form field")]
    /// The multipart request carries no `file` field.
    MissingFile,
    #[error("Uploaded scorecard of {size} bytes exceeds the limit of {limit} bytes")]
    /// The uploaded file exceeds the configured limit.
    UploadTooLarge {
        /// Size of the upload in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },
    #[error("Failed to read multipart upload: {0}")]
    /// The multipart body could not be read.
    Multipart(#[from] MultipartError),
    #[error("Failed to parse scorecard JSON: {0}")]
    /// The upload is not well-formed JSON.
    Parse(#[from] serde_json::Error),
    #[error("Invalid scorecard field `{field}`: {reason}")]
    /// A required field is absent or malformed.
    Validation {
        /// Path of the offending field, including array indexes
        field: String,
        /// What is wrong with the field
        reason: String,
    },
    #[error("Failed to persist scorecard: {0}")]
    /// A write to the store failed and the upload was rolled back.
    Persistence(#[from] sea_orm::DbErr),
}

impl IngestError {
    /// Builds a validation error for the field at `field`.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Failure class of this error.
    pub fn kind(&self) -> IngestErrorKind {
        match self {
            Self::EmptyUpload
            | Self::MissingFile
            | Self::UploadTooLarge { .. }
            | Self::Multipart(_) => IngestErrorKind::Request,
            Self::Parse(_) => IngestErrorKind::Parse,
            Self::Validation { .. } => IngestErrorKind::Validation,
            Self::Persistence(_) => IngestErrorKind::Persistence,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::UploadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Multipart(err) => err.status(),
            Self::EmptyUpload | Self::MissingFile | Self::Parse(_) => StatusCode::BAD_REQUEST,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        if self.kind() == IngestErrorKind::Persistence {
            return InternalServerError(self).into_response();
        }

        tracing::debug!("Rejected scorecard upload: {}", self);

        (
            self.status(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::{IngestError, IngestErrorKind};

    /// Expect empty uploads to be classified as request errors with a 400 response
    #[test]
    fn empty_upload_is_bad_request() {
        let err = IngestError::EmptyUpload;

        assert_eq!(err.kind(), IngestErrorKind::Request);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    /// Expect oversized uploads to be rejected with 413
    #[test]
    fn oversized_upload_is_payload_too_large() {
        let err = IngestError::UploadTooLarge {
            size: 2048,
            limit: 1024,
        };

        assert_eq!(err.kind(), IngestErrorKind::Request);
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    /// Expect malformed JSON to carry the parser diagnostic and map to 400
    #[test]
    fn parse_error_keeps_diagnostic() {
        let parse_err = serde_json::from_slice::<serde_json::Value>(b"{\"info\":").unwrap_err();
        let err = IngestError::from(parse_err);

        assert_eq!(err.kind(), IngestErrorKind::Parse);
        assert!(err.to_string().contains("EOF"), "message: {}", err);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    /// Expect validation errors to name the offending field and map to 422
    #[test]
    fn validation_error_names_field() {
        let err = IngestError::validation("info.dates", "at least one match date is required");

        assert_eq!(err.kind(), IngestErrorKind::Validation);
        assert!(err.to_string().contains("info.dates"));
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    /// Expect store failures to surface as 500 without leaking details
    #[test]
    fn persistence_error_is_internal() {
        let err = IngestError::from(sea_orm::DbErr::Custom("constraint violated".to_string()));

        assert_eq!(err.kind(), IngestErrorKind::Persistence);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
