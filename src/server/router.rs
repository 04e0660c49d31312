//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{extract::DefaultBodyLimit, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Allowance on top of the upload limit for multipart boundaries and part headers.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/matches/upload` - Upload and ingest a scorecard document
/// - `GET /api/matches/{match_id}` - Record counts of an ingested match
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Arguments
/// - `max_upload_bytes` - Largest accepted scorecard; the request body limit is derived from it
///
/// # Example
/// ```ignore
/// let router = routes(settings.max_upload_bytes).with_state(AppState::new(db, settings));
/// ```
pub fn routes(max_upload_bytes: usize) -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Scorebook", description = "Scorebook API"), tags(
        (name = controller::matches::MATCH_TAG, description = "Scorecard ingestion API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::matches::upload_scorecard))
        .routes(routes!(controller::matches::get_match_summary))
        .split_for_parts();

    routes
        .layer(DefaultBodyLimit::max(
            max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES),
        ))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
