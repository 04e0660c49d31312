//! Scorecard upload and match summary endpoints.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::debug;

use crate::{
    model::{
        api::ErrorDto,
        matches::{IngestSummaryDto, ScorecardUploadForm},
    },
    server::{
        error::{ingest::IngestError, Error},
        model::app::AppState,
        service::{ingest::IngestService, summary::MatchSummaryService},
    },
};

/// OpenAPI tag grouping the match endpoints.
pub static MATCH_TAG: &str = "match";

/// Name of the multipart field carrying the scorecard document.
pub const UPLOAD_FIELD: &str = "file";

/// Upload a cricket scorecard JSON document
///
/// Persists the match with its teams, players, deliveries, officials and powerplays in a
/// single transaction and returns the number of records stored per entity type.
#[utoipa::path(
    post,
    path = "/api/matches/upload",
    tag = MATCH_TAG,
    request_body(content = ScorecardUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Scorecard ingested", body = IngestSummaryDto),
        (status = 400, description = "Missing or empty file, or malformed JSON", body = ErrorDto),
        (status = 413, description = "Uploaded file is too large", body = ErrorDto),
        (status = 422, description = "Required scorecard field missing or invalid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_scorecard(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let mut file = None;

    while let Some(field) = multipart.next_field().await.map_err(IngestError::from)? {
        if field.name() != Some(UPLOAD_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        file = Some(field.bytes().await.map_err(IngestError::from)?);
        break;
    }

    let bytes = file.ok_or(IngestError::MissingFile)?;

    let ingest_service = IngestService::new(&state.db, &state.settings);
    let summary = ingest_service.ingest(&bytes).await?;

    Ok((StatusCode::OK, Json(IngestSummaryDto::from(summary))))
}

/// Get the number of records stored for an ingested match
#[utoipa::path(
    get,
    path = "/api/matches/{match_id}",
    tag = MATCH_TAG,
    params(
        ("match_id" = i32, Path, description = "Identifier of the ingested match")
    ),
    responses(
        (status = 200, description = "Stored record counts for the match", body = IngestSummaryDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match_summary(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let summary_service = MatchSummaryService::new(&state.db);

    match summary_service.get_summary(match_id).await? {
        Some(summary) => {
            Ok((StatusCode::OK, Json(IngestSummaryDto::from(summary))).into_response())
        }
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Match not found".to_string(),
            }),
        )
            .into_response()),
    }
}
