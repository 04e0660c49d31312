//! Tests for the get_match_summary endpoint.

use axum::{body::Body, http::Request};

use super::*;

fn summary_request(match_id: i32) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/matches/{}", match_id))
        .body(Body::empty())
        .unwrap()
}

/// Expect the counts of an uploaded scorecard to be read back
#[tokio::test]
async fn returns_summary_of_uploaded_match() -> Result<(), TestError> {
    let test = test_setup_with_scorecard_tables!()?;
    let bytes = factory::flat_scorecard().into_bytes();

    let uploaded: IngestSummaryDto =
        json_body(send(test.router(), upload_request("file", &bytes)).await).await;

    let resp = send(test.router(), summary_request(uploaded.match_id)).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let summary: IngestSummaryDto = json_body(resp).await;
    assert_eq!(summary, uploaded);

    Ok(())
}

/// Expect 404 Not Found for an unknown match
#[tokio::test]
async fn returns_not_found_for_unknown_match() -> Result<(), TestError> {
    let test = test_setup_with_scorecard_tables!()?;

    let resp = send(test.router(), summary_request(404)).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
