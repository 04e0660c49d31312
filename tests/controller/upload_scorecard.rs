//! Tests for the upload_scorecard endpoint.

use super::*;

/// Expect 200 OK with record counts for a complete scorecard
#[tokio::test]
async fn ingests_uploaded_scorecard() -> Result<(), TestError> {
    let test = test_setup_with_scorecard_tables!()?;
    let bytes = factory::nested_scorecard().into_bytes();

    let resp = send(test.router(), upload_request("file", &bytes)).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let summary: IngestSummaryDto = json_body(resp).await;
    assert_eq!(summary.matches, 1);
    assert_eq!(summary.teams, 2);
    assert_eq!(summary.players, 4);
    assert_eq!(summary.deliveries, 2);
    assert_eq!(summary.officials, 1);
    assert_eq!(summary.powerplays, 1);

    Ok(())
}

/// Expect 400 Bad Request for an empty file
#[tokio::test]
async fn rejects_empty_file() -> Result<(), TestError> {
    let test = test_setup_with_scorecard_tables!()?;

    let resp = send(test.router(), upload_request("file", b"")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 Bad Request when no `file` field is present
#[tokio::test]
async fn rejects_missing_file_field() -> Result<(), TestError> {
    let test = test_setup_with_scorecard_tables!()?;
    let bytes = factory::nested_scorecard().into_bytes();

    let resp = send(test.router(), upload_request("document", &bytes)).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 Bad Request carrying the parser diagnostic for malformed JSON
#[tokio::test]
async fn rejects_malformed_json() -> Result<(), TestError> {
    let test = test_setup_with_scorecard_tables!()?;

    let resp = send(test.router(), upload_request("file", b"{\"info\": [")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json_body(resp).await;
    assert!(error.error.contains("line 1"), "{}", error.error);

    Ok(())
}

/// Expect 413 Payload Too Large for a file above the upload limit
#[tokio::test]
async fn rejects_oversized_file() -> Result<(), TestError> {
    let test = test_setup_with_scorecard_tables!()?;
    let bytes = vec![b' '; TEST_MAX_UPLOAD_BYTES + 1];

    let resp = send(test.router(), upload_request("file", &bytes)).await;

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    Ok(())
}

/// Expect 422 Unprocessable Entity naming the field when match dates are missing
#[tokio::test]
async fn rejects_scorecard_without_dates() -> Result<(), TestError> {
    let test = test_setup_with_scorecard_tables!()?;
    let bytes = factory::nested_scorecard().without_info("dates").into_bytes();

    let resp = send(test.router(), upload_request("file", &bytes)).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorDto = json_body(resp).await;
    assert!(error.error.contains("info.dates"), "{}", error.error);

    Ok(())
}

/// Expect 500 Internal Server Error with a generic message when persistence fails
#[tokio::test]
async fn hides_persistence_errors() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::CricketMatch)?;
    let bytes = factory::nested_scorecard().into_bytes();

    let resp = send(test.router(), upload_request("file", &bytes)).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorDto = json_body(resp).await;
    assert_eq!(error.error, "Internal server error");

    Ok(())
}
