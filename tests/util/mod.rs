//! Test utilities for creating AppState and HTTP requests against the router

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request},
    response::Response,
    Router,
};
use scorebook::server::{
    model::app::{AppState, IngestSettings},
    router,
    scorecard::FieldRules,
};
use scorebook_test_utils::{constant::TEST_MAX_UPLOAD_BYTES, TestContext};
use tower::ServiceExt;

const BOUNDARY: &str = "scorebook-test-boundary";

/// Extension trait for TestContext to create the application router
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
    fn router(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState::new(
            self.db.clone(),
            IngestSettings {
                max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
                rules: FieldRules::default(),
            },
        )
    }

    fn router(&self) -> Router {
        router::routes(TEST_MAX_UPLOAD_BYTES).with_state(self.into_app_state())
    }
}

/// Builds a multipart upload request carrying `content` in a field named `field`
pub fn upload_request(field: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"scorecard.json\"\r\nContent-Type: application/json\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/api/matches/upload")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Sends a request through the router and returns the response
pub async fn send(router: Router, request: Request<Body>) -> Response {
    router.oneshot(request).await.unwrap()
}

/// Reads a response body as JSON
pub async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
