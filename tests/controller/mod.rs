//! Tests for HTTP controller endpoints.
//!
//! These tests drive the full router, so request extraction, body limits, service calls and
//! error responses are exercised together.

mod get_match_summary;
mod upload_scorecard;

use axum::http::StatusCode;
use scorebook::model::{api::ErrorDto, matches::IngestSummaryDto};
use scorebook_test_utils::prelude::*;

use crate::util::{json_body, send, upload_request, TestContextExt};
