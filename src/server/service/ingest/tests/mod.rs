mod get_summary;

use sea_orm::{EntityTrait, PaginatorTrait};
use scorebook_test_utils::prelude::*;

use crate::server::{
    error::ingest::{IngestError, IngestErrorKind},
    model::app::IngestSettings,
    scorecard::FieldRules,
    service::ingest::{IngestService, IngestSummary},
};

fn settings() -> IngestSettings {
    IngestSettings {
        max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        rules: FieldRules::default(),
    }
}
