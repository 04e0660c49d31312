/// Upload limit used by tests exercising the ingestion service and upload endpoint.
pub const TEST_MAX_UPLOAD_BYTES: usize = 64 * 1024;

pub const TEST_MATCH_DATE: &str = "2023-10-14";
pub const TEST_CITY: &str = "Ahmedabad";
pub const TEST_EVENT_NAME: &str = "ICC Cricket World Cup";
