use super::*;
use crate::server::service::summary::MatchSummaryService;

/// Expect None for a match that was never ingested
#[tokio::test]
async fn returns_none_for_unknown_match() -> Result<(), TestError> {
    let test = test_setup_with_scorecard_tables!()?;

    let summary = MatchSummaryService::new(&test.db).get_summary(1).await;

    assert!(matches!(summary, Ok(None)));

    Ok(())
}
