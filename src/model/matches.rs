use serde::{Deserialize, Serialize};

use crate::server::service::ingest::IngestSummary;

/// Counts of the records persisted for a single ingested match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IngestSummaryDto {
    pub match_id: i32,
    pub matches: u64,
    pub teams: u64,
    pub players: u64,
    pub deliveries: u64,
    pub officials: u64,
    pub powerplays: u64,
}

impl From<IngestSummary> for IngestSummaryDto {
    fn from(summary: IngestSummary) -> Self {
        Self {
            match_id: summary.match_id,
            matches: summary.matches,
            teams: summary.teams,
            players: summary.players,
            deliveries: summary.deliveries,
            officials: summary.officials,
            powerplays: summary.powerplays,
        }
    }
}

/// Multipart form accepted by the scorecard upload endpoint
#[derive(utoipa::ToSchema)]
pub struct ScorecardUploadForm {
    /// Scorecard JSON document
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
