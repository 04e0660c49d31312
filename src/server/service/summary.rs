//! Stored record counts of an ingested match.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::cricket::{
        cricket_match::MatchRepository, delivery::DeliveryRepository,
        official::OfficialRepository, player::PlayerRepository, powerplay::PowerplayRepository,
        team::TeamRepository,
    },
    error::Error,
    model::db::MatchModel,
    service::ingest::IngestSummary,
};

/// Service reading back what was stored for an ingested match.
pub struct MatchSummaryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchSummaryService<'a> {
    /// Creates a new instance of MatchSummaryService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts the rows stored for a match per entity type.
    ///
    /// # Arguments
    /// - `match_id` - Identifier of the match
    ///
    /// # Returns
    /// - `Ok(Some(IngestSummary))` - Match found with its row counts
    /// - `Ok(None)` - No match with this identifier exists
    /// - `Err(Error::DbErr)` - A database query failed
    pub async fn get_summary(&self, match_id: i32) -> Result<Option<IngestSummary>, Error> {
        let cricket_match: MatchModel = match MatchRepository::new(self.db)
            .get_by_id(match_id)
            .await?
        {
            Some(cricket_match) => cricket_match,
            None => return Ok(None),
        };

        Ok(Some(IngestSummary {
            match_id: cricket_match.id,
            matches: 1,
            teams: TeamRepository::new(self.db)
                .count_by_match_id(cricket_match.id)
                .await?,
            players: PlayerRepository::new(self.db)
                .count_by_match_id(cricket_match.id)
                .await?,
            deliveries: DeliveryRepository::new(self.db)
                .count_by_match_id(cricket_match.id)
                .await?,
            officials: OfficialRepository::new(self.db)
                .count_by_match_id(cricket_match.id)
                .await?,
            powerplays: PowerplayRepository::new(self.db)
                .count_by_match_id(cricket_match.id)
                .await?,
        }))
    }
}
