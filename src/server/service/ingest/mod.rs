//! Scorecard ingestion service.
//!
//! Turns one uploaded scorecard document into persisted rows. The whole entity graph of a
//! match is written inside a single transaction: either every row is committed or none is.

#[cfg(test)]
mod tests;

use std::time::Instant;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::{debug, error, info, warn};

use crate::server::{
    data::cricket::{
        cricket_match::MatchRepository, delivery::DeliveryRepository,
        official::OfficialRepository, player::PlayerRepository, powerplay::PowerplayRepository,
        team::TeamRepository,
    },
    error::ingest::IngestError,
    model::app::IngestSettings,
    scorecard::{
        extract_deliveries, extract_match, extract_officials, extract_powerplays, extract_teams,
        Document, FieldRules, Node,
    },
};

/// Number of rows persisted per entity type for one ingested match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    /// Identifier assigned to the persisted match
    pub match_id: i32,
    /// Always one per document
    pub matches: u64,
    /// Teams of the match
    pub teams: u64,
    /// Players across all teams
    pub players: u64,
    /// Deliveries across all innings
    pub deliveries: u64,
    /// Match officials
    pub officials: u64,
    /// Powerplays across all innings
    pub powerplays: u64,
}

/// Service ingesting uploaded scorecard documents.
pub struct IngestService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a IngestSettings,
}

impl<'a> IngestService<'a> {
    /// Creates a new instance of IngestService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `settings` - Upload limit and field rules applied to every document
    pub fn new(db: &'a DatabaseConnection, settings: &'a IngestSettings) -> Self {
        Self { db, settings }
    }

    /// Parses a scorecard document and persists its match with every dependent entity.
    ///
    /// Size checks happen before parsing, and parsing before any database work. Extraction
    /// and persistence then run in one transaction which is rolled back on any error, leaving
    /// the store exactly as it was before the call.
    ///
    /// # Arguments
    /// - `bytes` - Raw uploaded document
    ///
    /// # Returns
    /// - `Ok(IngestSummary)` - Document committed, with counts per entity type
    /// - `Err(IngestError::EmptyUpload)` - `bytes` is empty
    /// - `Err(IngestError::UploadTooLarge)` - `bytes` exceeds the configured upload limit
    /// - `Err(IngestError::Parse)` - `bytes` is not well-formed JSON
    /// - `Err(IngestError::Validation)` - A required field is missing or malformed, or the
    ///   document mixes delivery shapes
    /// - `Err(IngestError::Persistence)` - A database operation failed
    pub async fn ingest(&self, bytes: &[u8]) -> Result<IngestSummary, IngestError> {
        if bytes.is_empty() {
            return Err(IngestError::EmptyUpload);
        }

        if bytes.len() > self.settings.max_upload_bytes {
            return Err(IngestError::UploadTooLarge {
                size: bytes.len(),
                limit: self.settings.max_upload_bytes,
            });
        }

        let document = Document::parse(bytes)?;

        let start = Instant::now();
        info!("Ingesting scorecard of {} bytes", bytes.len());

        let txn = self.db.begin().await?;

        match Self::persist(&txn, &document.root(), &self.settings.rules).await {
            Ok(summary) => {
                txn.commit().await?;

                info!(
                    "Ingested match ID {} in {}ms: {} teams, {} players, {} deliveries, {} officials, {} powerplays",
                    summary.match_id,
                    start.elapsed().as_millis(),
                    summary.teams,
                    summary.players,
                    summary.deliveries,
                    summary.officials,
                    summary.powerplays
                );

                Ok(summary)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    error!(
                        "Failed to roll back scorecard ingestion after error '{}': {}",
                        err, rollback_err
                    );
                } else {
                    warn!("Rolled back scorecard ingestion: {}", err);
                }

                Err(err)
            }
        }
    }

    async fn persist(
        txn: &DatabaseTransaction,
        root: &Node<'_>,
        rules: &FieldRules,
    ) -> Result<IngestSummary, IngestError> {
        let match_record = extract_match(root, rules)?;
        let cricket_match = MatchRepository::new(txn).create(match_record).await?;
        let match_id = cricket_match.id;
        debug!("Persisted match ID {}", match_id);

        let team_repo = TeamRepository::new(txn);
        let player_repo = PlayerRepository::new(txn);

        let teams = extract_teams(root, rules, match_id)?;
        let mut players = 0;

        for team in &teams {
            let team_model = team_repo.create(match_id, team.name.clone()).await?;
            let team_players = player_repo
                .create_many(team_model.id, match_id, &team.players)
                .await?;

            players += team_players.len() as u64;
        }
        debug!("Persisted {} teams with {} players", teams.len(), players);

        let deliveries = extract_deliveries(root, rules, match_id)?;
        let deliveries = DeliveryRepository::new(txn)
            .create_many(&deliveries)
            .await?;
        debug!("Persisted {} deliveries", deliveries.len());

        let officials = extract_officials(root, rules, match_id)?;
        let officials = OfficialRepository::new(txn).create_many(&officials).await?;
        debug!("Persisted {} officials", officials.len());

        let powerplays = extract_powerplays(root, rules, match_id)?;
        let powerplays = PowerplayRepository::new(txn)
            .create_many(&powerplays)
            .await?;
        debug!("Persisted {} powerplays", powerplays.len());

        Ok(IngestSummary {
            match_id,
            matches: 1,
            teams: teams.len() as u64,
            players,
            deliveries: deliveries.len() as u64,
            officials: officials.len() as u64,
            powerplays: powerplays.len() as u64,
        })
    }
}
