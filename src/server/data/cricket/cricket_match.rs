//! Match repository.

use chrono::{NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::scorecard::MatchRecord;

/// Repository for the `cricket_match` table.
pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    /// Creates a new instance of [`MatchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Persists a match, stamping it with the current ingestion time.
    ///
    /// The match date is stored as a timestamp at midnight.
    pub async fn create(
        &self,
        record: MatchRecord,
    ) -> Result<entity::cricket_match::Model, DbErr> {
        let cricket_match = entity::cricket_match::ActiveModel {
            city: ActiveValue::Set(record.city),
            match_date: ActiveValue::Set(record.match_date.and_time(NaiveTime::MIN)),
            match_number: ActiveValue::Set(record.match_number),
            event_name: ActiveValue::Set(record.event_name),
            match_type: ActiveValue::Set(record.match_type),
            gender: ActiveValue::Set(record.gender),
            season: ActiveValue::Set(record.season),
            toss_winner: ActiveValue::Set(record.toss_winner),
            toss_decision: ActiveValue::Set(record.toss_decision),
            winner: ActiveValue::Set(record.winner),
            outcome_by_wickets: ActiveValue::Set(record.outcome_by_wickets),
            overs: ActiveValue::Set(record.overs),
            player_of_match: ActiveValue::Set(record.player_of_match),
            ingested_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        cricket_match.insert(self.db).await
    }

    /// Gets a match by its identifier.
    pub async fn get_by_id(
        &self,
        match_id: i32,
    ) -> Result<Option<entity::cricket_match::Model>, DbErr> {
        entity::prelude::CricketMatch::find_by_id(match_id)
            .one(self.db)
            .await
    }
}
