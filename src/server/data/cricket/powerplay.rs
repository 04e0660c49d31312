//! Powerplay repository.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use super::INSERT_BATCH_SIZE;
use crate::server::model::scorecard::PowerplayRecord;

/// Repository for the `cricket_powerplay` table.
pub struct PowerplayRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PowerplayRepository<'a, C> {
    /// Creates a new instance of [`PowerplayRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Persists powerplays in batches of `INSERT_BATCH_SIZE` rows.
    pub async fn create_many(
        &self,
        powerplays: &[PowerplayRecord],
    ) -> Result<Vec<entity::cricket_powerplay::Model>, DbErr> {
        let mut models = Vec::with_capacity(powerplays.len());

        for batch in powerplays.chunks(INSERT_BATCH_SIZE) {
            let batch = batch.iter().map(|p| entity::cricket_powerplay::ActiveModel {
                match_id: ActiveValue::Set(p.match_id),
                innings_number: ActiveValue::Set(p.innings_number),
                from_over: ActiveValue::Set(p.from_over),
                to_over: ActiveValue::Set(p.to_over),
                powerplay_type: ActiveValue::Set(p.powerplay_type.clone()),
                ..Default::default()
            });

            models.extend(
                entity::prelude::CricketPowerplay::insert_many(batch)
                    .exec_with_returning(self.db)
                    .await?,
            );
        }

        Ok(models)
    }

    /// Counts the powerplays recorded for a match.
    pub async fn count_by_match_id(&self, match_id: i32) -> Result<u64, DbErr> {
        entity::prelude::CricketPowerplay::find()
            .filter(entity::cricket_powerplay::Column::MatchId.eq(match_id))
            .count(self.db)
            .await
    }
}
