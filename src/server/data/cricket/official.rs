//! Official repository.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use super::INSERT_BATCH_SIZE;
use crate::server::model::scorecard::OfficialRecord;

/// Repository for the `cricket_official` table.
pub struct OfficialRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OfficialRepository<'a, C> {
    /// Creates a new instance of [`OfficialRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Persists match officials in batches of `INSERT_BATCH_SIZE` rows.
    pub async fn create_many(
        &self,
        officials: &[OfficialRecord],
    ) -> Result<Vec<entity::cricket_official::Model>, DbErr> {
        let mut models = Vec::with_capacity(officials.len());

        for batch in officials.chunks(INSERT_BATCH_SIZE) {
            let batch = batch.iter().map(|o| entity::cricket_official::ActiveModel {
                match_id: ActiveValue::Set(o.match_id),
                official_type: ActiveValue::Set(o.official_type.clone()),
                name: ActiveValue::Set(o.name.clone()),
                ..Default::default()
            });

            models.extend(
                entity::prelude::CricketOfficial::insert_many(batch)
                    .exec_with_returning(self.db)
                    .await?,
            );
        }

        Ok(models)
    }

    /// Counts the officials of a match.
    pub async fn count_by_match_id(&self, match_id: i32) -> Result<u64, DbErr> {
        entity::prelude::CricketOfficial::find()
            .filter(entity::cricket_official::Column::MatchId.eq(match_id))
            .count(self.db)
            .await
    }
}
