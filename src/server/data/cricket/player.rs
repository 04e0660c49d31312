//! Player repository.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use super::INSERT_BATCH_SIZE;
use crate::server::model::scorecard::PlayerRecord;

/// Repository for the `cricket_player` table.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new instance of [`PlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Persists the players of one team.
    ///
    /// # Arguments
    /// - `team_id` - Identifier of the persisted team owning the players
    /// - `match_id` - Identifier of the persisted match the team plays in
    /// - `players` - Players to persist, in order
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Persisted players, empty without querying when `players` is empty
    /// - `Err(DbErr)` - The insert failed, e.g. `team_id` or `match_id` does not exist
    pub async fn create_many(
        &self,
        team_id: i32,
        match_id: i32,
        players: &[PlayerRecord],
    ) -> Result<Vec<entity::cricket_player::Model>, DbErr> {
        let mut models = Vec::with_capacity(players.len());

        for batch in players.chunks(INSERT_BATCH_SIZE) {
            let batch = batch.iter().map(|p| entity::cricket_player::ActiveModel {
                team_id: ActiveValue::Set(team_id),
                match_id: ActiveValue::Set(match_id),
                name: ActiveValue::Set(p.name.clone()),
                ..Default::default()
            });

            models.extend(
                entity::prelude::CricketPlayer::insert_many(batch)
                    .exec_with_returning(self.db)
                    .await?,
            );
        }

        Ok(models)
    }

    /// Counts the players of every team of a match.
    pub async fn count_by_match_id(&self, match_id: i32) -> Result<u64, DbErr> {
        entity::prelude::CricketPlayer::find()
            .filter(entity::cricket_player::Column::MatchId.eq(match_id))
            .count(self.db)
            .await
    }
}
