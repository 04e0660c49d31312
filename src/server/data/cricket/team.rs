//! Team repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository for the `cricket_team` table.
pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Persists a single team of a match
    pub async fn create(
        &self,
        match_id: i32,
        name: String,
    ) -> Result<entity::cricket_team::Model, DbErr> {
        let team = entity::cricket_team::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            name: ActiveValue::Set(name),
            ..Default::default()
        };

        team.insert(self.db).await
    }

    /// Counts the teams of a match.
    pub async fn count_by_match_id(&self, match_id: i32) -> Result<u64, DbErr> {
        entity::prelude::CricketTeam::find()
            .filter(entity::cricket_team::Column::MatchId.eq(match_id))
            .count(self.db)
            .await
    }
}
