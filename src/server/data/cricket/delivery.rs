//! Delivery repository.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use super::INSERT_BATCH_SIZE;
use crate::server::model::scorecard::DeliveryRecord;

/// Repository for the `cricket_delivery` table.
pub struct DeliveryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeliveryRepository<'a, C> {
    /// Creates a new instance of [`DeliveryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Persists deliveries in batches of `INSERT_BATCH_SIZE` rows, returning an empty list
    /// without querying when there are none.
    pub async fn create_many(
        &self,
        deliveries: &[DeliveryRecord],
    ) -> Result<Vec<entity::cricket_delivery::Model>, DbErr> {
        let mut models = Vec::with_capacity(deliveries.len());

        for batch in deliveries.chunks(INSERT_BATCH_SIZE) {
            let batch = batch.iter().map(|d| entity::cricket_delivery::ActiveModel {
                match_id: ActiveValue::Set(d.match_id),
                innings_number: ActiveValue::Set(d.innings_number),
                over_number: ActiveValue::Set(d.over_number),
                ball_number: ActiveValue::Set(d.ball_number),
                batter: ActiveValue::Set(d.batter.clone()),
                bowler: ActiveValue::Set(d.bowler.clone()),
                non_striker: ActiveValue::Set(d.non_striker.clone()),
                runs_batter: ActiveValue::Set(d.runs_batter),
                runs_extras: ActiveValue::Set(d.runs_extras),
                runs_total: ActiveValue::Set(d.runs_total),
                wicket_type: ActiveValue::Set(d.wicket_type.clone()),
                player_out: ActiveValue::Set(d.player_out.clone()),
                ..Default::default()
            });

            models.extend(
                entity::prelude::CricketDelivery::insert_many(batch)
                    .exec_with_returning(self.db)
                    .await?,
            );
        }

        Ok(models)
    }

    /// Counts the deliveries of a match.
    pub async fn count_by_match_id(&self, match_id: i32) -> Result<u64, DbErr> {
        entity::prelude::CricketDelivery::find()
            .filter(entity::cricket_delivery::Column::MatchId.eq(match_id))
            .count(self.db)
            .await
    }
}
