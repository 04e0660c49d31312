use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251019_000001_cricket_match::CricketMatch;

static IDX_CRICKET_DELIVERY_MATCH_ID: &str = "idx-cricket_delivery-match_id";
static FK_CRICKET_DELIVERY_MATCH_ID: &str = "fk-cricket_delivery-match_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CricketDelivery::Table)
                    .if_not_exists()
                    .col(pk_auto(CricketDelivery::Id))
                    .col(integer(CricketDelivery::MatchId))
                    .col(integer(CricketDelivery::InningsNumber))
                    .col(integer(CricketDelivery::OverNumber))
                    .col(integer(CricketDelivery::BallNumber))
                    .col(string(CricketDelivery::Batter))
                    .col(string(CricketDelivery::Bowler))
                    .col(string(CricketDelivery::NonStriker))
                    .col(integer(CricketDelivery::RunsBatter))
                    .col(integer(CricketDelivery::RunsExtras))
                    .col(integer(CricketDelivery::RunsTotal))
                    .col(string(CricketDelivery::WicketType))
                    .col(string(CricketDelivery::PlayerOut))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CRICKET_DELIVERY_MATCH_ID)
                    .table(CricketDelivery::Table)
                    .col(CricketDelivery::MatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CRICKET_DELIVERY_MATCH_ID)
                    .from_tbl(CricketDelivery::Table)
                    .from_col(CricketDelivery::MatchId)
                    .to_tbl(CricketMatch::Table)
                    .to_col(CricketMatch::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CRICKET_DELIVERY_MATCH_ID)
                    .table(CricketDelivery::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CRICKET_DELIVERY_MATCH_ID)
                    .table(CricketDelivery::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CricketDelivery::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CricketDelivery {
    Table,
    Id,
    MatchId,
    InningsNumber,
    OverNumber,
    BallNumber,
    Batter,
    Bowler,
    NonStriker,
    RunsBatter,
    RunsExtras,
    RunsTotal,
    WicketType,
    PlayerOut,
}
