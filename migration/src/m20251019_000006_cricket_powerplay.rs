use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251019_000001_cricket_match::CricketMatch;

static IDX_CRICKET_POWERPLAY_MATCH_ID: &str = "idx-cricket_powerplay-match_id";
static FK_CRICKET_POWERPLAY_MATCH_ID: &str = "fk-cricket_powerplay-match_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CricketPowerplay::Table)
                    .if_not_exists()
                    .col(pk_auto(CricketPowerplay::Id))
                    .col(integer(CricketPowerplay::MatchId))
                    .col(integer(CricketPowerplay::InningsNumber))
                    .col(double(CricketPowerplay::FromOver))
                    .col(double(CricketPowerplay::ToOver))
                    .col(string(CricketPowerplay::PowerplayType))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CRICKET_POWERPLAY_MATCH_ID)
                    .table(CricketPowerplay::Table)
                    .col(CricketPowerplay::MatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CRICKET_POWERPLAY_MATCH_ID)
                    .from_tbl(CricketPowerplay::Table)
                    .from_col(CricketPowerplay::MatchId)
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
                    .name(FK_CRICKET_POWERPLAY_MATCH_ID)
                    .table(CricketPowerplay::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CRICKET_POWERPLAY_MATCH_ID)
                    .table(CricketPowerplay::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CricketPowerplay::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CricketPowerplay {
    Table,
    Id,
    MatchId,
    InningsNumber,
    FromOver,
    ToOver,
    PowerplayType,
}
