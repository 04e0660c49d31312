use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251019_000001_cricket_match::CricketMatch;

static IDX_CRICKET_OFFICIAL_MATCH_ID: &str = "idx-cricket_official-match_id";
static FK_CRICKET_OFFICIAL_MATCH_ID: &str = "fk-cricket_official-match_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CricketOfficial::Table)
                    .if_not_exists()
                    .col(pk_auto(CricketOfficial::Id))
                    .col(integer(CricketOfficial::MatchId))
                    .col(string(CricketOfficial::OfficialType))
                    .col(string(CricketOfficial::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CRICKET_OFFICIAL_MATCH_ID)
                    .table(CricketOfficial::Table)
                    .col(CricketOfficial::MatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CRICKET_OFFICIAL_MATCH_ID)
                    .from_tbl(CricketOfficial::Table)
                    .from_col(CricketOfficial::MatchId)
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
                    .name(FK_CRICKET_OFFICIAL_MATCH_ID)
                    .table(CricketOfficial::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CRICKET_OFFICIAL_MATCH_ID)
                    .table(CricketOfficial::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CricketOfficial::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CricketOfficial {
    Table,
    Id,
    MatchId,
    OfficialType,
    Name,
}
