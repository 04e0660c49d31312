use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251019_000001_cricket_match::CricketMatch;

static IDX_CRICKET_TEAM_MATCH_ID: &str = "idx-cricket_team-match_id";
static FK_CRICKET_TEAM_MATCH_ID: &str = "fk-cricket_team-match_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CricketTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(CricketTeam::Id))
                    .col(integer(CricketTeam::MatchId))
                    .col(string(CricketTeam::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CRICKET_TEAM_MATCH_ID)
                    .table(CricketTeam::Table)
                    .col(CricketTeam::MatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CRICKET_TEAM_MATCH_ID)
                    .from_tbl(CricketTeam::Table)
                    .from_col(CricketTeam::MatchId)
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
                    .name(FK_CRICKET_TEAM_MATCH_ID)
                    .table(CricketTeam::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CRICKET_TEAM_MATCH_ID)
                    .table(CricketTeam::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CricketTeam::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CricketTeam {
    Table,
    Id,
    MatchId,
    Name,
}
