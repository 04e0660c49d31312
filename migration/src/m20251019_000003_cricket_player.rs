use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251019_000001_cricket_match::CricketMatch, m20251019_000002_cricket_team::CricketTeam,
};

static IDX_CRICKET_PLAYER_TEAM_ID: &str = "idx-cricket_player-team_id";
static IDX_CRICKET_PLAYER_MATCH_ID: &str = "idx-cricket_player-match_id";
static FK_CRICKET_PLAYER_TEAM_ID: &str = "fk-cricket_player-team_id";
static FK_CRICKET_PLAYER_MATCH_ID: &str = "fk-cricket_player-match_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CricketPlayer::Table)
                    .if_not_exists()
                    .col(pk_auto(CricketPlayer::Id))
                    .col(integer(CricketPlayer::TeamId))
                    .col(integer(CricketPlayer::MatchId))
                    .col(string(CricketPlayer::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CRICKET_PLAYER_TEAM_ID)
                    .table(CricketPlayer::Table)
                    .col(CricketPlayer::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CRICKET_PLAYER_MATCH_ID)
                    .table(CricketPlayer::Table)
                    .col(CricketPlayer::MatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CRICKET_PLAYER_TEAM_ID)
                    .from_tbl(CricketPlayer::Table)
                    .from_col(CricketPlayer::TeamId)
                    .to_tbl(CricketTeam::Table)
                    .to_col(CricketTeam::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CRICKET_PLAYER_MATCH_ID)
                    .from_tbl(CricketPlayer::Table)
                    .from_col(CricketPlayer::MatchId)
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
                    .name(FK_CRICKET_PLAYER_MATCH_ID)
                    .table(CricketPlayer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CRICKET_PLAYER_TEAM_ID)
                    .table(CricketPlayer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CRICKET_PLAYER_MATCH_ID)
                    .table(CricketPlayer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CRICKET_PLAYER_TEAM_ID)
                    .table(CricketPlayer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CricketPlayer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CricketPlayer {
    Table,
    Id,
    TeamId,
    MatchId,
    Name,
}
