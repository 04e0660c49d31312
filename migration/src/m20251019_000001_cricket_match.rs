use sea_orm_migration::{prelude::*, schema::*};

static IDX_CRICKET_MATCH_MATCH_DATE: &str = "idx-cricket_match-match_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CricketMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(CricketMatch::Id))
                    .col(string(CricketMatch::City))
                    .col(timestamp(CricketMatch::MatchDate))
                    .col(integer(CricketMatch::MatchNumber))
                    .col(string(CricketMatch::EventName))
                    .col(string(CricketMatch::MatchType))
                    .col(string(CricketMatch::Gender))
                    .col(string(CricketMatch::Season))
                    .col(string(CricketMatch::TossWinner))
                    .col(string(CricketMatch::TossDecision))
                    .col(string(CricketMatch::Winner))
                    .col(integer(CricketMatch::OutcomeByWickets))
                    .col(integer(CricketMatch::Overs))
                    .col(string(CricketMatch::PlayerOfMatch))
                    .col(timestamp(CricketMatch::IngestedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CRICKET_MATCH_MATCH_DATE)
                    .table(CricketMatch::Table)
                    .col(CricketMatch::MatchDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CRICKET_MATCH_MATCH_DATE)
                    .table(CricketMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CricketMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CricketMatch {
    Table,
    Id,
    City,
    MatchDate,
    MatchNumber,
    EventName,
    MatchType,
    Gender,
    Season,
    TossWinner,
    TossDecision,
    Winner,
    OutcomeByWickets,
    Overs,
    PlayerOfMatch,
    IngestedAt,
}
