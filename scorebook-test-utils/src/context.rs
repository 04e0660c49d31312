//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns an
//! in-memory SQLite database and helpers for inserting fixture rows.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::TableCreateStatement, ActiveModelTrait, ActiveValue, ConnectionTrait, Database,
    DatabaseConnection,
};

use crate::{
    constant::{TEST_CITY, TEST_EVENT_NAME},
    error::TestError,
};

/// Test context with an initialized in-memory database.
pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    pub async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Inserts a match row with fixed test values.
    ///
    /// # Arguments
    /// - `match_number` - Event match number, useful to tell several inserted matches apart
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted match with its assigned identifier
    /// - `Err(TestError::DbErr)` - The `cricket_match` table is missing or the insert failed
    pub async fn insert_mock_match(
        &self,
        match_number: i32,
    ) -> Result<entity::cricket_match::Model, TestError> {
        let match_date = NaiveDate::from_ymd_opt(2023, 10, 14)
            .unwrap()
            .and_time(chrono::NaiveTime::MIN);

        let model = entity::cricket_match::ActiveModel {
            city: ActiveValue::Set(TEST_CITY.to_string()),
            match_date: ActiveValue::Set(match_date),
            match_number: ActiveValue::Set(match_number),
            event_name: ActiveValue::Set(TEST_EVENT_NAME.to_string()),
            match_type: ActiveValue::Set("ODI".to_string()),
            gender: ActiveValue::Set("male".to_string()),
            season: ActiveValue::Set("2023/24".to_string()),
            toss_winner: ActiveValue::Set("Pakistan".to_string()),
            toss_decision: ActiveValue::Set("bat".to_string()),
            winner: ActiveValue::Set("India".to_string()),
            outcome_by_wickets: ActiveValue::Set(7),
            overs: ActiveValue::Set(50),
            player_of_match: ActiveValue::Set("JJ Bumrah".to_string()),
            ingested_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(model.insert(&self.db).await?)
    }

    /// Inserts a team row belonging to `match_id`.
    pub async fn insert_mock_team(
        &self,
        match_id: i32,
        name: &str,
    ) -> Result<entity::cricket_team::Model, TestError> {
        let model = entity::cricket_team::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        Ok(model.insert(&self.db).await?)
    }
}
