//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together and applied in order during the final `build()`
//! call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Tables are created in the order they were added, so parents must be added before the
/// tables referencing them.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_scorecard_tables: bool,

    // Match numbers of fixture matches to insert
    matches: Vec<i32>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_scorecard_tables: false,
            matches: Vec::new(),
        }
    }

    /// Creates all six scorecard tables, parents first.
    pub fn with_scorecard_tables(mut self) -> Self {
        self.include_scorecard_tables = true;
        self
    }

    /// Creates the table for a single entity.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Inserts a fixture match once tables exist.
    pub fn with_mock_match(mut self, match_number: i32) -> Self {
        self.matches.push(match_number);
        self
    }

    /// Builds the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with tables created and fixtures inserted
    /// - `Err(TestError::DbErr)` - Table creation or a fixture insert failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_scorecard_tables {
            all_tables.extend(scorecard_tables());
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        for match_number in self.matches {
            context.insert_mock_match(match_number).await?;
        }

        Ok(context)
    }
}

/// Create statements for every scorecard table, parents first.
pub fn scorecard_tables() -> Vec<TableCreateStatement> {
    let schema = Schema::new(sea_orm::DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::CricketMatch),
        schema.create_table_from_entity(entity::prelude::CricketTeam),
        schema.create_table_from_entity(entity::prelude::CricketPlayer),
        schema.create_table_from_entity(entity::prelude::CricketDelivery),
        schema.create_table_from_entity(entity::prelude::CricketOfficial),
        schema.create_table_from_entity(entity::prelude::CricketPowerplay),
    ]
}
