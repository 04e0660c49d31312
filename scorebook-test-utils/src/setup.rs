//! Setup macros creating a [`TestContext`](crate::TestContext) with tables in one call.

/// Creates a test context with tables for the given entities, in the order given.
///
/// # Example
/// ```ignore
/// let test = test_setup_with_tables!(
///     entity::prelude::CricketMatch,
///     entity::prelude::CricketTeam
/// )?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let context = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            context.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(context)
        }.await
    }};
}

/// Creates a test context with every scorecard table.
#[macro_export]
macro_rules! test_setup_with_scorecard_tables {
    () => {{
        async {
            let context = $crate::TestContext::new().await?;
            context.with_tables($crate::builder::scorecard_tables()).await?;

            Ok::<_, $crate::error::TestError>(context)
        }.await
    }};
}
