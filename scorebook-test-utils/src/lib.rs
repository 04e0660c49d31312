//! Shared test harness for the scorebook workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixture rows a
//! test needs, and `build()` returns a [`TestContext`] holding an in-memory SQLite database
//! with that state applied.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::TEST_MAX_UPLOAD_BYTES,
        fixtures::scorecard::{factory, ScorecardFactory},
        test_setup_with_scorecard_tables, test_setup_with_tables, TestBuilder, TestContext,
        TestError,
    };
}
