//! Cricket scorecard repositories.
//!
//! One repository per table. Every repository is generic over [`sea_orm::ConnectionTrait`] so
//! the ingestion service can run them inside a single transaction while reads elsewhere use
//! the plain connection.

pub mod cricket_match;
pub mod delivery;
pub mod official;
pub mod player;
pub mod powerplay;
pub mod team;

#[cfg(test)]
mod tests;

/// Rows sent per `INSERT` statement. The widest table binds 11 values per row, keeping each
/// statement well below the 65,535 bind parameter limit of Postgres.
const INSERT_BATCH_SIZE: usize = 1_000;
