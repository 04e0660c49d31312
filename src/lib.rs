//! Scorebook ingests cricket scorecard documents and persists the match, teams, players,
//! deliveries, officials, and powerplays they describe as related records.

pub mod model;
pub mod server;
