//! Scorecard document parsing and entity extraction.
//!
//! Extractors walk a parsed [`Document`] and build the in-memory records defined in
//! [`crate::server::model::scorecard`]. Missing values are resolved through [`FieldRules`].

pub mod delivery;
pub mod match_info;
pub mod node;
pub mod official;
pub mod powerplay;
pub mod rules;
pub mod team;

pub use delivery::{extract_deliveries, DeliveryShape};
pub use match_info::extract_match;
pub use node::{Document, Node};
pub use official::extract_officials;
pub use powerplay::extract_powerplays;
pub use rules::FieldRules;
pub use team::extract_teams;
