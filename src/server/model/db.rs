//! Database model type aliases.
//!
//! This module provides type aliases for the SeaORM entity models used throughout the
//! application, so callers need not import from the generated `entity` crate directly.

/// Type alias for a persisted cricket match.
///
/// # Fields (from `entity::cricket_match::Model`)
/// - `id` - Primary key, surrogate match identifier
/// - `match_date` - First day of the match, stored at midnight
/// - `outcome_by_wickets` - Winning margin in wickets, zero when absent
/// - `ingested_at` - Timestamp when the scorecard was ingested
pub type MatchModel = entity::cricket_match::Model;

/// Type alias for a team playing in a match.
pub type TeamModel = entity::cricket_team::Model;

/// Type alias for a player, referencing both their team and match.
pub type PlayerModel = entity::cricket_player::Model;

/// Type alias for one delivery bowled in a match.
pub type DeliveryModel = entity::cricket_delivery::Model;

/// Type alias for a match official with their role.
pub type OfficialModel = entity::cricket_official::Model;

/// Type alias for a powerplay, with fractional over boundaries.
pub type PowerplayModel = entity::cricket_powerplay::Model;
