//! In-memory records extracted from a scorecard document before persistence.
//!
//! Records use plain structural ownership: a [`TeamRecord`] owns its players and every
//! dependent record carries the identifier of the already persisted match. Surrogate
//! identifiers for the records themselves are only assigned by the store.

use chrono::NaiveDate;

/// Match-level information read from the `info` section of a scorecard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Host city
    pub city: String,
    /// First day of play
    pub match_date: NaiveDate,
    /// Number of the match within its event
    pub match_number: i32,
    /// Name of the event, e.g. a tournament or series
    pub event_name: String,
    /// Format of the match, e.g. `ODI` or `T20`
    pub match_type: String,
    /// Gender category of the match
    pub gender: String,
    /// Season label, e.g. `2007/08`
    pub season: String,
    /// Team that won the toss
    pub toss_winner: String,
    /// Toss decision, `bat` or `field`
    pub toss_decision: String,
    /// Winning team, empty for a tie or no result
    pub winner: String,
    /// Zero both when the winner won by runs and when no margin was recorded.
    pub outcome_by_wickets: i32,
    /// Scheduled overs per innings
    pub overs: i32,
    /// First listed player of the match
    pub player_of_match: String,
}

/// A team of a match together with its squad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    /// Identifier of the persisted match
    pub match_id: i32,
    /// Team name
    pub name: String,
    /// Players in source order
    pub players: Vec<PlayerRecord>,
}

/// A player listed for a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    /// Identifier of the persisted match
    pub match_id: i32,
    /// Player name
    pub name: String,
}

/// One ball bowled in an innings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRecord {
    /// Identifier of the persisted match
    pub match_id: i32,
    /// 1-based innings number
    pub innings_number: i32,
    /// Over number as recorded by the source, usually 0-based
    pub over_number: i32,
    /// Ball number within the over
    pub ball_number: i32,
    /// Batter on strike
    pub batter: String,
    /// Bowler
    pub bowler: String,
    /// Batter at the non-striker's end
    pub non_striker: String,
    /// Runs scored off the bat
    pub runs_batter: i32,
    /// Extras conceded
    pub runs_extras: i32,
    /// Total runs from the delivery
    pub runs_total: i32,
    /// Kind of dismissal, empty when no wicket fell
    pub wicket_type: String,
    /// Dismissed player, empty when no wicket fell
    pub player_out: String,
}

/// A match official and their role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficialRecord {
    /// Identifier of the persisted match
    pub match_id: i32,
    /// Role key, one of [`crate::server::scorecard::official::OFFICIAL_TYPES`]
    pub official_type: String,
    /// Official name
    pub name: String,
}

/// A powerplay period of an innings.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerplayRecord {
    /// Identifier of the persisted match
    pub match_id: i32,
    /// 1-based innings number
    pub innings_number: i32,
    /// First over of the period, fractional
    pub from_over: f64,
    /// Last over of the period, fractional
    pub to_over: f64,
    /// Free-form label, e.g. `mandatory`
    pub powerplay_type: String,
}
