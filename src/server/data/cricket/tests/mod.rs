mod cricket_match;
mod powerplay;
mod team;

use chrono::NaiveDate;
use scorebook_test_utils::prelude::*;

use crate::server::model::scorecard::MatchRecord;

fn match_record() -> MatchRecord {
    MatchRecord {
        city: "Lord's".to_string(),
        match_date: NaiveDate::from_ymd_opt(2019, 7, 14).unwrap(),
        match_number: 48,
        event_name: "ICC Cricket World Cup".to_string(),
        match_type: "ODI".to_string(),
        gender: "male".to_string(),
        season: "2019".to_string(),
        toss_winner: "New Zealand".to_string(),
        toss_decision: "bat".to_string(),
        winner: "England".to_string(),
        outcome_by_wickets: 0,
        overs: 50,
        player_of_match: "BA Stokes".to_string(),
    }
}
