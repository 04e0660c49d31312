//! Match-level extraction from the `info` section.

use chrono::NaiveDate;
use tracing::debug;

use crate::server::{
    error::ingest::IngestError,
    model::scorecard::MatchRecord,
    scorecard::{node::Node, rules::FieldRules},
};

const MATCH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Extracts match-level information from the `info` section of a scorecard.
///
/// # Arguments
/// - `root` - Root node of the parsed document
/// - `rules` - Defaulting rules for absent fields
///
/// # Returns
/// - `Ok(MatchRecord)` - The extracted match
/// - `Err(IngestError::Validation)` - `info.dates` is missing, empty, or its first element is
///   not a `YYYY-MM-DD` date, or another required field is absent
pub fn extract_match(root: &Node<'_>, rules: &FieldRules) -> Result<MatchRecord, IngestError> {
    let info = root.get("info");
    let event = info.get("event");
    let toss = info.get("toss");
    let outcome = info.get("outcome");

    let record = MatchRecord {
        city: rules.text(&info.get("city"))?,
        match_date: parse_match_date(&info.get("dates"))?,
        match_number: rules.integer(&event.get("match_number"))?,
        event_name: rules.text(&event.get("name"))?,
        match_type: rules.text(&info.get("match_type"))?,
        gender: rules.text(&info.get("gender"))?,
        season: rules.text(&info.get("season"))?,
        toss_winner: rules.text(&toss.get("winner"))?,
        toss_decision: rules.text(&toss.get("decision"))?,
        winner: rules.text(&outcome.get("winner"))?,
        outcome_by_wickets: rules.integer(&outcome.get("by").get("wickets"))?,
        overs: rules.integer(&info.get("overs"))?,
        player_of_match: player_of_match(&info.get("player_of_match"), rules)?,
    };

    debug!(
        "Extracted match: city={}, date={}, event={}",
        record.city, record.match_date, record.event_name
    );

    Ok(record)
}

fn parse_match_date(dates: &Node<'_>) -> Result<NaiveDate, IngestError> {
    if !dates.is_array() {
        return Err(IngestError::validation(
            dates.path(),
            "expected a list of match dates",
        ));
    }

    let first = dates.at(0);
    let raw = first
        .text()
        .filter(|date| !date.trim().is_empty())
        .ok_or_else(|| {
            IngestError::validation(dates.path(), "at least one match date is required")
        })?;

    if !is_iso_date_shape(&raw) {
        return Err(IngestError::validation(
            first.path(),
            format!("`{}` is not a YYYY-MM-DD date", raw),
        ));
    }

    NaiveDate::parse_from_str(&raw, MATCH_DATE_FORMAT).map_err(|e| {
        IngestError::validation(
            first.path(),
            format!("`{}` is not a YYYY-MM-DD date: {}", raw, e),
        )
    })
}

/// Exactly ten bytes: four-digit year, two-digit month and day separated by `-`.
fn is_iso_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();

    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Player of the match is modelled as a list by most sources; the first entry wins.
fn player_of_match(node: &Node<'_>, rules: &FieldRules) -> Result<String, IngestError> {
    if node.is_array() {
        return rules.text(&node.at(0));
    }

    rules.text(node)
}
