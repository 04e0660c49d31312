//! Team and player extraction.
//!
//! Two source shapes are accepted:
//! - a mapping from team name to a list of player names under `info.players`
//! - a top-level `teams` list of objects, each with a `name` and a `players` list whose
//!   entries are either names or objects with a `name`
//!
//! The mapping shape takes precedence when both are present. Teams keep the order in
//! which they appear in the source document.

use tracing::{debug, warn};

use crate::server::{
    error::ingest::IngestError,
    model::scorecard::{PlayerRecord, TeamRecord},
    scorecard::{node::Node, rules::FieldRules},
};

/// Extracts the teams of a match, each owning its players.
pub fn extract_teams(
    root: &Node<'_>,
    rules: &FieldRules,
    match_id: i32,
) -> Result<Vec<TeamRecord>, IngestError> {
    let mapped = root.get("info").get("players");
    let listed = root.get("teams");

    let teams = if mapped.is_object() {
        if listed.is_array() {
            warn!("Scorecard has both `info.players` and `teams`; using `info.players`");
        }

        mapped
            .entries()
            .into_iter()
            .map(|(name, players)| team_record(match_id, name.to_string(), &players, rules))
            .collect::<Result<Vec<_>, _>>()?
    } else if listed.is_array() {
        listed
            .elements()
            .iter()
            .map(|team| {
                let name = rules.text(&team.get("name"))?;
                team_record(match_id, name, &team.get("players"), rules)
            })
            .collect::<Result<Vec<_>, _>>()?
    } else {
        warn!("Scorecard has no team information");
        Vec::new()
    };

    debug!("Extracted {} teams", teams.len());

    Ok(teams)
}

fn team_record(
    match_id: i32,
    name: String,
    players: &Node<'_>,
    rules: &FieldRules,
) -> Result<TeamRecord, IngestError> {
    if !players.is_array() {
        warn!("Players for team {} are not a list", name);
    }

    let players = players
        .elements()
        .iter()
        .map(|player| player_record(match_id, player, rules))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TeamRecord {
        match_id,
        name,
        players,
    })
}

fn player_record(
    match_id: i32,
    player: &Node<'_>,
    rules: &FieldRules,
) -> Result<PlayerRecord, IngestError> {
    let name = if player.is_object() {
        rules.text(&player.get("name"))?
    } else {
        rules.text(player)?
    };

    Ok(PlayerRecord { match_id, name })
}
