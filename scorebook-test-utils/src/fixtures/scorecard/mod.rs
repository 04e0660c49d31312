//! Scorecard document fixtures.
//!
//! [`ScorecardFactory`] assembles a scorecard document piece by piece, [`factory`] provides
//! ready-made documents for the common shapes.

pub mod factory;

use serde_json::{json, Map, Value};

use crate::constant::{TEST_CITY, TEST_EVENT_NAME, TEST_MATCH_DATE};

/// Builder for scorecard JSON documents.
///
/// Starts from a match `info` section with every match-level field set. Teams, deliveries,
/// officials and powerplays are only emitted once added.
pub struct ScorecardFactory {
    info: Map<String, Value>,
    mapped_teams: Map<String, Value>,
    listed_teams: Vec<Value>,
    officials: Map<String, Value>,
    innings: Vec<Value>,
    flat_deliveries: Vec<Value>,
}

impl Default for ScorecardFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ScorecardFactory {
    pub fn new() -> Self {
        let info = json!({
            "city": TEST_CITY,
            "dates": [TEST_MATCH_DATE],
            "event": { "name": TEST_EVENT_NAME, "match_number": 12 },
            "match_type": "ODI",
            "gender": "male",
            "season": "2023/24",
            "toss": { "winner": "Pakistan", "decision": "bat" },
            "outcome": { "winner": "India", "by": { "wickets": 7 } },
            "overs": 50,
            "player_of_match": ["JJ Bumrah"]
        });

        let info = match info {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Self {
            info,
            mapped_teams: Map::new(),
            listed_teams: Vec::new(),
            officials: Map::new(),
            innings: Vec::new(),
            flat_deliveries: Vec::new(),
        }
    }

    /// Sets or replaces an `info` field.
    pub fn with_info(mut self, key: &str, value: Value) -> Self {
        self.info.insert(key.to_string(), value);
        self
    }

    /// Removes an `info` field.
    pub fn without_info(mut self, key: &str) -> Self {
        self.info.remove(key);
        self
    }

    /// Adds a team under `info.players`.
    pub fn with_team(mut self, name: &str, players: &[&str]) -> Self {
        self.mapped_teams.insert(name.to_string(), json!(players));
        self
    }

    /// Adds a team to the top-level `teams` list with object player entries.
    pub fn with_listed_team(mut self, name: &str, players: &[&str]) -> Self {
        let players: Vec<Value> = players.iter().map(|p| json!({ "name": p })).collect();
        self.listed_teams.push(json!({ "name": name, "players": players }));
        self
    }

    /// Appends a name to an official type list under `info.officials`.
    pub fn with_official(mut self, official_type: &str, name: &str) -> Self {
        let names = self
            .officials
            .entry(official_type.to_string())
            .or_insert_with(|| json!([]));

        if let Value::Array(names) = names {
            names.push(json!(name));
        }

        self
    }

    /// Appends an innings with one over of `deliveries` and a mandatory powerplay.
    ///
    /// Each delivery is given as `(batter, bowler, batter_runs)`.
    pub fn with_innings(mut self, over: i32, deliveries: &[(&str, &str, i32)]) -> Self {
        let deliveries: Vec<Value> = deliveries
            .iter()
            .map(|(batter, bowler, runs)| {
                json!({
                    "batter": batter,
                    "bowler": bowler,
                    "non_striker": "Non Striker",
                    "runs": { "batter": runs, "extras": 0, "total": runs }
                })
            })
            .collect();

        self.innings.push(json!({
            "team": "India",
            "overs": [{ "over": over, "deliveries": deliveries }],
            "powerplays": [{ "from": 0.1, "to": 9.6, "type": "mandatory" }]
        }));
        self
    }

    /// Appends a delivery to the flat top-level `deliveries` list.
    pub fn with_flat_delivery(mut self, innings: i32, over: i32, ball: i32, runs: i32) -> Self {
        self.flat_deliveries.push(json!({
            "innings": innings,
            "over": over,
            "ball": ball,
            "batter": "Flat Batter",
            "bowler": "Flat Bowler",
            "non_striker": "Flat Non Striker",
            "runs_batter": runs,
            "runs_extras": 0,
            "runs_total": runs
        }));
        self
    }

    /// Builds the document as a JSON value.
    pub fn build(self) -> Value {
        let mut info = self.info;

        if !self.mapped_teams.is_empty() {
            info.insert("players".to_string(), Value::Object(self.mapped_teams));
        }
        if !self.officials.is_empty() {
            info.insert("officials".to_string(), Value::Object(self.officials));
        }

        let mut document = Map::new();
        document.insert("meta".to_string(), json!({ "data_version": "1.1.0" }));
        document.insert("info".to_string(), Value::Object(info));

        if !self.listed_teams.is_empty() {
            document.insert("teams".to_string(), Value::Array(self.listed_teams));
        }
        if !self.innings.is_empty() {
            document.insert("innings".to_string(), Value::Array(self.innings));
        }
        if !self.flat_deliveries.is_empty() {
            document.insert("deliveries".to_string(), Value::Array(self.flat_deliveries));
        }

        Value::Object(document)
    }

    /// Builds the document as serialized bytes, as it would be uploaded.
    pub fn into_bytes(self) -> Vec<u8> {
        self.build().to_string().into_bytes()
    }
}
