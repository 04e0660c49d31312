//! Powerplay extraction from `innings[].powerplays[]`.

use tracing::debug;

use crate::server::{
    error::ingest::IngestError,
    model::scorecard::PowerplayRecord,
    scorecard::{node::Node, rules::FieldRules},
};

/// Extracts powerplays from every innings, recording the 1-based innings they belong to.
///
/// Over boundaries are fractional, `5.3` ends a powerplay at the third ball of the sixth over.
pub fn extract_powerplays(
    root: &Node<'_>,
    rules: &FieldRules,
    match_id: i32,
) -> Result<Vec<PowerplayRecord>, IngestError> {
    let mut records = Vec::new();

    for (innings_index, inning) in root.get("innings").elements().iter().enumerate() {
        for powerplay in inning.get("powerplays").elements() {
            records.push(PowerplayRecord {
                match_id,
                innings_number: innings_index as i32 + 1,
                from_over: rules.decimal(&powerplay.get("from"))?,
                to_over: rules.decimal(&powerplay.get("to"))?,
                powerplay_type: rules.text(&powerplay.get("type"))?,
            });
        }
    }

    debug!("Extracted {} powerplays", records.len());

    Ok(records)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::extract_powerplays;
    use crate::server::{
        error::ingest::IngestError,
        scorecard::{node::Document, rules::FieldRules},
    };

    /// Expect powerplays to keep fractional overs and their innings number
    #[test]
    fn extracts_powerplays_per_innings() -> Result<(), IngestError> {
        let document = Document::from(json!({
            "innings": [
                { "powerplays": [{ "from": 0.1, "to": 5.6, "type": "mandatory" }] },
                { "powerplays": [
                    { "from": 0.1, "to": 9.6, "type": "mandatory" },
                    { "from": 35.1, "to": 39.4, "type": "batting" }
                ]}
            ]
        }));

        let powerplays = extract_powerplays(&document.root(), &FieldRules::default(), 4)?;

        assert_eq!(powerplays.len(), 3);
        assert_eq!(powerplays[0].innings_number, 1);
        assert_eq!(powerplays[0].to_over, 5.6);
        assert_eq!(powerplays[0].powerplay_type, "mandatory");
        assert_eq!(powerplays[2].innings_number, 2);
        assert_eq!(powerplays[2].from_over, 35.1);
        assert_eq!(powerplays[2].to_over, 39.4);
        assert_eq!(powerplays[2].powerplay_type, "batting");
        assert!(powerplays.iter().all(|p| p.match_id == 4));

        Ok(())
    }

    /// Expect missing bounds and type to take their configured defaults
    #[test]
    fn applies_field_defaults() -> Result<(), IngestError> {
        let document = Document::from(json!({
            "innings": [{ "powerplays": [{ "from": 0.1 }] }]
        }));
        let rules = FieldRules::default()
            .with_decimal_default("innings.powerplays.to", 6.0)
            .with_text_default("innings.powerplays.type", "unknown");

        let powerplays = extract_powerplays(&document.root(), &rules, 1)?;

        assert_eq!(powerplays[0].to_over, 6.0);
        assert_eq!(powerplays[0].powerplay_type, "unknown");

        Ok(())
    }
}
