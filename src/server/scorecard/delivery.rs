//! Delivery extraction.
//!
//! Deliveries appear either nested as `innings[].overs[].deliveries[]` or as a flat
//! top-level `deliveries[]` list. A document carrying both shapes is rejected rather than
//! merged.

use tracing::{debug, warn};

use crate::server::{
    error::ingest::IngestError,
    model::scorecard::DeliveryRecord,
    scorecard::{node::Node, rules::FieldRules},
};

/// Shape in which a document records its deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryShape {
    /// `innings[].overs[].deliveries[]`
    Nested,
    /// Top-level `deliveries[]`
    Flat,
    /// Neither shape is present
    Absent,
}

impl DeliveryShape {
    /// Detects the delivery shape of a document.
    ///
    /// # Returns
    /// - `Ok(DeliveryShape)` - The single shape present, or `Absent`
    /// - `Err(IngestError::Validation)` - Both `innings` and `deliveries` are lists
    pub fn detect(root: &Node<'_>) -> Result<Self, IngestError> {
        let innings = root.get("innings");
        let deliveries = root.get("deliveries");

        match (innings.is_array(), deliveries.is_array()) {
            (true, true) => Err(IngestError::validation(
                "deliveries",
                "document contains both nested `innings` and flat `deliveries`",
            )),
            (true, false) => Ok(Self::Nested),
            (false, true) => Ok(Self::Flat),
            (false, false) => Ok(Self::Absent),
        }
    }
}

/// Extracts every delivery of a match in innings, over and ball order.
pub fn extract_deliveries(
    root: &Node<'_>,
    rules: &FieldRules,
    match_id: i32,
) -> Result<Vec<DeliveryRecord>, IngestError> {
    let deliveries = match DeliveryShape::detect(root)? {
        DeliveryShape::Nested => extract_nested(&root.get("innings"), rules, match_id)?,
        DeliveryShape::Flat => extract_flat(&root.get("deliveries"), rules, match_id)?,
        DeliveryShape::Absent => {
            warn!("Scorecard has no deliveries");
            Vec::new()
        }
    };

    debug!("Extracted {} deliveries", deliveries.len());

    Ok(deliveries)
}

fn extract_nested(
    innings: &Node<'_>,
    rules: &FieldRules,
    match_id: i32,
) -> Result<Vec<DeliveryRecord>, IngestError> {
    let mut records = Vec::new();

    for (innings_index, inning) in innings.elements().iter().enumerate() {
        let innings_number = innings_index as i32 + 1;

        for over in inning.get("overs").elements() {
            let over_number = rules.integer(&over.get("over"))?;

            for delivery in over.get("deliveries").elements() {
                let runs = delivery.get("runs");
                let wicket = delivery.get("wickets").at(0);

                records.push(DeliveryRecord {
                    match_id,
                    innings_number,
                    over_number,
                    ball_number: rules.integer(&delivery.get("ball"))?,
                    batter: rules.text(&delivery.get("batter"))?,
                    bowler: rules.text(&delivery.get("bowler"))?,
                    non_striker: rules.text(&delivery.get("non_striker"))?,
                    runs_batter: rules.integer(&runs.get("batter"))?,
                    runs_extras: rules.integer(&runs.get("extras"))?,
                    runs_total: rules.integer(&runs.get("total"))?,
                    wicket_type: rules.text(&wicket.get("kind"))?,
                    player_out: rules.text(&wicket.get("player_out"))?,
                });
            }
        }
    }

    Ok(records)
}

fn extract_flat(
    deliveries: &Node<'_>,
    rules: &FieldRules,
    match_id: i32,
) -> Result<Vec<DeliveryRecord>, IngestError> {
    deliveries
        .elements()
        .iter()
        .map(|delivery| {
            Ok(DeliveryRecord {
                match_id,
                innings_number: rules.integer(&delivery.get("innings"))?,
                over_number: rules.integer(&delivery.get("over"))?,
                ball_number: rules.integer(&delivery.get("ball"))?,
                batter: rules.text(&delivery.get("batter"))?,
                bowler: rules.text(&delivery.get("bowler"))?,
                non_striker: rules.text(&delivery.get("non_striker"))?,
                runs_batter: rules.integer(&delivery.get("runs_batter"))?,
                runs_extras: rules.integer(&delivery.get("runs_extras"))?,
                runs_total: rules.integer(&delivery.get("runs_total"))?,
                wicket_type: rules.text(&delivery.get("wicket_type"))?,
                player_out: rules.text(&delivery.get("player_out"))?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{extract_deliveries, DeliveryShape};
    use crate::server::{
        error::ingest::{IngestError, IngestErrorKind},
        scorecard::{node::Document, rules::FieldRules},
    };

    /// Expect nested deliveries to take their over from the enclosing over
    #[test]
    fn extracts_nested_shape() -> Result<(), IngestError> {
        let document = Document::from(json!({
            "innings": [
                { "overs": [{ "over": 0, "deliveries": [
                    { "batter": "A", "bowler": "X", "non_striker": "B",
                      "runs": { "batter": 4, "extras": 0, "total": 4 } },
                    { "batter": "A", "bowler": "X", "non_striker": "B",
                      "runs": { "batter": 0, "extras": 1, "total": 1 } }
                ]}]},
                { "overs": [{ "over": 3, "deliveries": [
                    { "batter": "X", "bowler": "A", "non_striker": "Y",
                      "runs": { "batter": 0, "extras": 0, "total": 0 },
                      "wickets": [{ "kind": "bowled", "player_out": "X" }] }
                ]}]}
            ]
        }));

        let deliveries = extract_deliveries(&document.root(), &FieldRules::default(), 5)?;

        assert_eq!(deliveries.len(), 3);

        assert_eq!(deliveries[0].innings_number, 1);
        assert_eq!(deliveries[0].over_number, 0);
        assert_eq!(deliveries[0].ball_number, 0);
        assert_eq!(deliveries[0].runs_batter, 4);
        assert_eq!(deliveries[1].ball_number, 0);
        assert_eq!(deliveries[1].runs_extras, 1);

        assert_eq!(deliveries[2].innings_number, 2);
        assert_eq!(deliveries[2].over_number, 3);
        assert_eq!(deliveries[2].wicket_type, "bowled");
        assert_eq!(deliveries[2].player_out, "X");
        assert!(deliveries.iter().all(|d| d.match_id == 5));

        Ok(())
    }

    /// Expect an explicit ball number to be read per delivery
    #[test]
    fn reads_explicit_ball_number() -> Result<(), IngestError> {
        let document = Document::from(json!({
            "innings": [{ "overs": [{ "over": 1, "deliveries": [{ "ball": 6 }] }] }]
        }));

        let deliveries = extract_deliveries(&document.root(), &FieldRules::default(), 1)?;

        assert_eq!(deliveries[0].ball_number, 6);

        Ok(())
    }

    /// Expect an absent nested ball number to resolve through the configured default
    #[test]
    fn applies_ball_number_default() -> Result<(), IngestError> {
        let document = Document::from(json!({
            "innings": [{ "overs": [{ "over": 0, "deliveries": [{ "batter": "A" }, { "batter": "B" }] }] }]
        }));
        let rules =
            FieldRules::default().with_integer_default("innings.overs.deliveries.ball", -1);

        let deliveries = extract_deliveries(&document.root(), &rules, 1)?;

        assert_eq!(
            deliveries.iter().map(|d| d.ball_number).collect::<Vec<_>>(),
            vec![-1, -1]
        );

        Ok(())
    }

    /// Expect an absent nested ball number to fail when the field is required
    #[test]
    fn requires_ball_number_when_configured() {
        let document = Document::from(json!({
            "innings": [{ "overs": [{ "over": 0, "deliveries": [{ "batter": "A" }] }] }]
        }));
        let rules = FieldRules::default().require("innings.overs.deliveries.ball");

        let result = extract_deliveries(&document.root(), &rules, 1);

        match result {
            Err(err) => {
                assert_eq!(err.kind(), IngestErrorKind::Validation);
                assert!(err.to_string().contains("innings[0].overs[0].deliveries[0].ball"));
            }
            Ok(deliveries) => panic!("expected validation error, got {:?}", deliveries),
        }
    }

    /// Expect flat deliveries to read their flat keys
    #[test]
    fn extracts_flat_shape() -> Result<(), IngestError> {
        let document = Document::from(json!({
            "deliveries": [
                { "innings": 1, "over": 2, "ball": 3, "batter": "A", "bowler": "X",
                  "non_striker": "B", "runs_batter": 2, "runs_extras": 0, "runs_total": 2,
                  "wicket_type": "caught", "player_out": "A" }
            ]
        }));

        let deliveries = extract_deliveries(&document.root(), &FieldRules::default(), 9)?;

        assert_eq!(deliveries.len(), 1);
        let delivery = &deliveries[0];
        assert_eq!(delivery.innings_number, 1);
        assert_eq!(delivery.over_number, 2);
        assert_eq!(delivery.ball_number, 3);
        assert_eq!(delivery.runs_total, 2);
        assert_eq!(delivery.wicket_type, "caught");
        assert_eq!(delivery.player_out, "A");

        Ok(())
    }

    /// Expect a delivery without wicket information to default its wicket fields
    #[test]
    fn defaults_missing_wicket() -> Result<(), IngestError> {
        let document = Document::from(json!({
            "deliveries": [{ "over": 0, "ball": 1, "batter": "A", "runs_total": 1 }]
        }));

        let deliveries = extract_deliveries(&document.root(), &FieldRules::default(), 1)?;

        assert_eq!(deliveries[0].wicket_type, "");
        assert_eq!(deliveries[0].player_out, "");
        assert_eq!(deliveries[0].runs_batter, 0);

        Ok(())
    }

    /// Expect a document carrying both shapes to be rejected
    #[test]
    fn rejects_mixed_shapes() {
        let document = Document::from(json!({
            "innings": [],
            "deliveries": []
        }));

        let result = extract_deliveries(&document.root(), &FieldRules::default(), 1);

        assert!(matches!(
            result,
            Err(ref err) if err.kind() == IngestErrorKind::Validation
        ));
    }

    /// Expect shape detection to report absence when neither shape is a list
    #[test]
    fn detects_absent_shape() -> Result<(), IngestError> {
        let document = Document::from(json!({ "innings": "none" }));

        assert_eq!(DeliveryShape::detect(&document.root())?, DeliveryShape::Absent);
        assert!(extract_deliveries(&document.root(), &FieldRules::default(), 1)?.is_empty());

        Ok(())
    }
}
