//! Match official extraction from `info.officials`.

use tracing::debug;

use crate::server::{
    error::ingest::IngestError,
    model::scorecard::OfficialRecord,
    scorecard::{node::Node, rules::FieldRules},
};

/// Keys under `info.officials` recognised as official types. Any other key is ignored.
pub const OFFICIAL_TYPES: [&str; 5] = [
    "umpires",
    "tv_umpires",
    "reserve_umpires",
    "match_referees",
    "referee",
];

/// Extracts match officials, one record per listed name, typed by the key it was listed under.
pub fn extract_officials(
    root: &Node<'_>,
    rules: &FieldRules,
    match_id: i32,
) -> Result<Vec<OfficialRecord>, IngestError> {
    let officials = root.get("info").get("officials");
    let mut records = Vec::new();

    for official_type in OFFICIAL_TYPES {
        let names = officials.get(official_type);
        if !names.is_array() {
            continue;
        }

        for name in names.elements() {
            records.push(OfficialRecord {
                match_id,
                official_type: official_type.to_string(),
                name: rules.text(&name)?,
            });
        }
    }

    debug!("Extracted {} officials", records.len());

    Ok(records)
}
