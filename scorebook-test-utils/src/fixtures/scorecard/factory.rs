//! Ready-made scorecard documents.

use super::ScorecardFactory;

/// A complete nested-shape scorecard: two teams of two players, one innings of one over
/// with two deliveries, one umpire and one powerplay.
pub fn nested_scorecard() -> ScorecardFactory {
    ScorecardFactory::new()
        .with_team("India", &["RG Sharma", "V Kohli"])
        .with_team("Pakistan", &["Babar Azam", "Shaheen Shah Afridi"])
        .with_innings(
            0,
            &[
                ("RG Sharma", "Shaheen Shah Afridi", 4),
                ("RG Sharma", "Shaheen Shah Afridi", 0),
            ],
        )
        .with_official("umpires", "RA Kettleborough")
}

/// A scorecard using the top-level team list and flat delivery list shapes.
pub fn flat_scorecard() -> ScorecardFactory {
    ScorecardFactory::new()
        .with_listed_team("England", &["JE Root", "BA Stokes"])
        .with_listed_team("Australia", &["SPD Smith"])
        .with_flat_delivery(1, 0, 1, 1)
        .with_flat_delivery(1, 0, 2, 6)
        .with_flat_delivery(1, 0, 3, 0)
        .with_official("umpires", "Aleem Dar")
        .with_official("match_referees", "J Srinath")
}
