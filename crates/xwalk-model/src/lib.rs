//! Data model for linking regulatory units to market generators.

pub mod corrections;
pub mod crosswalk;
pub mod error;
pub mod ids;
pub mod match_type;
pub mod records;
pub mod status;

pub use corrections::FacilityCorrections;
pub use crosswalk::{Crosswalk, CrosswalkEntry, LinkStats, PhaseSummary};
pub use error::{CrosswalkError, Result};
pub use ids::FacilityId;
pub use match_type::{MatchType, Phase, TerminalReason};
pub use records::{MarketGenerator, RegulatoryUnit};
pub use status::OperatingStatus;

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn unit(row: usize) -> RegulatoryUnit {
        RegulatoryUnit::new(
            row,
            FacilityId::new(3),
            "1",
            OperatingStatus::Operating,
            NaiveDate::from_ymd_opt(2001, 6, 1).unwrap(),
        )
    }

    #[test]
    fn match_type_counts_include_empty_labels() {
        let crosswalk = Crosswalk {
            year: 2023,
            entries: vec![CrosswalkEntry {
                match_type: MatchType::Terminal(TerminalReason::Unmatched),
                unit: unit(1),
                generator: None,
                unit_match_count: 1,
                generator_match_count: 0,
            }],
            phases: vec![],
            stats: LinkStats::default(),
        };
        let counts = crosswalk.match_type_counts();
        assert_eq!(counts.len(), 10);
        assert_eq!(counts[&MatchType::Matched(Phase::Step1)], 0);
        assert_eq!(counts[&MatchType::Terminal(TerminalReason::Unmatched)], 1);
    }

    #[test]
    fn entry_serializes_match_type_as_label() {
        let entry = CrosswalkEntry {
            match_type: MatchType::Matched(Phase::Step2a),
            unit: unit(1).with_generator_id("UN14"),
            generator: None,
            unit_match_count: 1,
            generator_match_count: 0,
        };
        let json = serde_json::to_value(&entry).expect("serialize entry");
        assert_eq!(json["match_type"], "Step 2a");
        let round: CrosswalkEntry = serde_json::from_value(json).expect("deserialize entry");
        assert_eq!(round, entry);
    }
}
