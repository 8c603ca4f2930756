//! Output relation of the linkage engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{MarketGenerator, MatchType, RegulatoryUnit};

/// One row of the crosswalk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrosswalkEntry {
    pub match_type: MatchType,
    pub unit: RegulatoryUnit,
    /// Absent for terminally classified rows.
    pub generator: Option<MarketGenerator>,
    /// Rows in the crosswalk that reference the same regulatory record.
    pub unit_match_count: usize,
    /// Rows in the crosswalk that reference the same market record (0 when unmatched).
    pub generator_match_count: usize,
}

impl CrosswalkEntry {
    pub fn plant_id_corrected(&self) -> bool {
        self.generator
            .as_ref()
            .is_some_and(|generator| generator.plant_id_corrected)
    }

    /// True when either side of the row participates in more than one row.
    pub fn is_fan_out(&self) -> bool {
        self.unit_match_count > 1 || self.generator_match_count > 1
    }
}

/// Progress counters recorded after one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSummary {
    pub phase: String,
    /// Pairs accepted in this phase (fan-out included).
    pub pairs: usize,
    /// Distinct regulatory records matched for the first time in this phase.
    pub matched_units: usize,
    /// Distinct market records matched for the first time in this phase.
    pub matched_generators: usize,
    pub remaining_units: usize,
    pub remaining_generators: usize,
}

/// Record counts observed outside the cascade phases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    pub input_units: usize,
    pub eligible_units: usize,
    pub input_generators: usize,
    pub corrected_generators: usize,
    /// Market records removed by the fuel exclusion before the fuzzy phases.
    pub excluded_generators: usize,
}

impl LinkStats {
    pub fn ineligible_units(&self) -> usize {
        self.input_units.saturating_sub(self.eligible_units)
    }
}

/// The assembled crosswalk with its per-phase summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Crosswalk {
    pub year: i32,
    pub entries: Vec<CrosswalkEntry>,
    pub phases: Vec<PhaseSummary>,
    pub stats: LinkStats,
}

impl Crosswalk {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Row counts per label, including labels with zero rows.
    pub fn match_type_counts(&self) -> BTreeMap<MatchType, usize> {
        let mut counts: BTreeMap<MatchType, usize> =
            MatchType::all().map(|match_type| (match_type, 0)).collect();
        for entry in &self.entries {
            *counts.entry(entry.match_type).or_insert(0) += 1;
        }
        counts
    }

    pub fn entries_of(&self, match_type: MatchType) -> impl Iterator<Item = &CrosswalkEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.match_type == match_type)
    }

    pub fn fan_out_rows(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_fan_out()).count()
    }
}
