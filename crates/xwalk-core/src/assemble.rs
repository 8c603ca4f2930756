//! Crosswalk assembly.

use std::collections::BTreeMap;

use xwalk_model::{CrosswalkEntry, MatchType, RegulatoryUnit};

use crate::cascade::PhaseMatches;
use crate::classify::classify;

/// Concatenate the matched sets in phase order, then the classified
/// leftovers, and fill in the per-record match counts. Nothing is
/// deduplicated.
pub fn assemble(
    matched: Vec<PhaseMatches>,
    residual_units: Vec<RegulatoryUnit>,
    non_grid_prefix: &str,
) -> Vec<CrosswalkEntry> {
    let mut entries: Vec<CrosswalkEntry> = matched
        .into_iter()
        .flat_map(|set| set.pairs)
        .map(|pair| CrosswalkEntry {
            match_type: MatchType::Matched(pair.phase),
            unit: pair.unit,
            generator: Some(pair.generator),
            unit_match_count: 0,
            generator_match_count: 0,
        })
        .collect();

    entries.extend(residual_units.into_iter().map(|unit| CrosswalkEntry {
        match_type: MatchType::Terminal(classify(&unit, non_grid_prefix)),
        unit,
        generator: None,
        unit_match_count: 0,
        generator_match_count: 0,
    }));

    fill_match_counts(&mut entries);
    entries
}

fn fill_match_counts(entries: &mut [CrosswalkEntry]) {
    let mut per_unit: BTreeMap<usize, usize> = BTreeMap::new();
    let mut per_generator: BTreeMap<usize, usize> = BTreeMap::new();
    for entry in entries.iter() {
        *per_unit.entry(entry.unit.row).or_default() += 1;
        if let Some(generator) = &entry.generator {
            *per_generator.entry(generator.row).or_default() += 1;
        }
    }
    for entry in entries.iter_mut() {
        entry.unit_match_count = per_unit.get(&entry.unit.row).copied().unwrap_or_default();
        entry.generator_match_count = entry
            .generator
            .as_ref()
            .and_then(|generator| per_generator.get(&generator.row).copied())
            .unwrap_or_default();
    }
}
