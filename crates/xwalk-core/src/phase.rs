//! Single-phase match executor.
//!
//! Every rule requires exact facility-key equality, so the market pool is
//! partitioned by facility key and each regulatory record is only compared
//! against its own facility's candidates. Partitions never interact; the
//! outcome does not depend on the order they are visited.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use xwalk_model::{FacilityId, MarketGenerator, Phase, RegulatoryUnit};

use crate::rule::MatchRule;

/// One accepted pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedPair {
    pub phase: Phase,
    pub unit: RegulatoryUnit,
    pub generator: MarketGenerator,
}

/// Result of one phase: the accepted pairs and both residual pools.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseOutcome {
    pub pairs: Vec<MatchedPair>,
    pub residual_units: Vec<RegulatoryUnit>,
    pub residual_generators: Vec<MarketGenerator>,
}

impl PhaseOutcome {
    /// Distinct regulatory records that found at least one partner.
    pub fn matched_units(&self) -> usize {
        distinct(self.pairs.iter().map(|pair| pair.unit.row))
    }

    /// Distinct market records that found at least one partner.
    pub fn matched_generators(&self) -> usize {
        distinct(self.pairs.iter().map(|pair| pair.generator.row))
    }
}

/// Pair every regulatory record with every market record in the same
/// facility whose identifiers satisfy the rule.
///
/// Non-injective rules can pair one record with several partners; all of
/// those pairs are kept. Records without a generator key are never paired.
/// Pairs are ordered by regulatory record, then by market record, following
/// input order.
pub fn run_phase(
    units: Vec<RegulatoryUnit>,
    generators: Vec<MarketGenerator>,
    rule: &MatchRule,
) -> PhaseOutcome {
    let mut by_facility: BTreeMap<FacilityId, Vec<usize>> = BTreeMap::new();
    for (idx, generator) in generators.iter().enumerate() {
        by_facility.entry(generator.plant_id).or_default().push(idx);
    }

    let mut generator_matched = vec![false; generators.len()];
    let mut pairs = Vec::new();
    let mut residual_units = Vec::new();

    for unit in units {
        let candidates = match (unit.generator_key(), by_facility.get(&unit.facility_id)) {
            (Some(key), Some(bucket)) => bucket
                .iter()
                .copied()
                .filter(|&idx| {
                    generators[idx]
                        .generator_key()
                        .is_some_and(|other| rule.matches(key, other))
                })
                .collect::<Vec<_>>(),
            _ => Vec::new(),
        };

        if candidates.is_empty() {
            residual_units.push(unit);
            continue;
        }
        if candidates.len() > 1 {
            warn!(
                phase = %rule.phase,
                facility_id = %unit.facility_id,
                unit_id = %unit.unit_id,
                row = unit.row,
                candidates = candidates.len(),
                "regulatory record paired with several market records"
            );
        }
        for &idx in &candidates {
            generator_matched[idx] = true;
            pairs.push(MatchedPair {
                phase: rule.phase,
                unit: unit.clone(),
                generator: generators[idx].clone(),
            });
        }
    }

    let residual_generators: Vec<MarketGenerator> = generators
        .into_iter()
        .zip(generator_matched)
        .filter_map(|(generator, matched)| (!matched).then_some(generator))
        .collect();

    let outcome = PhaseOutcome {
        pairs,
        residual_units,
        residual_generators,
    };
    warn_generator_fan_out(&outcome, rule.phase);
    debug!(
        phase = %rule.phase,
        facilities = by_facility.len(),
        pairs = outcome.pairs.len(),
        "phase pairs computed"
    );
    outcome
}

fn warn_generator_fan_out(outcome: &PhaseOutcome, phase: Phase) {
    let mut per_generator: BTreeMap<usize, usize> = BTreeMap::new();
    for pair in &outcome.pairs {
        *per_generator.entry(pair.generator.row).or_default() += 1;
    }
    for (row, count) in per_generator.into_iter().filter(|(_, count)| *count > 1) {
        warn!(
            phase = %phase,
            row,
            candidates = count,
            "market record paired with several regulatory records"
        );
    }
}

fn distinct(rows: impl Iterator<Item = usize>) -> usize {
    let mut rows: Vec<usize> = rows.collect();
    rows.sort_unstable();
    rows.dedup();
    rows.len()
}
