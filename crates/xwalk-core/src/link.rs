//! Entry point: corrected, filtered inputs in, crosswalk out.

use std::time::Instant;

use tracing::{info, info_span, warn};

use xwalk_model::{
    Crosswalk, FacilityCorrections, LinkStats, MarketGenerator, RegulatoryUnit, Result,
};

use crate::assemble::assemble;
use crate::cascade::run_cascade;
use crate::corrections::apply_corrections;
use crate::eligibility::filter_eligible;
use crate::options::LinkOptions;

/// The three input tables, already parsed and schema-checked.
#[derive(Debug, Clone, Default)]
pub struct LinkInput {
    pub units: Vec<RegulatoryUnit>,
    pub generators: Vec<MarketGenerator>,
    pub corrections: FacilityCorrections,
}

impl LinkInput {
    pub fn new(units: Vec<RegulatoryUnit>, generators: Vec<MarketGenerator>) -> Self {
        Self {
            units,
            generators,
            corrections: FacilityCorrections::default(),
        }
    }

    #[must_use]
    pub fn with_corrections(mut self, corrections: FacilityCorrections) -> Self {
        self.corrections = corrections;
        self
    }
}

/// Link regulatory units to market generators.
///
/// Fails only on configuration problems detected before the first phase.
/// Every eligible regulatory record appears in the result at least once.
pub fn link(input: LinkInput, options: &LinkOptions) -> Result<Crosswalk> {
    let year = options.reporting_year()?;
    let link_span = info_span!("link", year = year.year());
    let _link_guard = link_span.enter();
    let start = Instant::now();

    let LinkInput {
        units,
        generators,
        corrections,
    } = input;
    let input_units = units.len();
    let input_generators = generators.len();

    let generators = apply_corrections(generators, &corrections);
    let corrected_generators = generators
        .iter()
        .filter(|generator| generator.plant_id_corrected)
        .count();
    let units = filter_eligible(units, year);
    let eligible_units = units.len();
    info!(
        input_units,
        eligible_units,
        input_generators,
        corrected_generators,
        "inputs prepared"
    );

    let outcome = run_cascade(units, generators, options);
    let excluded_generators = outcome.excluded_generators.len();
    let entries = assemble(
        outcome.matched,
        outcome.residual_units,
        &options.non_grid_prefix,
    );

    let crosswalk = Crosswalk {
        year: year.year(),
        entries,
        phases: outcome.summaries,
        stats: LinkStats {
            input_units,
            eligible_units,
            input_generators,
            corrected_generators,
            excluded_generators,
        },
    };

    let fan_out_rows = crosswalk.fan_out_rows();
    if fan_out_rows > 0 {
        warn!(
            fan_out_rows,
            "crosswalk contains records paired more than once; review match counts"
        );
    }
    info!(
        rows = crosswalk.len(),
        matched_rows = crosswalk
            .entries
            .iter()
            .filter(|entry| entry.match_type.is_match())
            .count(),
        unmatched_generators = outcome.residual_generators.len(),
        duration_ms = start.elapsed().as_millis(),
        "link complete"
    );
    Ok(crosswalk)
}
