//! Cascade controller.
//!
//! Threads the residual pools through the phases in order. Each phase is a
//! pure function of the pools it receives; the controller only accumulates
//! the matched sets and the per-phase counters.

use std::time::Instant;

use tracing::{info, info_span};

use xwalk_model::{MarketGenerator, Phase, PhaseSummary, RegulatoryUnit};

use crate::options::LinkOptions;
use crate::phase::{MatchedPair, run_phase};
use crate::rule::rule_for;

/// Controller states. `Pending` moves to the first phase once inputs are
/// filtered; `Terminal` follows the last phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeState {
    Pending,
    Running(Phase),
    Terminal,
}

impl CascadeState {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            CascadeState::Pending => CascadeState::Running(Phase::Step1),
            CascadeState::Running(phase) => {
                phase.next().map_or(CascadeState::Terminal, CascadeState::Running)
            }
            CascadeState::Terminal => CascadeState::Terminal,
        }
    }
}

/// Matched sets of one phase, frozen once the phase completes.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseMatches {
    pub phase: Phase,
    pub pairs: Vec<MatchedPair>,
}

/// Everything the cascade produces before terminal classification.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeOutcome {
    /// One entry per phase, in phase order.
    pub matched: Vec<PhaseMatches>,
    pub summaries: Vec<PhaseSummary>,
    /// Regulatory records left after the last phase.
    pub residual_units: Vec<RegulatoryUnit>,
    /// Market records left after the last phase (excluded fuels removed).
    pub residual_generators: Vec<MarketGenerator>,
    /// Market records dropped by the fuel exclusion.
    pub excluded_generators: Vec<MarketGenerator>,
}

/// Run every phase over the eligible regulatory pool and the corrected market
/// pool.
///
/// Before the first loosened phase the market residual pool loses every
/// record whose energy source is in the exclusion set. This happens exactly
/// once.
pub fn run_cascade(
    units: Vec<RegulatoryUnit>,
    generators: Vec<MarketGenerator>,
    options: &LinkOptions,
) -> CascadeOutcome {
    let mut residual_units = units;
    let mut residual_generators = generators;
    let mut excluded_generators = Vec::new();
    let mut matched = Vec::with_capacity(Phase::ALL.len());
    let mut summaries = Vec::with_capacity(Phase::ALL.len());

    let mut state = CascadeState::Pending.next();
    while let CascadeState::Running(phase) = state {
        let phase_span = info_span!("phase", phase = %phase);
        let _phase_guard = phase_span.enter();
        let start = Instant::now();

        if phase == Phase::Step2a {
            let (kept, dropped): (Vec<_>, Vec<_>) = residual_generators
                .into_iter()
                .partition(|generator| !options.is_excluded_fuel(&generator.energy_source));
            info!(
                excluded_generators = dropped.len(),
                remaining_generators = kept.len(),
                "fuel exclusion applied"
            );
            residual_generators = kept;
            excluded_generators = dropped;
        }

        let outcome = run_phase(residual_units, residual_generators, rule_for(phase));
        let summary = PhaseSummary {
            phase: phase.label().to_string(),
            pairs: outcome.pairs.len(),
            matched_units: outcome.matched_units(),
            matched_generators: outcome.matched_generators(),
            remaining_units: outcome.residual_units.len(),
            remaining_generators: outcome.residual_generators.len(),
        };
        info!(
            pairs = summary.pairs,
            matched_units = summary.matched_units,
            remaining_units = summary.remaining_units,
            remaining_generators = summary.remaining_generators,
            duration_ms = start.elapsed().as_millis(),
            "phase complete"
        );

        residual_units = outcome.residual_units;
        residual_generators = outcome.residual_generators;
        matched.push(PhaseMatches {
            phase,
            pairs: outcome.pairs,
        });
        summaries.push(summary);
        state = state.next();
    }

    CascadeOutcome {
        matched,
        summaries,
        residual_units,
        residual_generators,
        excluded_generators,
    }
}
