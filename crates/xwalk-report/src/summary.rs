//! run_summary.json.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use xwalk_model::{Crosswalk, LinkStats, MatchType, PhaseSummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTypeCount {
    pub match_type: MatchType,
    pub rows: usize,
}

/// Whole-run counters written next to the crosswalk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub year: i32,
    pub rows: usize,
    pub matched_rows: usize,
    /// Rows whose regulatory or market record appears in more than one row.
    pub fan_out_rows: usize,
    pub stats: LinkStats,
    /// Every label in output order, zero counts included.
    pub match_types: Vec<MatchTypeCount>,
    pub phases: Vec<PhaseSummary>,
}

impl RunSummary {
    pub fn from_crosswalk(crosswalk: &Crosswalk) -> Self {
        let counts = crosswalk.match_type_counts();
        let match_types = MatchType::all()
            .map(|match_type| MatchTypeCount {
                match_type,
                rows: counts.get(&match_type).copied().unwrap_or_default(),
            })
            .collect();
        Self {
            year: crosswalk.year,
            rows: crosswalk.len(),
            matched_rows: crosswalk
                .entries
                .iter()
                .filter(|entry| entry.match_type.is_match())
                .count(),
            fan_out_rows: crosswalk.fan_out_rows(),
            stats: crosswalk.stats.clone(),
            match_types,
            phases: crosswalk.phases.clone(),
        }
    }
}

pub fn write_run_summary_json(path: &Path, summary: &RunSummary) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary)
        .with_context(|| format!("write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))
}
