//! Output generation for the unit crosswalk.
//!
//! - **crosswalk.csv**: one row per crosswalk entry, every value written as
//!   text so identifiers like `02` or `6-1` survive spreadsheet round trips
//! - **phase_summary.csv**: per-phase match counters
//! - **run_summary.json**: counters for the whole run

mod crosswalk;
mod phases;
mod summary;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use xwalk_model::Crosswalk;

pub use crosswalk::{CROSSWALK_COLUMNS, crosswalk_record, write_crosswalk, write_crosswalk_csv};
pub use phases::{
    PHASE_SUMMARY_COLUMNS, render_phase_summary, write_phase_summary, write_phase_summary_csv,
};
pub use summary::{MatchTypeCount, RunSummary, write_run_summary_json};

pub const CROSSWALK_FILE: &str = "crosswalk.csv";
pub const PHASE_SUMMARY_FILE: &str = "phase_summary.csv";
pub const RUN_SUMMARY_FILE: &str = "run_summary.json";

/// Paths written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub crosswalk: PathBuf,
    pub phase_summary: PathBuf,
    pub run_summary: PathBuf,
}

/// Write all three outputs into `output_dir`, creating it if needed.
pub fn write_outputs(output_dir: &Path, crosswalk: &Crosswalk) -> Result<OutputPaths> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let paths = OutputPaths {
        crosswalk: output_dir.join(CROSSWALK_FILE),
        phase_summary: output_dir.join(PHASE_SUMMARY_FILE),
        run_summary: output_dir.join(RUN_SUMMARY_FILE),
    };
    write_crosswalk_csv(&paths.crosswalk, crosswalk)?;
    write_phase_summary_csv(&paths.phase_summary, &crosswalk.phases)?;
    write_run_summary_json(&paths.run_summary, &RunSummary::from_crosswalk(crosswalk))?;
    Ok(paths)
}
