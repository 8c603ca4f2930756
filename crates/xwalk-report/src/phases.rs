//! phase_summary.csv writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use xwalk_model::PhaseSummary;

pub const PHASE_SUMMARY_COLUMNS: [&str; 6] = [
    "phase",
    "pairs",
    "matched_units",
    "matched_generators",
    "remaining_units",
    "remaining_generators",
];

pub fn write_phase_summary<W: Write>(out: W, phases: &[PhaseSummary]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
    writer
        .write_record(PHASE_SUMMARY_COLUMNS)
        .context("write phase summary header")?;
    for summary in phases {
        writer
            .write_record([
                summary.phase.clone(),
                summary.pairs.to_string(),
                summary.matched_units.to_string(),
                summary.matched_generators.to_string(),
                summary.remaining_units.to_string(),
                summary.remaining_generators.to_string(),
            ])
            .with_context(|| format!("write phase summary row for {}", summary.phase))?;
    }
    writer.flush().context("flush phase summary")?;
    Ok(())
}

/// The phase summary as CSV text.
pub fn render_phase_summary(phases: &[PhaseSummary]) -> Result<String> {
    let mut buffer = Vec::new();
    write_phase_summary(&mut buffer, phases)?;
    String::from_utf8(buffer).context("phase summary is not UTF-8")
}

pub fn write_phase_summary_csv(path: &Path, phases: &[PhaseSummary]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_phase_summary(file, phases).with_context(|| format!("write {}", path.display()))
}
