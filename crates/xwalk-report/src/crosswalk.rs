//! crosswalk.csv writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use xwalk_model::{Crosswalk, CrosswalkEntry};

/// Output columns, in order.
pub const CROSSWALK_COLUMNS: [&str; 24] = [
    "match_type",
    "facility_id",
    "unit_id",
    "generator_id",
    "state",
    "facility_name",
    "primary_fuel",
    "capacity_mw",
    "operating_status",
    "status_date",
    "latitude",
    "longitude",
    "market_plant_id",
    "market_original_plant_id",
    "market_generator_id",
    "market_plant_name",
    "market_prime_mover",
    "market_energy_source",
    "market_nameplate_mw",
    "market_latitude",
    "market_longitude",
    "plant_id_corrected",
    "unit_match_count",
    "generator_match_count",
];

/// Render one entry as text cells in [`CROSSWALK_COLUMNS`] order. Absent
/// values are empty strings.
pub fn crosswalk_record(entry: &CrosswalkEntry) -> Vec<String> {
    let unit = &entry.unit;
    let generator = entry.generator.as_ref();
    vec![
        entry.match_type.label().to_string(),
        unit.facility_id.to_string(),
        unit.unit_id.clone(),
        text(unit.generator_id.as_deref()),
        text(unit.state.as_deref()),
        text(unit.facility_name.as_deref()),
        text(unit.primary_fuel.as_deref()),
        number(unit.capacity_mw),
        unit.operating_status.to_string(),
        unit.status_date.format("%Y-%m-%d").to_string(),
        number(unit.latitude),
        number(unit.longitude),
        generator.map(|g| g.plant_id.to_string()).unwrap_or_default(),
        generator
            .map(|g| g.original_plant_id.to_string())
            .unwrap_or_default(),
        generator.map(|g| g.generator_id.clone()).unwrap_or_default(),
        text(generator.and_then(|g| g.plant_name.as_deref())),
        text(generator.and_then(|g| g.prime_mover.as_deref())),
        generator.map(|g| g.energy_source.clone()).unwrap_or_default(),
        number(generator.and_then(|g| g.nameplate_mw)),
        number(generator.and_then(|g| g.latitude)),
        number(generator.and_then(|g| g.longitude)),
        entry.plant_id_corrected().to_string(),
        entry.unit_match_count.to_string(),
        entry.generator_match_count.to_string(),
    ]
}

/// Write the crosswalk as CSV to any writer.
pub fn write_crosswalk<W: Write>(out: W, entries: &[CrosswalkEntry]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
    writer
        .write_record(CROSSWALK_COLUMNS)
        .context("write crosswalk header")?;
    for entry in entries {
        writer
            .write_record(crosswalk_record(entry))
            .with_context(|| format!("write crosswalk row for unit {}", entry.unit.row))?;
    }
    writer.flush().context("flush crosswalk")?;
    Ok(())
}

pub fn write_crosswalk_csv(path: &Path, crosswalk: &Crosswalk) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_crosswalk(file, &crosswalk.entries)
        .with_context(|| format!("write {}", path.display()))
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
