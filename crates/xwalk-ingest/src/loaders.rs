//! Conversion of input tables into typed records.
//!
//! `*_from_frame` functions work on an already-loaded DataFrame and return
//! schema/configuration errors directly; `load_*` wrap them with file reading
//! and attach the path to any failure.

use std::path::Path;

use chrono::NaiveDate;
use polars::prelude::{Column, DataFrame};

use xwalk_model::{
    CrosswalkError, FacilityCorrections, FacilityId, MarketGenerator, OperatingStatus,
    RegulatoryUnit,
};

use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};
use crate::polars_utils::any_to_string_non_empty;
use crate::schema::{Field, TableColumns, corrections, market, regulatory};

/// Date layouts accepted for status dates.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

pub fn load_regulatory_units(path: &Path) -> Result<Vec<RegulatoryUnit>> {
    let df = read_csv_table(path)?;
    let units = regulatory_units_from_frame(&df).map_err(|source| invalid(path, source))?;
    tracing::info!(path = %path.display(), records = units.len(), "loaded regulatory units");
    Ok(units)
}

pub fn load_market_generators(path: &Path) -> Result<Vec<MarketGenerator>> {
    let df = read_csv_table(path)?;
    let generators = market_generators_from_frame(&df).map_err(|source| invalid(path, source))?;
    tracing::info!(path = %path.display(), records = generators.len(), "loaded market generators");
    Ok(generators)
}

pub fn load_facility_corrections(path: &Path) -> Result<FacilityCorrections> {
    let df = read_csv_table(path)?;
    let table = facility_corrections_from_frame(&df).map_err(|source| invalid(path, source))?;
    tracing::info!(path = %path.display(), records = table.len(), "loaded facility-key corrections");
    Ok(table)
}

pub fn regulatory_units_from_frame(
    df: &DataFrame,
) -> std::result::Result<Vec<RegulatoryUnit>, CrosswalkError> {
    let columns = TableColumns::new(regulatory::TABLE, df);
    columns.check(&regulatory::ALL)?;
    let reader = RowReader::new(regulatory::TABLE, &columns);

    let facility_col = columns.required(regulatory::FACILITY_ID)?;
    let unit_col = columns.required(regulatory::UNIT_ID)?;
    let status_col = columns.required(regulatory::OPERATING_STATUS)?;
    let date_col = columns.required(regulatory::STATUS_DATE)?;

    let mut units = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let row = idx + 1;
        let facility_id = reader.facility(facility_col, regulatory::FACILITY_ID, idx)?;
        let unit_id = reader.text_required(unit_col, regulatory::UNIT_ID, idx)?;
        let Ok(status) = reader
            .text_required(status_col, regulatory::OPERATING_STATUS, idx)?
            .parse::<OperatingStatus>();
        let status_date = reader.date(date_col, regulatory::STATUS_DATE, idx)?;

        let mut unit = RegulatoryUnit::new(row, facility_id, unit_id, status, status_date);
        unit.generator_id = reader.text(regulatory::GENERATOR_ID, idx)?;
        unit.state = reader.text(regulatory::STATE, idx)?;
        unit.facility_name = reader.text(regulatory::FACILITY_NAME, idx)?;
        unit.latitude = reader.number(regulatory::LATITUDE, idx)?;
        unit.longitude = reader.number(regulatory::LONGITUDE, idx)?;
        unit.primary_fuel = reader.text(regulatory::PRIMARY_FUEL, idx)?;
        unit.capacity_mw = reader.number(regulatory::CAPACITY_MW, idx)?;
        units.push(unit);
    }
    Ok(units)
}

pub fn market_generators_from_frame(
    df: &DataFrame,
) -> std::result::Result<Vec<MarketGenerator>, CrosswalkError> {
    let columns = TableColumns::new(market::TABLE, df);
    columns.check(&market::ALL)?;
    let reader = RowReader::new(market::TABLE, &columns);

    let plant_col = columns.required(market::PLANT_ID)?;
    let generator_col = columns.required(market::GENERATOR_ID)?;
    let fuel_col = columns.required(market::ENERGY_SOURCE)?;

    let mut generators = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let row = idx + 1;
        let plant_id = reader.facility(plant_col, market::PLANT_ID, idx)?;
        // A blank market id is kept; it can never satisfy a rule.
        let generator_id = reader.cell(generator_col, idx)?.unwrap_or_default();
        let energy_source = reader
            .cell(fuel_col, idx)?
            .unwrap_or_default()
            .to_ascii_uppercase();

        let mut generator = MarketGenerator::new(row, plant_id, generator_id, energy_source);
        generator.state = reader.text(market::STATE, idx)?;
        generator.plant_name = reader.text(market::PLANT_NAME, idx)?;
        generator.prime_mover = reader.text(market::PRIME_MOVER, idx)?;
        generator.nameplate_mw = reader.number(market::NAMEPLATE_MW, idx)?;
        generator.latitude = reader.number(market::LATITUDE, idx)?;
        generator.longitude = reader.number(market::LONGITUDE, idx)?;
        generators.push(generator);
    }
    Ok(generators)
}

/// Any defect in the correction table is a configuration error.
pub fn facility_corrections_from_frame(
    df: &DataFrame,
) -> std::result::Result<FacilityCorrections, CrosswalkError> {
    let columns = TableColumns::new(corrections::TABLE, df);
    columns.check(&corrections::ALL).map_err(as_configuration)?;
    let reader = RowReader::new(corrections::TABLE, &columns);

    let from_col = columns
        .required(corrections::MARKET_ID)
        .map_err(as_configuration)?;
    let to_col = columns
        .required(corrections::REGULATORY_ID)
        .map_err(as_configuration)?;

    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let from = reader
            .facility(from_col, corrections::MARKET_ID, idx)
            .map_err(as_configuration)?;
        let to = reader
            .facility(to_col, corrections::REGULATORY_ID, idx)
            .map_err(as_configuration)?;
        rows.push((idx + 1, from, to));
    }
    FacilityCorrections::from_rows(rows)
}

fn invalid(path: &Path, source: CrosswalkError) -> IngestError {
    IngestError::Invalid {
        path: path.to_path_buf(),
        source,
    }
}

fn as_configuration(err: CrosswalkError) -> CrosswalkError {
    match err {
        CrosswalkError::Configuration { .. } => err,
        other => CrosswalkError::configuration(format!("malformed correction table: {other}")),
    }
}

/// Typed cell access for one table.
struct RowReader<'a, 'df> {
    table: &'static str,
    columns: &'a TableColumns<'df>,
}

impl<'a, 'df> RowReader<'a, 'df> {
    fn new(table: &'static str, columns: &'a TableColumns<'df>) -> Self {
        Self { table, columns }
    }

    fn cell(&self, column: &Column, idx: usize) -> std::result::Result<Option<String>, CrosswalkError> {
        let value = column.get(idx).map_err(|e| CrosswalkError::InvalidValue {
            table: self.table.to_string(),
            row: idx + 1,
            field: column.name().to_string(),
            value: e.to_string(),
        })?;
        Ok(any_to_string_non_empty(value))
    }

    fn text(&self, field: Field, idx: usize) -> std::result::Result<Option<String>, CrosswalkError> {
        match self.columns.optional(field) {
            Some(column) => self.cell(column, idx),
            None => Ok(None),
        }
    }

    fn text_required(
        &self,
        column: &Column,
        field: Field,
        idx: usize,
    ) -> std::result::Result<String, CrosswalkError> {
        self.cell(column, idx)?
            .ok_or_else(|| self.invalid_value(field, idx, String::new()))
    }

    fn facility(
        &self,
        column: &Column,
        field: Field,
        idx: usize,
    ) -> std::result::Result<FacilityId, CrosswalkError> {
        let raw = self.text_required(column, field, idx)?;
        raw.parse::<FacilityId>()
            .map_err(|_| self.invalid_value(field, idx, raw))
    }

    fn number(&self, field: Field, idx: usize) -> std::result::Result<Option<f64>, CrosswalkError> {
        let Some(raw) = self.text(field, idx)? else {
            return Ok(None);
        };
        match raw.replace(',', "").parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            _ => Err(self.invalid_value(field, idx, raw)),
        }
    }

    fn date(
        &self,
        column: &Column,
        field: Field,
        idx: usize,
    ) -> std::result::Result<NaiveDate, CrosswalkError> {
        let raw = self.text_required(column, field, idx)?;
        parse_date(&raw).ok_or_else(|| self.invalid_value(field, idx, raw))
    }

    fn invalid_value(&self, field: Field, idx: usize, value: String) -> CrosswalkError {
        CrosswalkError::InvalidValue {
            table: self.table.to_string(),
            row: idx + 1,
            field: field.name.to_string(),
            value,
        }
    }
}

/// Parse a status date in any of the accepted layouts.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    // Timestamps exported as "2019-06-30 00:00:00" keep only the date part.
    let date_part = trimmed.split_whitespace().next().unwrap_or(trimmed);
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_known_layouts() {
        let expected = NaiveDate::from_ymd_opt(2019, 6, 30);
        assert_eq!(parse_date("2019-06-30"), expected);
        assert_eq!(parse_date("06/30/2019"), expected);
        assert_eq!(parse_date("2019-06-30 00:00:00"), expected);
        assert_eq!(parse_date("30.06.2019"), None);
    }
}
