//! Run configuration for one linkage pass.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use xwalk_model::{CrosswalkError, Result};

/// Facility keys in this six-digit range belong to non-grid facilities.
pub const DEFAULT_NON_GRID_PREFIX: &str = "88";

/// Energy-source codes with no counterpart in the regulatory inventory.
///
/// Biomass, geothermal, municipal solid waste, purchased power, solar,
/// landfill gas, tire-derived fuel, hydro, wind, nuclear.
pub const DEFAULT_EXCLUDED_FUELS: [&str; 17] = [
    "AB", "BLQ", "OBG", "OBL", "OBS", "SLW", "WDL", "WDS", // biomass
    "GEO", "MSW", "PUR", "SUN", "LFG", "TDF", "WAT", "WND", "NUC",
];

/// Options that drive a linkage run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOptions {
    /// Target reporting year; required before any phase runs.
    pub year: Option<i32>,
    pub non_grid_prefix: String,
    /// Upper-cased energy-source codes removed before the loosened phases.
    pub excluded_fuels: BTreeSet<String>,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            year: None,
            non_grid_prefix: DEFAULT_NON_GRID_PREFIX.to_string(),
            excluded_fuels: DEFAULT_EXCLUDED_FUELS
                .iter()
                .map(|code| (*code).to_string())
                .collect(),
        }
    }
}

impl LinkOptions {
    pub fn for_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_non_grid_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.non_grid_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_excluded_fuels<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_fuels = codes
            .into_iter()
            .map(|code| code.as_ref().trim().to_ascii_uppercase())
            .collect();
        self
    }

    pub fn is_excluded_fuel(&self, code: &str) -> bool {
        self.excluded_fuels
            .contains(&code.trim().to_ascii_uppercase())
    }

    /// Resolve the target year, failing when it was never set.
    pub fn reporting_year(&self) -> Result<ReportingYear> {
        let year = self
            .year
            .ok_or_else(|| CrosswalkError::configuration("target reporting year is required"))?;
        ReportingYear::new(year)
    }
}

/// Date boundaries derived from the target reporting year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingYear {
    year: i32,
    first_day: NaiveDate,
    prior_year_end: NaiveDate,
}

impl ReportingYear {
    pub fn new(year: i32) -> Result<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, 1, 1);
        let prior_year_end = year
            .checked_sub(1)
            .and_then(|prior| NaiveDate::from_ymd_opt(prior, 12, 31));
        match (first_day, prior_year_end) {
            (Some(first_day), Some(prior_year_end)) => Ok(Self {
                year,
                first_day,
                prior_year_end,
            }),
            _ => Err(CrosswalkError::configuration(format!(
                "reporting year {year} is out of range"
            ))),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// January 1 of the reporting year.
    pub fn first_day(self) -> NaiveDate {
        self.first_day
    }

    /// December 31 of the year before.
    pub fn prior_year_end(self) -> NaiveDate {
        self.prior_year_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_year_is_configuration_error() {
        let err = LinkOptions::default().reporting_year().unwrap_err();
        assert!(matches!(err, CrosswalkError::Configuration { .. }));
    }

    #[test]
    fn reporting_year_boundaries() {
        let year = LinkOptions::for_year(2023).reporting_year().unwrap();
        assert_eq!(year.first_day(), NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(
            year.prior_year_end(),
            NaiveDate::from_ymd_opt(2022, 12, 31).unwrap()
        );
    }

    #[test]
    fn out_of_range_year_is_rejected() {
        assert!(ReportingYear::new(i32::MAX).is_err());
        assert!(ReportingYear::new(i32::MIN).is_err());
    }

    #[test]
    fn fuel_exclusion_ignores_case_and_whitespace() {
        let options = LinkOptions::for_year(2023);
        assert!(options.is_excluded_fuel(" sun "));
        assert!(options.is_excluded_fuel("NUC"));
        assert!(!options.is_excluded_fuel("NG"));

        let custom = options.with_excluded_fuels(["wnd"]);
        assert!(custom.is_excluded_fuel("WND"));
        assert!(!custom.is_excluded_fuel("SUN"));
    }
}
