//! Regulatory-side eligibility filter.

use xwalk_model::{OperatingStatus, RegulatoryUnit};

use crate::options::ReportingYear;

/// True when the unit was active at some point during the reporting year:
/// operating since before January 1, or retired/cold-stored no earlier than
/// December 31 of the prior year.
pub fn is_eligible(unit: &RegulatoryUnit, year: ReportingYear) -> bool {
    match &unit.operating_status {
        OperatingStatus::Operating => unit.status_date < year.first_day(),
        status if status.is_inactive() => unit.status_date >= year.prior_year_end(),
        _ => false,
    }
}

/// Keep eligible units in input order; the rest never reach the output.
pub fn filter_eligible(units: Vec<RegulatoryUnit>, year: ReportingYear) -> Vec<RegulatoryUnit> {
    units
        .into_iter()
        .filter(|unit| is_eligible(unit, year))
        .collect()
}
