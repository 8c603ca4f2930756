use std::fmt;
use std::str::FromStr;

use crate::CrosswalkError;

/// Numeric plant/facility identifier shared (nominally) by both inventories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct FacilityId(u32);

impl FacilityId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// True for six-digit keys starting with `prefix`, the range reserved for
    /// facilities that are not connected to the grid.
    pub fn is_non_grid(self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return false;
        }
        let text = self.0.to_string();
        text.len() == 6 && text.starts_with(prefix)
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FacilityId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for FacilityId {
    type Err = CrosswalkError;

    /// Accepts plain integers and whole-number decimals such as `"3.0"`,
    /// which spreadsheet exports produce for integer columns.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u32>() {
            return Ok(Self(value));
        }
        match trimmed.parse::<f64>() {
            Ok(value)
                if value.is_finite()
                    && value >= 0.0
                    && value.fract() == 0.0
                    && value <= f64::from(u32::MAX) =>
            {
                Ok(Self(value as u32))
            }
            _ => Err(CrosswalkError::InvalidValue {
                table: "facility key".to_string(),
                row: 0,
                field: "facility_id".to_string(),
                value: s.to_string(),
            }),
        }
    }
}
