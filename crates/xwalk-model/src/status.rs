//! Operating status of a regulatory unit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating status as reported by the regulatory inventory.
///
/// Parsing folds case and punctuation so that `"Long-term Cold Storage"`,
/// `"LONG TERM COLD STORAGE"` and `"Long Term Cold Standby"` are the same
/// value. Unknown statuses are kept verbatim in [`OperatingStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatingStatus {
    Operating,
    Retired,
    LongTermColdStorage,
    Other(String),
}

impl OperatingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OperatingStatus::Operating => "Operating",
            OperatingStatus::Retired => "Retired",
            OperatingStatus::LongTermColdStorage => "Long-term Cold Storage",
            OperatingStatus::Other(value) => value,
        }
    }

    /// Retired and cold-storage units stopped running at their status date.
    pub fn is_inactive(&self) -> bool {
        matches!(
            self,
            OperatingStatus::Retired | OperatingStatus::LongTermColdStorage
        )
    }
}

impl fmt::Display for OperatingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatingStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        Ok(match key.as_str() {
            "operating" => OperatingStatus::Operating,
            "retired" => OperatingStatus::Retired,
            "longtermcoldstorage" | "longtermcoldstandby" => OperatingStatus::LongTermColdStorage,
            _ => OperatingStatus::Other(s.trim().to_string()),
        })
    }
}
