//! Terminal classification of records no phase could pair.

use xwalk_model::{RegulatoryUnit, TerminalReason};

/// Reason code for a leftover regulatory record. A non-grid facility key
/// takes precedence over a missing identifier.
pub fn classify(unit: &RegulatoryUnit, non_grid_prefix: &str) -> TerminalReason {
    if unit.facility_id.is_non_grid(non_grid_prefix) {
        TerminalReason::NotGridConnected
    } else if unit.generator_key().is_none() {
        TerminalReason::NoIdentifier
    } else {
        TerminalReason::Unmatched
    }
}
