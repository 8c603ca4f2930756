//! Facility-key normalization on the market side.

use xwalk_model::{FacilityCorrections, MarketGenerator};

/// Rewrite the facility key of one market record if the table lists it.
///
/// Any listed key is flagged, including one the table maps to itself. The
/// lookup uses the current key, so a record whose key was already rewritten
/// is left alone unless its new key is itself a table entry.
pub fn correct_generator(
    generator: MarketGenerator,
    corrections: &FacilityCorrections,
) -> MarketGenerator {
    match corrections.lookup(generator.plant_id) {
        Some(mapped) => generator.with_corrected_plant_id(mapped),
        None => generator,
    }
}

/// Apply the correction table to every market record. Keys absent from the
/// table need no correction and pass through unflagged.
pub fn apply_corrections(
    generators: Vec<MarketGenerator>,
    corrections: &FacilityCorrections,
) -> Vec<MarketGenerator> {
    if corrections.is_empty() {
        return generators;
    }
    generators
        .into_iter()
        .map(|generator| correct_generator(generator, corrections))
        .collect()
}
