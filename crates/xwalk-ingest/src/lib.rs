//! Input table ingestion for the unit crosswalk.
//!
//! Loads the regulatory unit inventory, the market generator inventory, and
//! the facility-key correction table from CSV files into typed records.
//! Every cell is read as text so identifiers keep their exact spelling.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use xwalk_ingest::{load_market_generators, load_regulatory_units};
//!
//! let units = load_regulatory_units(Path::new("data/camd_units.csv"))?;
//! let generators = load_market_generators(Path::new("data/eia_generators.csv"))?;
//! ```

mod csv;
mod error;
mod loaders;
mod polars_utils;
pub mod schema;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{read_csv_table, read_text_table};

// === Record Loading ===
pub use loaders::{
    facility_corrections_from_frame, load_facility_corrections, load_market_generators,
    load_regulatory_units, market_generators_from_frame, parse_date, regulatory_units_from_frame,
};
