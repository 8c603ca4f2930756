//! Source records from the two inventories.
//!
//! Records are built once by the ingest layer and never modified by the
//! engine. The one sanctioned rewrite, the facility-key correction on the
//! market side, produces a new value through [`MarketGenerator::with_corrected_plant_id`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{FacilityId, OperatingStatus};

/// One boiler/generator row from the regulatory (emissions) inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryUnit {
    /// Record number within the source table (1-based, excluding header).
    pub row: usize,
    pub facility_id: FacilityId,
    /// Local boiler/unit identifier.
    pub unit_id: String,
    /// Local generator identifier; the value compared against the market side.
    pub generator_id: Option<String>,
    pub state: Option<String>,
    pub facility_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub primary_fuel: Option<String>,
    pub capacity_mw: Option<f64>,
    pub operating_status: OperatingStatus,
    pub status_date: NaiveDate,
}

impl RegulatoryUnit {
    pub fn new(
        row: usize,
        facility_id: FacilityId,
        unit_id: impl Into<String>,
        operating_status: OperatingStatus,
        status_date: NaiveDate,
    ) -> Self {
        Self {
            row,
            facility_id,
            unit_id: unit_id.into(),
            generator_id: None,
            state: None,
            facility_name: None,
            latitude: None,
            longitude: None,
            primary_fuel: None,
            capacity_mw: None,
            operating_status,
            status_date,
        }
    }

    #[must_use]
    pub fn with_generator_id(mut self, generator_id: impl Into<String>) -> Self {
        self.generator_id = Some(generator_id.into());
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use]
    pub fn with_facility_name(mut self, name: impl Into<String>) -> Self {
        self.facility_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_primary_fuel(mut self, fuel: impl Into<String>) -> Self {
        self.primary_fuel = Some(fuel.into());
        self
    }

    #[must_use]
    pub fn with_capacity_mw(mut self, capacity: f64) -> Self {
        self.capacity_mw = Some(capacity);
        self
    }

    #[must_use]
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// The generator identifier, or `None` when it is absent or blank.
    pub fn generator_key(&self) -> Option<&str> {
        non_blank(self.generator_id.as_deref())
    }
}

/// One generator row from the electricity-market inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketGenerator {
    /// Record number within the source table (1-based, excluding header).
    pub row: usize,
    /// Facility key used for linkage (after correction).
    pub plant_id: FacilityId,
    /// Facility key exactly as reported, kept for traceability.
    pub original_plant_id: FacilityId,
    /// True when `plant_id` was rewritten by the correction table.
    pub plant_id_corrected: bool,
    pub generator_id: String,
    pub state: Option<String>,
    pub plant_name: Option<String>,
    pub prime_mover: Option<String>,
    /// Primary energy-source code (e.g. `NG`, `BIT`, `SUN`).
    pub energy_source: String,
    pub nameplate_mw: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl MarketGenerator {
    pub fn new(
        row: usize,
        plant_id: FacilityId,
        generator_id: impl Into<String>,
        energy_source: impl Into<String>,
    ) -> Self {
        Self {
            row,
            plant_id,
            original_plant_id: plant_id,
            plant_id_corrected: false,
            generator_id: generator_id.into(),
            state: None,
            plant_name: None,
            prime_mover: None,
            energy_source: energy_source.into(),
            nameplate_mw: None,
            latitude: None,
            longitude: None,
        }
    }

    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use]
    pub fn with_plant_name(mut self, name: impl Into<String>) -> Self {
        self.plant_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_prime_mover(mut self, prime_mover: impl Into<String>) -> Self {
        self.prime_mover = Some(prime_mover.into());
        self
    }

    #[must_use]
    pub fn with_nameplate_mw(mut self, capacity: f64) -> Self {
        self.nameplate_mw = Some(capacity);
        self
    }

    #[must_use]
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Rewrite the linkage facility key, keeping the reported key and
    /// marking the record as corrected.
    #[must_use]
    pub fn with_corrected_plant_id(mut self, plant_id: FacilityId) -> Self {
        self.plant_id = plant_id;
        self.plant_id_corrected = true;
        self
    }

    /// The generator identifier, or `None` when it is blank.
    pub fn generator_key(&self) -> Option<&str> {
        non_blank(Some(self.generator_id.as_str()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
