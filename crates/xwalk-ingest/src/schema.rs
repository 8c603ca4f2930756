//! Input table schemas and column resolution.
//!
//! Header names are compared after folding case and dropping everything that
//! is not a letter or digit, so `facility_id`, `Facility ID` and `facilityId`
//! all resolve to the same field. Each field also lists the header spellings
//! used by the upstream inventories.

use polars::prelude::{Column, DataFrame};

use xwalk_model::CrosswalkError;

/// A named field with its accepted header spellings.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub required: bool,
}

impl Field {
    const fn required(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            name,
            aliases,
            required: true,
        }
    }

    const fn optional(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            name,
            aliases,
            required: false,
        }
    }

    fn accepts(&self, header: &str) -> bool {
        let header = header_key(header);
        header == header_key(self.name) || self.aliases.iter().any(|a| header == header_key(a))
    }
}

pub mod regulatory {
    use super::Field;

    pub const TABLE: &str = "regulatory units";

    pub const FACILITY_ID: Field = Field::required("facility_id", &["orispl code", "plant id"]);
    pub const UNIT_ID: Field = Field::required("unit_id", &[]);
    pub const GENERATOR_ID: Field =
        Field::optional("generator_id", &["associated generator", "gen id"]);
    pub const STATE: Field = Field::optional("state", &["state code"]);
    pub const FACILITY_NAME: Field = Field::optional("facility_name", &[]);
    pub const LATITUDE: Field = Field::optional("latitude", &[]);
    pub const LONGITUDE: Field = Field::optional("longitude", &[]);
    pub const PRIMARY_FUEL: Field = Field::optional("primary_fuel", &["primary fuel info"]);
    pub const CAPACITY_MW: Field = Field::optional("capacity_mw", &["nameplate capacity"]);
    pub const OPERATING_STATUS: Field = Field::required("operating_status", &["status"]);
    pub const STATUS_DATE: Field = Field::required("status_date", &["operating status date"]);

    pub const ALL: [Field; 11] = [
        FACILITY_ID,
        UNIT_ID,
        GENERATOR_ID,
        STATE,
        FACILITY_NAME,
        LATITUDE,
        LONGITUDE,
        PRIMARY_FUEL,
        CAPACITY_MW,
        OPERATING_STATUS,
        STATUS_DATE,
    ];
}

pub mod market {
    use super::Field;

    pub const TABLE: &str = "market generators";

    pub const PLANT_ID: Field = Field::required("plant_id", &["plant code"]);
    pub const GENERATOR_ID: Field = Field::required("generator_id", &[]);
    pub const STATE: Field = Field::optional("state", &[]);
    pub const PLANT_NAME: Field = Field::optional("plant_name", &[]);
    pub const PRIME_MOVER: Field = Field::optional("prime_mover", &[]);
    pub const ENERGY_SOURCE: Field = Field::required("energy_source", &["energy source 1"]);
    pub const NAMEPLATE_MW: Field =
        Field::optional("nameplate_mw", &["nameplate capacity (mw)"]);
    pub const LATITUDE: Field = Field::optional("latitude", &[]);
    pub const LONGITUDE: Field = Field::optional("longitude", &[]);

    pub const ALL: [Field; 9] = [
        PLANT_ID,
        GENERATOR_ID,
        STATE,
        PLANT_NAME,
        PRIME_MOVER,
        ENERGY_SOURCE,
        NAMEPLATE_MW,
        LATITUDE,
        LONGITUDE,
    ];
}

pub mod corrections {
    use super::Field;

    pub const TABLE: &str = "facility-key corrections";

    pub const MARKET_ID: Field = Field::required("eia_plant_id", &["eia plant code"]);
    pub const REGULATORY_ID: Field = Field::required("camd_plant_id", &["camd plant code"]);

    pub const ALL: [Field; 2] = [MARKET_ID, REGULATORY_ID];
}

/// Fold a header to its comparison key.
pub fn header_key(header: &str) -> String {
    header
        .trim()
        .trim_matches('\u{feff}')
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Resolves fields to DataFrame columns for one table.
pub struct TableColumns<'a> {
    table: &'static str,
    df: &'a DataFrame,
}

impl<'a> TableColumns<'a> {
    pub fn new(table: &'static str, df: &'a DataFrame) -> Self {
        Self { table, df }
    }

    /// Fails with a schema error naming the first missing required field.
    pub fn check(&self, fields: &[Field]) -> Result<(), CrosswalkError> {
        for field in fields.iter().filter(|field| field.required) {
            if self.find(field).is_none() {
                return Err(CrosswalkError::schema(self.table, field.name));
            }
        }
        Ok(())
    }

    pub fn required(&self, field: Field) -> Result<&'a Column, CrosswalkError> {
        self.find(&field)
            .ok_or_else(|| CrosswalkError::schema(self.table, field.name))
    }

    pub fn optional(&self, field: Field) -> Option<&'a Column> {
        self.find(&field)
    }

    fn find(&self, field: &Field) -> Option<&'a Column> {
        let name = self
            .df
            .get_column_names()
            .into_iter()
            .find(|name| field.accepts(name.as_str()))?
            .clone();
        self.df.column(name.as_str()).ok()
    }
}
