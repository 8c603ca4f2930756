use thiserror::Error;

/// Fatal errors raised before the cascade starts.
///
/// The cascade itself never fails: a record that survives every phase is
/// routed to terminal classification, not reported as an error.
#[derive(Debug, Error)]
pub enum CrosswalkError {
    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("schema error: {table} is missing required field '{field}'")]
    Schema { table: String, field: String },

    #[error("schema error: {table} row {row}: invalid {field} value '{value}'")]
    InvalidValue {
        table: String,
        row: usize,
        field: String,
        value: String,
    },
}

impl CrosswalkError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn schema(table: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Schema {
            table: table.into(),
            field: field.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CrosswalkError>;
