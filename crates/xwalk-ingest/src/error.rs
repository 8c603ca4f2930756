//! Error types for input table ingestion.

use std::path::PathBuf;
use thiserror::Error;

use xwalk_model::CrosswalkError;

/// Errors that can occur while loading an input table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    // === Content Errors ===
    /// The table parsed but its content is unusable (missing field, bad value,
    /// malformed correction table).
    #[error("{path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: CrosswalkError,
    },
}

impl IngestError {
    /// The schema/configuration error behind this failure, if any.
    pub fn crosswalk_error(&self) -> Option<&CrosswalkError> {
        match self {
            Self::Invalid { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
