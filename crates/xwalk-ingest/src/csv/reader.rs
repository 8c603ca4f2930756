//! CSV file reading with every column kept as text.
//!
//! Identifiers such as `"02"` or `"6-1"` must survive ingestion verbatim, so
//! schema inference is disabled and each column is read as a string.

use std::path::Path;

use polars::prelude::{Column, CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Reads a CSV file into a Polars DataFrame whose columns are all strings.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read csv table"
    );
    Ok(df)
}

/// Builds an all-string DataFrame from in-memory rows.
///
/// Short rows are padded with nulls. Used by callers that already hold the
/// table (e.g. fetched from an API) and by tests.
pub fn read_text_table(headers: &[&str], rows: &[Vec<&str>]) -> Result<DataFrame> {
    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values: Vec<Option<String>> = rows
                .iter()
                .map(|row| row.get(idx).map(|value| (*value).to_string()))
                .collect();
            Column::new((*name).into(), values)
        })
        .collect();
    Ok(DataFrame::new(columns)?)
}
