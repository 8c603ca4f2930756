//! CSV reading.

mod reader;

pub use reader::{read_csv_table, read_text_table};
