use std::path::PathBuf;

use xwalk_model::Crosswalk;
use xwalk_report::OutputPaths;

#[derive(Debug)]
pub struct LinkResult {
    pub crosswalk: Crosswalk,
    /// `None` for dry runs.
    pub outputs: Option<OutputPaths>,
    pub output_dir: PathBuf,
}
