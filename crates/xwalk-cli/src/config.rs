//! Run configuration: an optional TOML file merged with command-line flags.
//!
//! ```toml
//! year = 2023
//! regulatory = "data/camd_units.csv"
//! market = "data/eia_generators.csv"
//! corrections = "data/plant_id_corrections.csv"
//! output_dir = "output/2023"
//! non_grid_prefix = "88"
//! ```
//!
//! Relative paths in the file are resolved against the file's directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use xwalk_core::LinkOptions;
use xwalk_model::CrosswalkError;

/// Default output directory when neither the flags nor the file name one.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Contents of a `--config` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub year: Option<i32>,
    pub regulatory: Option<PathBuf>,
    pub market: Option<PathBuf>,
    pub corrections: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub non_grid_prefix: Option<String>,
}

impl FileConfig {
    /// Read and parse a config file, anchoring relative paths at its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config =
            Self::parse(&text).with_context(|| format!("parse config {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    #[must_use]
    pub fn relative_to(self, base: &Path) -> Self {
        let anchor = |path: Option<PathBuf>| {
            path.map(|p| if p.is_relative() { base.join(p) } else { p })
        };
        Self {
            regulatory: anchor(self.regulatory),
            market: anchor(self.market),
            corrections: anchor(self.corrections),
            output_dir: anchor(self.output_dir),
            ..self
        }
    }
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub year: Option<i32>,
    pub regulatory: Option<PathBuf>,
    pub market: Option<PathBuf>,
    pub corrections: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub non_grid_prefix: Option<String>,
}

/// Fully resolved settings for one `link` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub regulatory: PathBuf,
    pub market: PathBuf,
    pub corrections: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub options: LinkOptions,
}

impl RunConfig {
    /// Merge flags over the file. A missing year or input path is a
    /// configuration error.
    pub fn resolve(flags: Overrides, file: FileConfig) -> Result<Self, CrosswalkError> {
        let year = flags.year.or(file.year).ok_or_else(|| {
            CrosswalkError::configuration(
                "target reporting year is required (--year or `year` in the config file)",
            )
        })?;
        let regulatory = flags.regulatory.or(file.regulatory).ok_or_else(|| {
            CrosswalkError::configuration("regulatory unit table is required (--regulatory)")
        })?;
        let market = flags.market.or(file.market).ok_or_else(|| {
            CrosswalkError::configuration("market generator table is required (--market)")
        })?;

        let mut options = LinkOptions::for_year(year);
        if let Some(prefix) = flags.non_grid_prefix.or(file.non_grid_prefix) {
            let prefix = prefix.trim().to_string();
            if !prefix.chars().all(|ch| ch.is_ascii_digit()) {
                return Err(CrosswalkError::configuration(format!(
                    "non-grid prefix must be digits, got '{prefix}'"
                )));
            }
            options = options.with_non_grid_prefix(prefix);
        }

        Ok(Self {
            regulatory,
            market,
            corrections: flags.corrections.or(file.corrections),
            output_dir: flags
                .output_dir
                .or(file.output_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            options,
        })
    }
}
