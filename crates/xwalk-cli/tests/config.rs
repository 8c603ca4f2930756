//! Config file parsing and flag precedence.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use xwalk_cli::config::{DEFAULT_OUTPUT_DIR, FileConfig, Overrides, RunConfig};
use xwalk_model::CrosswalkError;

fn inputs() -> Overrides {
    Overrides {
        regulatory: Some(PathBuf::from("units.csv")),
        market: Some(PathBuf::from("generators.csv")),
        ..Overrides::default()
    }
}

#[test]
fn flags_take_precedence_over_file() {
    let file = FileConfig {
        year: Some(2021),
        output_dir: Some(PathBuf::from("from-file")),
        non_grid_prefix: Some("99".to_string()),
        ..FileConfig::default()
    };
    let flags = Overrides {
        year: Some(2023),
        ..inputs()
    };
    let config = RunConfig::resolve(flags, file).unwrap();

    assert_eq!(config.options.year, Some(2023));
    assert_eq!(config.output_dir, PathBuf::from("from-file"));
    assert_eq!(config.options.non_grid_prefix, "99");
    assert_eq!(config.corrections, None);
}

#[test]
fn missing_year_is_configuration_error() {
    let err = RunConfig::resolve(inputs(), FileConfig::default()).unwrap_err();
    match err {
        CrosswalkError::Configuration { message } => assert!(message.contains("year")),
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn missing_input_table_is_configuration_error() {
    let flags = Overrides {
        year: Some(2023),
        market: None,
        ..inputs()
    };
    let err = RunConfig::resolve(flags, FileConfig::default()).unwrap_err();
    assert!(matches!(err, CrosswalkError::Configuration { .. }));
}

#[test]
fn defaults_apply_when_unset() {
    let flags = Overrides {
        year: Some(2023),
        ..inputs()
    };
    let config = RunConfig::resolve(flags, FileConfig::default()).unwrap();
    assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    assert_eq!(config.options.non_grid_prefix, "88");
}

#[test]
fn non_digit_prefix_is_rejected() {
    let flags = Overrides {
        year: Some(2023),
        non_grid_prefix: Some("8x".to_string()),
        ..inputs()
    };
    assert!(RunConfig::resolve(flags, FileConfig::default()).is_err());
}

#[test]
fn file_paths_resolve_against_config_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("crosswalk.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "year = 2022\nregulatory = \"data/units.csv\"\nmarket = \"/abs/generators.csv\""
    )
    .unwrap();

    let config = FileConfig::load(&path).unwrap();
    assert_eq!(config.year, Some(2022));
    assert_eq!(config.regulatory, Some(dir.path().join("data/units.csv")));
    assert_eq!(config.market.as_deref(), Some(Path::new("/abs/generators.csv")));
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(FileConfig::parse("yeer = 2022").is_err());
}
