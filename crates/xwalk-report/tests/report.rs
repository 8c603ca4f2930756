//! Integration tests for the output writers.

use chrono::NaiveDate;
use tempfile::TempDir;

use xwalk_model::{
    Crosswalk, CrosswalkEntry, FacilityId, LinkStats, MarketGenerator, MatchType,
    OperatingStatus, Phase, PhaseSummary, RegulatoryUnit, TerminalReason,
};
use xwalk_report::{CROSSWALK_COLUMNS, RunSummary, render_phase_summary, write_outputs};

fn summary(phase: Phase, pairs: usize, remaining_units: usize, remaining_generators: usize) -> PhaseSummary {
    PhaseSummary {
        phase: phase.label().to_string(),
        pairs,
        matched_units: pairs,
        matched_generators: pairs,
        remaining_units,
        remaining_generators,
    }
}

fn sample() -> Crosswalk {
    let unit = |row: usize, generator: &str| {
        RegulatoryUnit::new(
            row,
            FacilityId::new(3),
            format!("{row}"),
            OperatingStatus::Operating,
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        )
        .with_generator_id(generator)
        .with_facility_name("Barry, Unit \"A\"")
    };
    let matched = CrosswalkEntry {
        match_type: MatchType::Matched(Phase::Step1),
        unit: unit(1, "02"),
        generator: Some(
            MarketGenerator::new(1, FacilityId::new(3), "02", "NG")
                .with_corrected_plant_id(FacilityId::new(3)),
        ),
        unit_match_count: 1,
        generator_match_count: 1,
    };
    let unmatched = CrosswalkEntry {
        match_type: MatchType::Terminal(TerminalReason::Unmatched),
        unit: unit(2, "6-1"),
        generator: None,
        unit_match_count: 1,
        generator_match_count: 0,
    };
    Crosswalk {
        year: 2023,
        entries: vec![matched, unmatched],
        phases: vec![summary(Phase::Step1, 1, 1, 0), summary(Phase::Step2a, 0, 1, 0)],
        stats: LinkStats {
            input_units: 2,
            eligible_units: 2,
            input_generators: 1,
            corrected_generators: 1,
            excluded_generators: 0,
        },
    }
}

#[test]
fn phase_summary_csv() {
    let text = render_phase_summary(&sample().phases).unwrap();
    insta::assert_snapshot!(text.trim_end(), @r"
    phase,pairs,matched_units,matched_generators,remaining_units,remaining_generators
    Step 1,1,1,1,1,0
    Step 2a,0,0,0,1,0
    ");
}

#[test]
fn crosswalk_csv_keeps_identifiers_as_text() {
    let dir = TempDir::new().unwrap();
    let paths = write_outputs(dir.path(), &sample()).unwrap();

    let mut reader = csv::Reader::from_path(&paths.crosswalk).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, CROSSWALK_COLUMNS.to_vec());

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "Step 1");
    assert_eq!(&rows[0][3], "02");
    assert_eq!(&rows[0][5], "Barry, Unit \"A\"");
    assert_eq!(&rows[0][14], "02");
    assert_eq!(&rows[0][21], "true");
    assert_eq!(&rows[1][0], "unmatched");
    assert_eq!(&rows[1][3], "6-1");
    assert_eq!(&rows[1][12], "");
}

#[test]
fn run_summary_json_lists_every_label() {
    let dir = TempDir::new().unwrap();
    let paths = write_outputs(dir.path(), &sample()).unwrap();

    let text = std::fs::read_to_string(&paths.run_summary).unwrap();
    let parsed: RunSummary = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, RunSummary::from_crosswalk(&sample()));
    assert_eq!(parsed.match_types.len(), 10);
    assert_eq!(parsed.match_types[0].match_type.label(), "Step 1");
    assert_eq!(parsed.matched_rows, 1);

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["match_types"][9]["match_type"], "unmatched");
    assert_eq!(json["match_types"][9]["rows"], 1);
}
