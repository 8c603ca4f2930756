//! End-to-end linkage scenarios.

use chrono::NaiveDate;
use xwalk_core::{LinkInput, LinkOptions, link};
use xwalk_model::{
    CrosswalkError, FacilityCorrections, FacilityId, MarketGenerator, MatchType, OperatingStatus,
    Phase, RegulatoryUnit, TerminalReason,
};

fn unit(row: usize, facility: u32, generator: &str) -> RegulatoryUnit {
    RegulatoryUnit::new(
        row,
        FacilityId::new(facility),
        format!("B{row}"),
        OperatingStatus::Operating,
        NaiveDate::from_ymd_opt(2010, 5, 1).unwrap(),
    )
    .with_generator_id(generator)
}

fn generator(row: usize, facility: u32, id: &str, fuel: &str) -> MarketGenerator {
    MarketGenerator::new(row, FacilityId::new(facility), id, fuel)
}

fn options() -> LinkOptions {
    LinkOptions::for_year(2023)
}

#[test]
fn case_difference_matches_in_fold_phase() {
    let corrections =
        FacilityCorrections::from_rows(vec![(1, FacilityId::new(55_001), FacilityId::new(1001))])
            .unwrap();
    let input = LinkInput::new(
        vec![unit(1, 1001, "UN14")],
        vec![generator(1, 55_001, "un14", "NG")],
    )
    .with_corrections(corrections);

    let crosswalk = link(input, &options()).unwrap();

    assert_eq!(crosswalk.len(), 1);
    let entry = &crosswalk.entries[0];
    assert_eq!(entry.match_type, MatchType::Matched(Phase::Step2a));
    assert_eq!(entry.match_type.label(), "Step 2a");
    assert!(entry.plant_id_corrected());
    let matched = entry.generator.as_ref().unwrap();
    assert_eq!(matched.original_plant_id, FacilityId::new(55_001));

    let step1 = &crosswalk.phases[0];
    assert_eq!(step1.pairs, 0);
    let step2a = &crosswalk.phases[1];
    assert_eq!(step2a.matched_units, 1);
    // Nothing is left for step 2b.
    assert_eq!(step2a.remaining_units, 0);
    assert_eq!(crosswalk.phases[2].pairs, 0);
}

#[test]
fn non_grid_facility_is_labeled_not_grid_connected() {
    let input = LinkInput::new(
        vec![unit(1, 880_042, "GEN1"), unit(2, 3, "GEN1")],
        vec![generator(1, 3, "X", "NG")],
    );
    let crosswalk = link(input, &options()).unwrap();

    assert_eq!(
        crosswalk.entries[0].match_type,
        MatchType::Terminal(TerminalReason::NotGridConnected)
    );
    assert_eq!(
        crosswalk.entries[1].match_type,
        MatchType::Terminal(TerminalReason::Unmatched)
    );
    assert!(crosswalk.entries[0].generator.is_none());
    assert_eq!(crosswalk.entries[0].generator_match_count, 0);
    let unmatched: Vec<_> = crosswalk
        .entries_of(MatchType::Terminal(TerminalReason::Unmatched))
        .collect();
    assert_eq!(unmatched.len(), 1);
    assert_eq!(unmatched[0].unit.row, 2);
}

#[test]
fn missing_identifier_is_labeled() {
    let blank = RegulatoryUnit::new(
        1,
        FacilityId::new(3),
        "B1",
        OperatingStatus::Operating,
        NaiveDate::from_ymd_opt(2010, 5, 1).unwrap(),
    );
    let crosswalk = link(
        LinkInput::new(vec![blank], vec![generator(1, 3, "1", "NG")]),
        &options(),
    )
    .unwrap();
    assert_eq!(
        crosswalk.entries[0].match_type,
        MatchType::Terminal(TerminalReason::NoIdentifier)
    );
}

#[test]
fn ineligible_units_never_appear() {
    let future = RegulatoryUnit::new(
        2,
        FacilityId::new(3),
        "B2",
        OperatingStatus::Operating,
        NaiveDate::from_ymd_opt(2023, 7, 1).unwrap(),
    )
    .with_generator_id("2");
    let long_retired = RegulatoryUnit::new(
        3,
        FacilityId::new(3),
        "B3",
        OperatingStatus::Retired,
        NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
    )
    .with_generator_id("3");
    let input = LinkInput::new(
        vec![unit(1, 3, "1"), future, long_retired],
        vec![generator(1, 3, "1", "NG")],
    );
    let crosswalk = link(input, &options()).unwrap();

    assert_eq!(crosswalk.len(), 1);
    assert_eq!(crosswalk.stats.input_units, 3);
    assert_eq!(crosswalk.stats.eligible_units, 1);
    assert_eq!(crosswalk.stats.ineligible_units(), 2);
}

#[test]
fn excluded_fuel_survives_exact_match_only() {
    let input = LinkInput::new(
        vec![unit(1, 3, "PV1"), unit(2, 3, "pv2")],
        vec![
            generator(1, 3, "PV1", "SUN"),
            generator(2, 3, "PV2", "SUN"),
        ],
    );
    let crosswalk = link(input, &options()).unwrap();

    assert_eq!(
        crosswalk.entries[0].match_type,
        MatchType::Matched(Phase::Step1)
    );
    // pv2 would fold-match PV2, but solar records leave before step 2a.
    assert_eq!(
        crosswalk.entries[1].match_type,
        MatchType::Terminal(TerminalReason::Unmatched)
    );
    assert_eq!(crosswalk.stats.excluded_generators, 1);
    assert_eq!(crosswalk.phases[1].remaining_generators, 0);
}

#[test]
fn fan_out_is_counted_on_every_row() {
    let input = LinkInput::new(
        vec![unit(1, 3, "7")],
        vec![generator(1, 3, "7-STG", "NG"), generator(2, 3, "7S", "NG")],
    );
    let crosswalk = link(input, &options()).unwrap();

    assert_eq!(crosswalk.len(), 2);
    for entry in &crosswalk.entries {
        assert_eq!(entry.match_type, MatchType::Matched(Phase::Step2d));
        assert_eq!(entry.unit_match_count, 2);
        assert_eq!(entry.generator_match_count, 1);
    }
    assert_eq!(crosswalk.fan_out_rows(), 2);
    assert_eq!(crosswalk.phases[4].pairs, 2);
    assert_eq!(crosswalk.phases[4].matched_units, 1);
    assert_eq!(crosswalk.phases[4].matched_generators, 2);
}

#[test]
fn matched_sets_come_in_phase_order() {
    let input = LinkInput::new(
        vec![unit(1, 3, "MGS1A"), unit(2, 3, "02"), unit(3, 3, "1")],
        vec![
            generator(1, 3, "MGS1", "NG"),
            generator(2, 3, "2", "NG"),
            generator(3, 3, "1", "NG"),
        ],
    );
    let crosswalk = link(input, &options()).unwrap();
    let labels: Vec<&str> = crosswalk
        .entries
        .iter()
        .map(|entry| entry.match_type.label())
        .collect();
    assert_eq!(labels, vec!["Step 1", "Step 2b", "Step 2f"]);
}

#[test]
fn missing_year_fails_before_linking() {
    let err = link(LinkInput::default(), &LinkOptions::default()).unwrap_err();
    assert!(matches!(err, CrosswalkError::Configuration { .. }));
}
