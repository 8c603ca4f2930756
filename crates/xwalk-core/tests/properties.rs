//! Completeness and single-phase ownership over generated inventories.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use proptest::prelude::*;
use xwalk_core::{LinkInput, LinkOptions, link};
use xwalk_model::{FacilityId, MarketGenerator, OperatingStatus, RegulatoryUnit};

fn identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[0-9]{1,2}",
        "[A-Za-z]{1,3}[0-9]{1,2}",
        "[0-9]{1,2}[A-Z]{1,2}",
        "[A-Z]{0,2}-?[0-9]{1,2}[a-z]?",
    ]
}

fn facility() -> impl Strategy<Value = u32> {
    prop_oneof![1u32..4, Just(880_001u32)]
}

fn units() -> impl Strategy<Value = Vec<RegulatoryUnit>> {
    prop::collection::vec((facility(), identifier(), any::<bool>()), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (facility, id, retired))| {
                let (status, date) = if retired {
                    (OperatingStatus::Retired, NaiveDate::from_ymd_opt(2023, 3, 1))
                } else {
                    (OperatingStatus::Operating, NaiveDate::from_ymd_opt(2001, 1, 1))
                };
                let unit = RegulatoryUnit::new(
                    idx + 1,
                    FacilityId::new(facility),
                    format!("B{idx}"),
                    status,
                    date.unwrap(),
                );
                if id.is_empty() { unit } else { unit.with_generator_id(id) }
            })
            .collect()
    })
}

fn generators() -> impl Strategy<Value = Vec<MarketGenerator>> {
    let fuel = prop_oneof![Just("NG"), Just("BIT"), Just("SUN"), Just("WND")];
    prop::collection::vec((1u32..4, identifier(), fuel), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (facility, id, fuel))| {
                MarketGenerator::new(idx + 1, FacilityId::new(facility), id, fuel)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn every_eligible_unit_appears(units in units(), generators in generators()) {
        let expected: BTreeSet<usize> = units.iter().map(|unit| unit.row).collect();
        let crosswalk = link(LinkInput::new(units, generators), &LinkOptions::for_year(2023)).unwrap();
        let seen: BTreeSet<usize> = crosswalk.entries.iter().map(|entry| entry.unit.row).collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn each_record_belongs_to_one_phase(units in units(), generators in generators()) {
        let crosswalk = link(LinkInput::new(units, generators), &LinkOptions::for_year(2023)).unwrap();

        let mut unit_labels: BTreeMap<usize, BTreeSet<&str>> = BTreeMap::new();
        let mut generator_labels: BTreeMap<usize, BTreeSet<&str>> = BTreeMap::new();
        for entry in &crosswalk.entries {
            unit_labels.entry(entry.unit.row).or_default().insert(entry.match_type.label());
            if let Some(generator) = &entry.generator {
                generator_labels.entry(generator.row).or_default().insert(entry.match_type.label());
            }
        }
        for labels in unit_labels.values().chain(generator_labels.values()) {
            prop_assert_eq!(labels.len(), 1);
        }

        for entry in &crosswalk.entries {
            let rows = crosswalk.entries.iter().filter(|other| other.unit.row == entry.unit.row).count();
            prop_assert_eq!(entry.unit_match_count, rows);
        }
    }

    #[test]
    fn phase_counters_are_consistent(units in units(), generators in generators()) {
        let eligible = units.len();
        let crosswalk = link(LinkInput::new(units, generators), &LinkOptions::for_year(2023)).unwrap();

        let mut remaining = eligible;
        for summary in &crosswalk.phases {
            prop_assert_eq!(summary.remaining_units + summary.matched_units, remaining);
            remaining = summary.remaining_units;
        }
        let matched: usize = crosswalk.phases.iter().map(|summary| summary.pairs).sum();
        let matched_rows = crosswalk.entries.iter().filter(|entry| entry.match_type.is_match()).count();
        prop_assert_eq!(matched, matched_rows);
    }
}
