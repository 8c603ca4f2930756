use chrono::NaiveDate;

use xwalk_model::{FacilityId, MarketGenerator, OperatingStatus, RegulatoryUnit};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn blank_generator_id_is_no_key() {
    let unit = RegulatoryUnit::new(
        1,
        FacilityId::new(1001),
        "UN14",
        OperatingStatus::Operating,
        date(2010, 1, 1),
    );
    assert_eq!(unit.generator_key(), None);

    let unit = unit.with_generator_id("   ");
    assert_eq!(unit.generator_key(), None);

    let unit = unit.with_generator_id("GT1");
    assert_eq!(unit.generator_key(), Some("GT1"));
}

#[test]
fn correction_keeps_reported_key() {
    let generator = MarketGenerator::new(4, FacilityId::new(55), "1", "NG");
    assert!(!generator.plant_id_corrected);
    assert_eq!(generator.original_plant_id, generator.plant_id);

    let corrected = generator.with_corrected_plant_id(FacilityId::new(1001));
    assert!(corrected.plant_id_corrected);
    assert_eq!(corrected.plant_id, FacilityId::new(1001));
    assert_eq!(corrected.original_plant_id, FacilityId::new(55));
}

#[test]
fn market_generator_blank_id_is_no_key() {
    let generator = MarketGenerator::new(1, FacilityId::new(3), "", "NG");
    assert_eq!(generator.generator_key(), None);
}

#[test]
fn inactive_statuses() {
    assert!(OperatingStatus::Retired.is_inactive());
    assert!(OperatingStatus::LongTermColdStorage.is_inactive());
    assert!(!OperatingStatus::Operating.is_inactive());
    assert!(!OperatingStatus::Other("Future".into()).is_inactive());
}
