use super::*;
use crate::testing::shot_at;
use std::str::FromStr;
use strum::{EnumCount, IntoEnumIterator};

#[test]
fn classify_interior_points() {
    let classifier = ZoneClassifier::default();
    assert_eq!(Some(ZoneId::Zone1), classifier.classify(9.0, 110.0));
    assert_eq!(Some(ZoneId::Zone2), classifier.classify(70.0, 110.0));
    assert_eq!(Some(ZoneId::Zone7), classifier.classify(40.0, 108.0));
    assert_eq!(Some(ZoneId::Zone12), classifier.classify(40.0, 70.0));
}

#[test]
fn classify_outside_all_zones() {
    let classifier = ZoneClassifier::default();
    assert_eq!(None, classifier.classify(40.0, 10.0));
    assert_eq!(None, classifier.classify(40.0, 54.9));
    assert_eq!(None, classifier.classify(-1.0, 110.0));
    assert_eq!(None, classifier.classify(40.0, 120.5));
}

#[test]
fn classify_shared_boundary_takes_first_in_table_order() {
    let classifier = ZoneClassifier::default();
    // x = 18 is shared by zone_1 and zone_6
    assert_eq!(Some(ZoneId::Zone1), classifier.classify(18.0, 110.0));
    // y = 102 is shared by zone_1 and zone_3
    assert_eq!(Some(ZoneId::Zone1), classifier.classify(9.0, 102.0));
    // y = 114 is shared by zone_7 and zone_8
    assert_eq!(Some(ZoneId::Zone7), classifier.classify(40.0, 114.0));
    // x = 30, y = 102 is a corner of zone_6, zone_7, zone_10 and zone_11
    assert_eq!(Some(ZoneId::Zone6), classifier.classify(30.0, 102.0));
    // y = 85.8 is shared by zone_11 and zone_12
    assert_eq!(Some(ZoneId::Zone11), classifier.classify(40.0, 85.8));
    // x = 62 is shared by zone_4 and zone_12
    assert_eq!(Some(ZoneId::Zone4), classifier.classify(62.0, 70.0));
}

#[test]
fn classify_boundary_is_stable() {
    let classifier = ZoneClassifier::default();
    let first = classifier.classify(50.0, 102.0);
    for _ in 0..10 {
        assert_eq!(first, classifier.classify(50.0, 102.0));
    }
}

#[test]
fn every_zone_claims_its_centre() {
    let classifier = ZoneClassifier::default();
    for zone in classifier.table().zones() {
        assert_eq!(Some(zone.id), classifier.classify_point(&zone.centre()), "{}", zone.id);
    }
}

#[test]
fn standard_table_covers_attacking_region() {
    let classifier = ZoneClassifier::default();
    for x in 0..=80 {
        for y in 55..=120 {
            assert!(
                classifier.classify(x as f64, y as f64).is_some(),
                "({x}, {y}) unassigned"
            );
        }
    }
}

#[test]
fn standard_table_order_and_ids() {
    let table = ZoneTable::standard();
    assert_eq!(ZoneId::COUNT, table.len());
    let ids: Vec<_> = table.zones().iter().map(|zone| zone.id).collect();
    let expected: Vec<_> = ZoneId::iter().collect();
    assert_eq!(expected, ids);
}

#[test]
fn zone_id_display_and_parse() {
    assert_eq!("zone_1", ZoneId::Zone1.to_string());
    assert_eq!("zone_12", ZoneId::Zone12.to_string());
    assert_eq!(ZoneId::Zone10, ZoneId::from_str("zone_10").unwrap());
    assert!(ZoneId::from_str("zone_13").is_err());
    assert_eq!(11, ZoneId::Zone12.ordinal());
}

#[test]
fn table_lookup() {
    let table = ZoneTable::standard();
    let zone = table.get(ZoneId::Zone9).unwrap();
    assert_eq!(&(50.0..=62.0), &zone.x);
    assert_eq!(&(85.8..=102.0), &zone.y);
}

#[test]
fn custom_table_order_changes_tie_break() {
    let table = ZoneTable::new(vec![
        Zone::new(ZoneId::Zone6, 18.0..=30.0, 102.0..=120.0),
        Zone::new(ZoneId::Zone1, 0.0..=18.0, 102.0..=120.0),
    ])
    .unwrap();
    let classifier = ZoneClassifier::new(table);
    assert_eq!(Some(ZoneId::Zone6), classifier.classify(18.0, 110.0));
    assert_eq!(None, classifier.classify(70.0, 110.0));
}

#[test]
fn invalid_tables() {
    assert_eq!(InvalidZoneTable::Empty, ZoneTable::new(vec![]).unwrap_err());
    assert_eq!(
        "zone_3 appears more than once",
        ZoneTable::new(vec![
            Zone::new(ZoneId::Zone3, 0.0..=18.0, 55.0..=102.0),
            Zone::new(ZoneId::Zone3, 0.0..=18.0, 55.0..=102.0),
        ])
        .unwrap_err()
        .to_string()
    );
    assert_eq!(
        InvalidZoneTable::InvalidBounds(ZoneId::Zone2),
        ZoneTable::new(vec![Zone::new(ZoneId::Zone2, 80.0..=62.0, 102.0..=120.0)]).unwrap_err()
    );
    assert_eq!(
        InvalidZoneTable::InvalidBounds(ZoneId::Zone2),
        ZoneTable::new(vec![Zone::new(ZoneId::Zone2, 62.0..=80.0, 102.0..=f64::NAN)]).unwrap_err()
    );
}

#[test]
fn classify_shots_requires_statsbomb() {
    let classifier = ZoneClassifier::default();
    let err = classifier
        .classify_shot(shot_at(0.9, 0.5, Convention::Understat))
        .unwrap_err();
    assert_eq!(
        ConversionError::WrongConvention {
            expected: Convention::StatsBomb,
            actual: Convention::Understat
        },
        err
    );
}

#[test]
fn classify_shots_keeps_unassigned() {
    let classifier = ZoneClassifier::default();
    let classified = classifier
        .classify_shots(vec![
            shot_at(9.0, 110.0, Convention::StatsBomb),
            shot_at(40.0, 10.0, Convention::StatsBomb),
        ])
        .unwrap();
    assert_eq!(2, classified.len());
    assert_eq!(Some(ZoneId::Zone1), classified[0].zone);
    assert_eq!(None, classified[1].zone);
    assert_eq!("40:10", classified[1].shot.id);
}
