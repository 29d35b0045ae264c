//! Testing helpers.

use assert_float_eq::*;

use crate::pitch::{Convention, Point};
use crate::shot::{ShotRecord, ShotResult};

pub fn assert_point_near(expected: Point, actual: Point, epsilon: f64) {
    assert_float_absolute_eq!(expected.x, actual.x, epsilon);
    assert_float_absolute_eq!(expected.y, actual.y, epsilon);
}

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

/// A non-goal shot worth 0.1 xG at the given location.
pub fn shot_at(x: f64, y: f64, convention: Convention) -> ShotRecord {
    ShotRecord {
        id: format!("{x}:{y}"),
        player: "Test Player".into(),
        season: "2021".into(),
        minute: 10,
        situation: "OpenPlay".into(),
        date: None,
        location: Point::new(x, y),
        convention,
        xg: 0.1,
        result: ShotResult::MissedShot,
    }
}
