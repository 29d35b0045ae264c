//! Pitch coordinate conventions and the conversion between them.
//!
//! Understat reports shot locations on a unit square, with `x` running along the length of the
//! pitch and `y` across its width. StatsBomb uses a 120×80 pitch whose axes are the other way
//! around for our purposes: `x` spans the width (0–80) and `y` the length (0–120), with the
//! attacking goal at `y = 120`.

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::shot::ShotRecord;

/// Understat coordinates are first rescaled from the unit square onto this scale.
pub const PERCENT_SCALE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Convention {
    Understat,
    StatsBomb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Physical extent of the target pitch.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub length: f64,
}
impl Dimensions {
    pub const STATSBOMB: Dimensions = Dimensions {
        width: 80.0,
        length: 120.0,
    };
}

#[derive(Debug, Error, PartialEq)]
pub enum ConversionError {
    #[error("non-numeric {axis} coordinate '{value}'")]
    NonNumeric { axis: Axis, value: String },

    #[error("expected {expected} coordinates, got {actual}")]
    WrongConvention {
        expected: Convention,
        actual: Convention,
    },
}

/// Rescales Understat unit-square coordinates onto a target pitch, swapping the axes on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateConverter {
    width_factor: f64,
    length_factor: f64,
}
impl CoordinateConverter {
    pub fn new(target: &Dimensions) -> Self {
        Self {
            width_factor: target.width / PERCENT_SCALE,
            length_factor: target.length / PERCENT_SCALE,
        }
    }

    pub fn statsbomb() -> Self {
        Self::new(&Dimensions::STATSBOMB)
    }

    #[inline]
    pub fn convert(&self, x: f64, y: f64) -> Point {
        let (x_pct, y_pct) = (x * PERCENT_SCALE, y * PERCENT_SCALE);
        Point {
            x: y_pct * self.width_factor,
            y: x_pct * self.length_factor,
        }
    }

    /// Maps a converted point back onto the unit square.
    pub fn invert(&self, point: &Point) -> Point {
        Point {
            x: point.y / self.length_factor / PERCENT_SCALE,
            y: point.x / self.width_factor / PERCENT_SCALE,
        }
    }

    pub fn convert_raw(&self, x: &str, y: &str) -> Result<Point, ConversionError> {
        let x = parse_coordinate(Axis::X, x)?;
        let y = parse_coordinate(Axis::Y, y)?;
        Ok(self.convert(x, y))
    }

    pub fn convert_shot(&self, shot: &ShotRecord) -> Result<ShotRecord, ConversionError> {
        if shot.convention != Convention::Understat {
            return Err(ConversionError::WrongConvention {
                expected: Convention::Understat,
                actual: shot.convention,
            });
        }
        Ok(ShotRecord {
            location: self.convert(shot.location.x, shot.location.y),
            convention: Convention::StatsBomb,
            ..shot.clone()
        })
    }

    pub fn convert_shots(&self, shots: &[ShotRecord]) -> Result<Vec<ShotRecord>, ConversionError> {
        shots.iter().map(|shot| self.convert_shot(shot)).collect()
    }
}

impl Default for CoordinateConverter {
    fn default() -> Self {
        Self::statsbomb()
    }
}

pub(crate) fn parse_coordinate(axis: Axis, value: &str) -> Result<f64, ConversionError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConversionError::NonNumeric {
            axis,
            value: value.to_string(),
        })
}
