//! Twelve fixed rectangular zones covering the attacking end of a StatsBomb-convention pitch, and
//! the classifier that buckets shots into them.
//!
//! Adjacent zones share their boundary values, so a point on a shared edge lies in more than one
//! rectangle. The classifier resolves this by taking the first matching zone in table order.

use std::ops::RangeInclusive;

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::trace;

use crate::pitch::{ConversionError, Convention, Point};
use crate::shot::ShotRecord;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::EnumCount,
)]
pub enum ZoneId {
    #[strum(serialize = "zone_1")]
    Zone1,
    #[strum(serialize = "zone_2")]
    Zone2,
    #[strum(serialize = "zone_3")]
    Zone3,
    #[strum(serialize = "zone_4")]
    Zone4,
    #[strum(serialize = "zone_5")]
    Zone5,
    #[strum(serialize = "zone_6")]
    Zone6,
    #[strum(serialize = "zone_7")]
    Zone7,
    #[strum(serialize = "zone_8")]
    Zone8,
    #[strum(serialize = "zone_9")]
    Zone9,
    #[strum(serialize = "zone_10")]
    Zone10,
    #[strum(serialize = "zone_11")]
    Zone11,
    #[strum(serialize = "zone_12")]
    Zone12,
}
impl ZoneId {
    #[inline]
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: ZoneId,
    pub x: RangeInclusive<f64>,
    pub y: RangeInclusive<f64>,
}
impl Zone {
    pub const fn new(id: ZoneId, x: RangeInclusive<f64>, y: RangeInclusive<f64>) -> Self {
        Self { id, x, y }
    }

    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        self.x.contains(&point.x) && self.y.contains(&point.y)
    }

    pub fn centre(&self) -> Point {
        Point::new(
            (self.x.start() + self.x.end()) / 2.0,
            (self.y.start() + self.y.end()) / 2.0,
        )
    }
}

const STANDARD_ZONES: [Zone; 12] = [
    Zone::new(ZoneId::Zone1, 0.0..=18.0, 102.0..=120.0),
    Zone::new(ZoneId::Zone2, 62.0..=80.0, 102.0..=120.0),
    Zone::new(ZoneId::Zone3, 0.0..=18.0, 55.0..=102.0),
    Zone::new(ZoneId::Zone4, 62.0..=80.0, 55.0..=102.0),
    Zone::new(ZoneId::Zone5, 50.0..=62.0, 102.0..=120.0),
    Zone::new(ZoneId::Zone6, 18.0..=30.0, 102.0..=120.0),
    Zone::new(ZoneId::Zone7, 30.0..=50.0, 102.0..=114.0),
    Zone::new(ZoneId::Zone8, 30.0..=50.0, 114.0..=120.0),
    Zone::new(ZoneId::Zone9, 50.0..=62.0, 85.8..=102.0),
    Zone::new(ZoneId::Zone10, 18.0..=30.0, 85.8..=102.0),
    Zone::new(ZoneId::Zone11, 30.0..=50.0, 85.8..=102.0),
    Zone::new(ZoneId::Zone12, 18.0..=62.0, 55.0..=85.8),
];

#[derive(Debug, Error, PartialEq)]
pub enum InvalidZoneTable {
    #[error("zone table is empty")]
    Empty,

    #[error("{0} appears more than once")]
    DuplicateZone(ZoneId),

    #[error("{0} has empty or non-finite bounds")]
    InvalidBounds(ZoneId),
}

/// An ordered, immutable set of zones. Order determines which zone claims a shared boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneTable {
    zones: Vec<Zone>,
}
impl ZoneTable {
    pub fn new(zones: Vec<Zone>) -> Result<Self, InvalidZoneTable> {
        if zones.is_empty() {
            return Err(InvalidZoneTable::Empty);
        }
        let mut seen = FxHashSet::default();
        for zone in &zones {
            if !seen.insert(zone.id) {
                return Err(InvalidZoneTable::DuplicateZone(zone.id));
            }
            if !is_valid_range(&zone.x) || !is_valid_range(&zone.y) {
                return Err(InvalidZoneTable::InvalidBounds(zone.id));
            }
        }
        Ok(Self { zones })
    }

    pub fn standard() -> Self {
        Self {
            zones: STANDARD_ZONES.to_vec(),
        }
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn get(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn is_valid_range(range: &RangeInclusive<f64>) -> bool {
    range.start().is_finite() && range.end().is_finite() && range.start() <= range.end()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedShot {
    pub shot: ShotRecord,
    pub zone: Option<ZoneId>,
}

#[derive(Debug, Clone, Default)]
pub struct ZoneClassifier {
    table: ZoneTable,
}
impl ZoneClassifier {
    pub fn new(table: ZoneTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ZoneTable {
        &self.table
    }

    /// The first zone in table order containing `(x, y)`, or `None` if the point is unassigned.
    #[inline]
    pub fn classify(&self, x: f64, y: f64) -> Option<ZoneId> {
        self.classify_point(&Point::new(x, y))
    }

    pub fn classify_point(&self, point: &Point) -> Option<ZoneId> {
        self.table
            .zones
            .iter()
            .find(|zone| zone.contains(point))
            .map(|zone| zone.id)
    }

    pub fn classify_shot(&self, shot: ShotRecord) -> Result<ClassifiedShot, ConversionError> {
        if shot.convention != Convention::StatsBomb {
            return Err(ConversionError::WrongConvention {
                expected: Convention::StatsBomb,
                actual: shot.convention,
            });
        }
        let zone = self.classify_point(&shot.location);
        if zone.is_none() {
            trace!("shot {} at {} is unassigned", shot.id, shot.location);
        }
        Ok(ClassifiedShot { shot, zone })
    }

    pub fn classify_shots(
        &self,
        shots: Vec<ShotRecord>,
    ) -> Result<Vec<ClassifiedShot>, ConversionError> {
        shots
            .into_iter()
            .map(|shot| self.classify_shot(shot))
            .collect()
    }
}

#[cfg(test)]
mod tests;
