//! Shot records and their outcomes.

use std::str::FromStr;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::pitch::{parse_coordinate, Axis, ConversionError, Convention, Point};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum ShotResult {
    Goal,
    SavedShot,
    #[strum(to_string = "MissedShots", serialize = "MissedShot")]
    MissedShot,
    BlockedShot,
    ShotOnPost,
    OwnGoal,
}
impl ShotResult {
    pub fn is_goal(&self) -> bool {
        matches!(self, ShotResult::Goal)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidShot {
    #[error("non-numeric {field} '{value}'")]
    NonNumeric { field: &'static str, value: String },

    #[error("negative xG {0}")]
    NegativeXg(f64),

    #[error("unknown shot result '{0}'")]
    UnknownResult(String),

    #[error("invalid date '{0}'")]
    InvalidDate(String),

    #[error("{0}")]
    Conversion(#[from] ConversionError),
}

/// A single shot attempt. The meaning of `location` depends on `convention`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotRecord {
    pub id: String,
    pub player: String,
    pub season: String,
    pub minute: u16,
    pub situation: String,
    pub date: Option<NaiveDateTime>,
    pub location: Point,
    pub convention: Convention,
    pub xg: f64,
    pub result: ShotResult,
}
impl ShotRecord {
    /// Builds an Understat-convention record from the string-typed fields of the source feed.
    pub fn parse(fields: RawShotFields) -> Result<Self, InvalidShot> {
        let x = parse_coordinate(Axis::X, fields.x)?;
        let y = parse_coordinate(Axis::Y, fields.y)?;
        let xg = parse_number("xG", fields.xg)?;
        if xg < 0.0 {
            return Err(InvalidShot::NegativeXg(xg));
        }
        let minute = parse_number("minute", fields.minute)?;
        let result = ShotResult::from_str(fields.result)
            .map_err(|_| InvalidShot::UnknownResult(fields.result.to_string()))?;
        let date = fields
            .date
            .map(|date| {
                NaiveDateTime::parse_from_str(date, DATE_FORMAT)
                    .map_err(|_| InvalidShot::InvalidDate(date.to_string()))
            })
            .transpose()?;

        Ok(Self {
            id: fields.id.to_string(),
            player: fields.player.to_string(),
            season: fields.season.to_string(),
            minute,
            situation: fields.situation.to_string(),
            date,
            location: Point::new(x, y),
            convention: Convention::Understat,
            xg,
            result,
        })
    }

    pub fn is_goal(&self) -> bool {
        self.result.is_goal()
    }
}

/// Borrowed view over the textual fields that make up a shot.
#[derive(Debug, Clone, Default)]
pub struct RawShotFields<'a> {
    pub id: &'a str,
    pub player: &'a str,
    pub season: &'a str,
    pub minute: &'a str,
    pub situation: &'a str,
    pub date: Option<&'a str>,
    pub x: &'a str,
    pub y: &'a str,
    pub xg: &'a str,
    pub result: &'a str,
}

fn parse_number<N: FromStr>(field: &'static str, value: &str) -> Result<N, InvalidShot> {
    value.trim().parse().map_err(|_| InvalidShot::NonNumeric {
        field,
        value: value.to_string(),
    })
}
