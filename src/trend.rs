//! Rolling expected-goals trendlines, split by season.
//!
//! The rolling mean reproduces the semantics of a fixed-size window with no partial windows: a
//! position whose window would run off either end of the series has no value. A centred window
//! of even size leans towards the past, covering `size / 2` earlier matches and `size / 2 - 1`
//! later ones.

use std::path::Path;

use rustc_hash::FxHashMap;
use strum::{EnumCount, IntoEnumIterator};
use thiserror::Error;
use tracing::debug;

use crate::csv::{CsvReader, CsvWriter, Header, Record};

pub const DEFAULT_WINDOW: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchXg {
    pub season: String,
    pub round: u16,
    pub xg: f64,
    pub xga: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RollingWindow {
    pub size: usize,
    pub centred: bool,
}
impl RollingWindow {
    pub fn centred(size: usize) -> Self {
        Self {
            size,
            centred: true,
        }
    }

    pub fn trailing(size: usize) -> Self {
        Self {
            size,
            centred: false,
        }
    }

    fn offset(&self) -> usize {
        if self.centred {
            (self.size - 1) / 2
        } else {
            0
        }
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::centred(DEFAULT_WINDOW)
    }
}

/// Mean of each full window of `values`, aligned according to `window`.
///
/// # Panics
/// If `window.size` is zero.
pub fn rolling_mean(values: &[f64], window: &RollingWindow) -> Vec<Option<f64>> {
    assert!(window.size > 0, "window size must be positive");
    let offset = window.offset();
    (0..values.len())
        .map(|index| {
            let end = index + offset;
            if end >= values.len() || end + 1 < window.size {
                None
            } else {
                let slice = &values[end + 1 - window.size..=end];
                Some(slice.iter().sum::<f64>() / window.size as f64)
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub round: u16,
    pub xg_for: Option<f64>,
    pub xg_against: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trendline {
    pub season: String,
    pub points: Vec<TrendPoint>,
}

/// Rolls xG for and against over the whole series, then splits the result by season in order of
/// first appearance. Windows therefore span season boundaries.
pub fn trendlines(matches: &[MatchXg], window: &RollingWindow) -> Vec<Trendline> {
    let xg: Vec<_> = matches.iter().map(|m| m.xg).collect();
    let xga: Vec<_> = matches.iter().map(|m| m.xga).collect();
    let rolled_xg = rolling_mean(&xg, window);
    let rolled_xga = rolling_mean(&xga, window);

    let mut lines: Vec<Trendline> = vec![];
    let mut by_season = FxHashMap::default();
    for (index, m) in matches.iter().enumerate() {
        let line_index = *by_season.entry(m.season.as_str()).or_insert_with(|| {
            lines.push(Trendline {
                season: m.season.clone(),
                points: vec![],
            });
            lines.len() - 1
        });
        lines[line_index].points.push(TrendPoint {
            round: m.round,
            xg_for: rolled_xg[index],
            xg_against: rolled_xga[index],
        });
    }
    debug!("split {} matches into {} seasons", matches.len(), lines.len());
    lines
}

pub fn split_season<'a>(
    matches: &'a [MatchXg],
    season: &'a str,
) -> impl Iterator<Item = &'a MatchXg> + 'a {
    matches.iter().filter(move |m| m.season == season)
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidMatchTable {
    #[error("missing header row")]
    MissingHeader,

    #[error("missing column {0}")]
    MissingColumn(&'static str),

    #[error("line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },
}

const SEASON_COLUMN: &str = "Season";
const ROUND_COLUMN: &str = "Round";
const XG_COLUMN: &str = "xG";
const XGA_COLUMN: &str = "xGA";

/// Reads a per-match table with (at least) `Season`, `Round`, `xG` and `xGA` columns.
pub fn read_matches(path: impl AsRef<Path>) -> anyhow::Result<Vec<MatchXg>> {
    let mut reader = CsvReader::open(path)?;
    let header = Header::from(reader.read().ok_or(InvalidMatchTable::MissingHeader)??);
    let column = |name: &'static str| {
        header
            .position(name)
            .ok_or(InvalidMatchTable::MissingColumn(name))
    };
    let (season, round, xg, xga) = (
        column(SEASON_COLUMN)?,
        column(ROUND_COLUMN)?,
        column(XG_COLUMN)?,
        column(XGA_COLUMN)?,
    );

    let mut matches = vec![];
    while let Some(row) = reader.read() {
        let row = row?;
        let line = reader.line();
        let field = |index: usize, name: &str| {
            row.get(index)
                .map(String::as_str)
                .ok_or_else(|| InvalidMatchTable::InvalidRow {
                    line,
                    reason: format!("missing {name}"),
                })
        };
        let invalid = |name: &str, value: &str| InvalidMatchTable::InvalidRow {
            line,
            reason: format!("invalid {name} '{value}'"),
        };
        let round_value = field(round, ROUND_COLUMN)?;
        let xg_value = field(xg, XG_COLUMN)?;
        let xga_value = field(xga, XGA_COLUMN)?;
        matches.push(MatchXg {
            season: field(season, SEASON_COLUMN)?.to_string(),
            round: round_value
                .parse()
                .map_err(|_| invalid(ROUND_COLUMN, round_value))?,
            xg: xg_value.parse().map_err(|_| invalid(XG_COLUMN, xg_value))?,
            xga: xga_value
                .parse()
                .map_err(|_| invalid(XGA_COLUMN, xga_value))?,
        });
    }
    debug!("read {} matches", matches.len());
    Ok(matches)
}

#[derive(Debug, Clone, Copy, strum_macros::Display, strum_macros::EnumIter, strum_macros::EnumCount)]
#[strum(serialize_all = "snake_case")]
pub enum TrendColumn {
    Season,
    Round,
    RollXg,
    RollXga,
}

impl From<TrendColumn> for usize {
    fn from(column: TrendColumn) -> Self {
        column as usize
    }
}

pub fn write_trendlines(lines: &[Trendline], path: impl AsRef<Path>) -> anyhow::Result<()> {
    let mut csv = CsvWriter::create(path)?;
    csv.append(Record::with_values(TrendColumn::iter()))?;
    for line in lines {
        for point in &line.points {
            let mut record = Record::with_capacity(TrendColumn::COUNT);
            record.set(TrendColumn::Season, &line.season);
            record.set(TrendColumn::Round, point.round);
            record.set(TrendColumn::RollXg, format_optional(point.xg_for));
            record.set(TrendColumn::RollXga, format_optional(point.xg_against));
            csv.append(record)?;
        }
    }
    csv.flush()?;
    Ok(())
}

fn format_optional(value: Option<f64>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}
