//! Per-zone shot frequencies and the shading weights used to overlay them on a pitch.

use std::ops::RangeInclusive;
use std::path::Path;

use strum::{EnumCount, IntoEnumIterator};

use crate::csv::{CsvWriter, Record};
use crate::zone::{ClassifiedShot, ZoneId, ZoneTable};

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneStat {
    pub zone: ZoneId,
    pub count: usize,
    pub pct: f64,
    pub goals: usize,
    pub xg: f64,
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    count: usize,
    goals: usize,
    xg: f64,
}

/// Aggregates classified shots into one [ZoneStat] per occupied zone, ordered by [ZoneId].
/// Unassigned shots take no part in the totals. An empty or wholly unassigned input yields no
/// stats.
pub fn aggregate(shots: &[ClassifiedShot]) -> Vec<ZoneStat> {
    let mut tallies = [Tally::default(); ZoneId::COUNT];
    let mut total = 0;
    for classified in shots {
        if let Some(zone) = classified.zone {
            let tally = &mut tallies[zone.ordinal()];
            tally.count += 1;
            tally.xg += classified.shot.xg;
            if classified.shot.is_goal() {
                tally.goals += 1;
            }
            total += 1;
        }
    }

    if total == 0 {
        return vec![];
    }

    ZoneId::iter()
        .zip(tallies)
        .filter(|(_, tally)| tally.count > 0)
        .map(|(zone, tally)| ZoneStat {
            zone,
            count: tally.count,
            pct: tally.count as f64 / total as f64,
            goals: tally.goals,
            xg: tally.xg,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapCell {
    pub zone: ZoneId,
    pub x: RangeInclusive<f64>,
    pub y: RangeInclusive<f64>,
    pub count: usize,
    pub pct: f64,
    pub alpha: f64,
}

/// One cell per zone in table order. `alpha` is the zone's share relative to the busiest zone,
/// so the busiest zone is fully opaque and empty zones are transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub cells: Vec<HeatmapCell>,
}
impl Heatmap {
    pub fn new(table: &ZoneTable, stats: &[ZoneStat]) -> Self {
        let max_pct = stats.iter().map(|stat| stat.pct).fold(0.0, f64::max);
        let cells = table
            .zones()
            .iter()
            .map(|zone| {
                let (count, pct) = stats
                    .iter()
                    .find(|stat| stat.zone == zone.id)
                    .map(|stat| (stat.count, stat.pct))
                    .unwrap_or_default();
                let alpha = if max_pct > 0.0 { pct / max_pct } else { 0.0 };
                HeatmapCell {
                    zone: zone.id,
                    x: zone.x.clone(),
                    y: zone.y.clone(),
                    count,
                    pct,
                    alpha,
                }
            })
            .collect();
        Self { cells }
    }

    pub fn total(&self) -> usize {
        self.cells.iter().map(|cell| cell.count).sum()
    }
}

#[derive(Debug, Clone, Copy, strum_macros::Display, strum_macros::EnumIter, strum_macros::EnumCount)]
#[strum(serialize_all = "snake_case")]
pub enum StatColumn {
    Zone,
    Count,
    Pct,
    Goals,
    Xg,
}

impl From<StatColumn> for usize {
    fn from(column: StatColumn) -> Self {
        column as usize
    }
}

pub fn write_stats(stats: &[ZoneStat], path: impl AsRef<Path>) -> anyhow::Result<()> {
    let mut csv = CsvWriter::create(path)?;
    csv.append(Record::with_values(StatColumn::iter()))?;
    for stat in stats {
        let mut record = Record::with_capacity(StatColumn::COUNT);
        record.set(StatColumn::Zone, stat.zone);
        record.set(StatColumn::Count, stat.count);
        record.set(StatColumn::Pct, stat.pct);
        record.set(StatColumn::Goals, stat.goals);
        record.set(StatColumn::Xg, stat.xg);
        csv.append(record)?;
    }
    csv.flush()?;
    Ok(())
}
