//! Shot-location analytics for football. Converts Understat shot coordinates onto a StatsBomb
//! pitch, buckets shots into twelve fixed attacking zones and aggregates per-zone frequencies
//! for heatmap overlays. Around that core sit an Understat scraper, rolling xG trendlines and
//! console tabulation.

pub mod csv;
pub mod file;
pub mod heatmap;
pub mod pitch;
pub mod print;
pub mod shot;
pub mod trend;
pub mod understat;
pub mod zone;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
