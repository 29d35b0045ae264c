//! Console tabulation of heatmaps and trendlines.

use std::ops::RangeInclusive;

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::heatmap::{Heatmap, ZoneStat};
use crate::trend::Trendline;

const SHADE_WIDTH: usize = 10;

pub fn tabulate_heatmap(heatmap: &Heatmap, stats: &[ZoneStat]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Centred)),
            Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(6))
                    .with(HAlign::Right),
            ),
            Col::new(Styles::default().with(MinWidth(7)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(7)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(SHADE_WIDTH)).with(HAlign::Left)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec![
                "Zone".into(),
                "x".into(),
                "y".into(),
                "Shots".into(),
                "Share".into(),
                "Goals".into(),
                "xG".into(),
                "Shade".into(),
            ],
        ));

    for cell in &heatmap.cells {
        let (goals, xg) = stats
            .iter()
            .find(|stat| stat.zone == cell.zone)
            .map(|stat| (stat.goals, stat.xg))
            .unwrap_or_default();
        table.push_row(Row::new(
            Styles::default(),
            vec![
                cell.zone.to_string().into(),
                format_range(&cell.x).into(),
                format_range(&cell.y).into(),
                format!("{}", cell.count).into(),
                format!("{:.1}%", cell.pct * 100.0).into(),
                format!("{goals}").into(),
                format!("{xg:.2}").into(),
                shade(cell.alpha).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_trendline(trendline: &Trendline) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec!["Round".into(), "xG for".into(), "xG against".into()],
        ));
    for point in &trendline.points {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", point.round).into(),
                format_optional(point.xg_for).into(),
                format_optional(point.xg_against).into(),
            ],
        ));
    }
    table
}

fn format_range(range: &RangeInclusive<f64>) -> String {
    format!("{}–{}", range.start(), range.end())
}

fn format_optional(value: Option<f64>) -> String {
    match value {
        None => "-".into(),
        Some(value) => format!("{value:.3}"),
    }
}

fn shade(alpha: f64) -> String {
    let filled = (alpha.clamp(0.0, 1.0) * SHADE_WIDTH as f64).round() as usize;
    "█".repeat(filled) + &"·".repeat(SHADE_WIDTH - filled)
}
