//! Weekly aggregation: reduces an entry list into a charge-code × day
//! matrix of hours, comments and per-entry details, with row, day and
//! week totals.

use crate::models::entry::EntryView;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct CellDetail {
    pub start_time: String,
    pub end_time: String,
    pub activity_text: String,
}

/// One charge-code/day cell. `hours` is rounded to 2 decimals at
/// presentation time; comments and details keep input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DayCell {
    pub hours: f64,
    pub comments: Vec<String>,
    pub details: Vec<CellDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewRow {
    pub label: String,
    /// One cell per day, aligned with `WeekOverview::days`.
    pub cells: Vec<DayCell>,
    pub total_hours: f64,
}

/// The aggregated hours report for one week, rows sorted by charge-code
/// label.
#[derive(Debug, Clone, Serialize)]
pub struct WeekOverview {
    pub days: Vec<NaiveDate>,
    pub rows: Vec<OverviewRow>,
    /// Aligned with `days`.
    pub day_totals: Vec<f64>,
    pub week_total: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Aggregate `entries` over `[week_start, week_end]`.
///
/// Hours accumulate at full precision; every cell, row total, day total and
/// the week total is rounded to 2 decimals independently from its own
/// unrounded accumulator, never by summing already-rounded values. The
/// caller supplies only in-range entries; no date filtering happens here.
pub fn aggregate(entries: &[EntryView], week_start: NaiveDate, week_end: NaiveDate) -> WeekOverview {
    let mut days = Vec::new();
    let mut d = week_start;
    while d <= week_end {
        days.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    let mut matrix: BTreeMap<String, Vec<DayCell>> = BTreeMap::new();
    let mut day_totals = vec![0.0; days.len()];

    for entry in entries {
        let Ok(ix) = usize::try_from((entry.entry_date - week_start).num_days()) else {
            continue;
        };
        if ix >= days.len() {
            continue;
        }

        let cells = matrix
            .entry(entry.charge_code_label.clone())
            .or_insert_with(|| vec![DayCell::default(); days.len()]);
        let cell = &mut cells[ix];

        let hours = entry.duration_minutes as f64 / 60.0;
        cell.hours += hours;
        cell.comments.push(entry.activity_text.clone());
        cell.details.push(CellDetail {
            start_time: entry.start_str(),
            end_time: entry.end_str(),
            activity_text: entry.activity_text.clone(),
        });
        day_totals[ix] += hours;
    }

    // BTreeMap iteration gives the lexicographic row order
    let rows = matrix
        .into_iter()
        .map(|(label, mut cells)| {
            let total: f64 = cells.iter().map(|c| c.hours).sum();
            for cell in &mut cells {
                cell.hours = round2(cell.hours);
            }
            OverviewRow {
                label,
                cells,
                total_hours: round2(total),
            }
        })
        .collect();

    let week_total = round2(day_totals.iter().sum());
    let day_totals = day_totals.into_iter().map(round2).collect();

    WeekOverview {
        days,
        rows,
        day_totals,
        week_total,
    }
}
