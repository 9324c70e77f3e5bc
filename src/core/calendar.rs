//! Calendar projection: maps entries onto a bounded per-day display window,
//! clipping overlaps and assigning deterministic per-charge-code colors.

use crate::core::clock;
use crate::models::charge_code::ChargeCode;
use crate::models::entry::EntryView;
use crate::utils::colors::{CHARGE_PALETTE, UNASSIGNED};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_WINDOW_START: i64 = 7 * 60;
pub const DEFAULT_WINDOW_END: i64 = 18 * 60;
pub const DEFAULT_SLOT_MINUTES: i64 = 30;

/// The portion of the day actually rendered on the calendar grid.
/// Display-only: never affects what is stored or aggregated.
#[derive(Debug, Clone)]
pub struct CalendarWindow {
    pub start_minutes: i64,
    pub end_minutes: i64,
    pub slot_minutes: i64,
}

impl Default for CalendarWindow {
    fn default() -> Self {
        Self {
            start_minutes: DEFAULT_WINDOW_START,
            end_minutes: DEFAULT_WINDOW_END,
            slot_minutes: DEFAULT_SLOT_MINUTES,
        }
    }
}

impl CalendarWindow {
    /// Slot boundaries of the window, for grid rendering.
    pub fn slots(&self) -> Vec<i64> {
        let mut out = Vec::new();
        let mut m = self.start_minutes;
        while m < self.end_minutes {
            out.push(m);
            m += self.slot_minutes;
        }
        out
    }
}

/// One renderable calendar cell: the original entry data plus absolute
/// (unclipped) and window-relative (clipped) minute offsets.
#[derive(Debug, Clone)]
pub struct LayoutCell {
    pub entry_id: i64,
    pub entry_date: NaiveDate,
    pub charge_code_id: i64,
    pub charge_code_label: String,
    pub start_time: String,
    pub end_time: String,
    pub activity_text: String,
    pub duration_minutes: i64,
    pub start_minutes: i64,
    pub end_minutes: i64,
    pub relative_start_minutes: i64,
    pub relative_duration_minutes: i64,
    pub color: &'static str,
}

/// Assign each charge code a palette color by its index in the
/// (project, task)-sorted list, modulo the palette size. Stateless and
/// recomputed per call: stable while the sort order is stable, not across
/// insertions that shift relative positions.
pub fn assign_colors(codes: &[ChargeCode]) -> HashMap<i64, &'static str> {
    codes
        .iter()
        .enumerate()
        .map(|(i, code)| (code.id, CHARGE_PALETTE[i % CHARGE_PALETTE.len()]))
        .collect()
}

/// Project `entries` onto the display window, grouped by each entry's own
/// `entry_date`. Entries fully outside the window are dropped from the
/// output (display filter only); the rest are clamped to the window, with
/// the relative duration floored at 1 minute so every cell stays
/// renderable. Input order is preserved within a day.
pub fn project(
    entries: &[EntryView],
    colors: &HashMap<i64, &'static str>,
    window: &CalendarWindow,
) -> BTreeMap<NaiveDate, Vec<LayoutCell>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<LayoutCell>> = BTreeMap::new();

    for entry in entries {
        // the day stays in the map even when every cell is clipped away
        let day_cells = grouped.entry(entry.entry_date).or_default();

        let start_minutes = clock::minutes_of_day(entry.start_time);
        let end_minutes = start_minutes + entry.duration_minutes;
        if end_minutes <= window.start_minutes || start_minutes >= window.end_minutes {
            continue;
        }

        let clamped_start = start_minutes.max(window.start_minutes);
        let clamped_end = end_minutes.min(window.end_minutes);

        day_cells.push(LayoutCell {
            entry_id: entry.id,
            entry_date: entry.entry_date,
            charge_code_id: entry.charge_code_id,
            charge_code_label: entry.charge_code_label.clone(),
            start_time: entry.start_str(),
            end_time: entry.end_str(),
            activity_text: entry.activity_text.clone(),
            duration_minutes: entry.duration_minutes,
            start_minutes,
            end_minutes,
            relative_start_minutes: clamped_start - window.start_minutes,
            relative_duration_minutes: (clamped_end - clamped_start).max(1),
            color: colors.get(&entry.charge_code_id).copied().unwrap_or(UNASSIGNED),
        });
    }

    grouped
}
