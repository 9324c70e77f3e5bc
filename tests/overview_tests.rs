use chargelog::core::overview::aggregate;
use chargelog::models::entry::EntryView;
use chrono::{NaiveDate, NaiveTime};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn entry(id: i64, label: &str, date: NaiveDate, start: &str, duration: i64) -> EntryView {
    let start_time = NaiveTime::parse_from_str(start, "%H:%M").unwrap();
    EntryView {
        id,
        charge_code_id: 1,
        charge_code_label: label.to_string(),
        entry_date: date,
        start_time,
        end_time: start_time + chrono::Duration::minutes(duration),
        duration_minutes: duration,
        activity_text: format!("note-{}", id),
    }
}

// week of Thursday 2024-01-04
const WEEK_START: u32 = 4;
const WEEK_END: u32 = 10;

#[test]
fn test_empty_input_yields_zeroed_overview() {
    let overview = aggregate(&[], d(WEEK_START), d(WEEK_END));
    assert_eq!(overview.days.len(), 7);
    assert_eq!(overview.days[0], d(4));
    assert_eq!(overview.days[6], d(10));
    assert!(overview.rows.is_empty());
    assert_eq!(overview.day_totals, vec![0.0; 7]);
    assert_eq!(overview.week_total, 0.0);
}

#[test]
fn test_same_day_entries_accumulate_in_input_order() {
    let entries = vec![
        entry(1, "1234-001 Dev", d(4), "09:00", 45),
        entry(2, "1234-001 Dev", d(4), "14:00", 75),
    ];
    let overview = aggregate(&entries, d(WEEK_START), d(WEEK_END));

    assert_eq!(overview.rows.len(), 1);
    let cell = &overview.rows[0].cells[0];
    assert_eq!(cell.hours, 2.0);
    assert_eq!(cell.comments, vec!["note-1", "note-2"]);
    assert_eq!(cell.details.len(), 2);
    assert_eq!(cell.details[0].start_time, "09:00");
    assert_eq!(cell.details[0].end_time, "09:45");
    assert_eq!(cell.details[1].activity_text, "note-2");

    assert_eq!(overview.rows[0].total_hours, 2.0);
    assert_eq!(overview.day_totals[0], 2.0);
    assert_eq!(overview.week_total, 2.0);
}

#[test]
fn test_rows_are_sorted_by_label() {
    let entries = vec![
        entry(1, "9999-002 Support", d(5), "09:00", 60),
        entry(2, "1234-001 Dev", d(5), "10:00", 60),
        entry(3, "5555-003 Meetings", d(5), "11:00", 60),
    ];
    let overview = aggregate(&entries, d(WEEK_START), d(WEEK_END));

    let labels: Vec<&str> = overview.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["1234-001 Dev", "5555-003 Meetings", "9999-002 Support"]
    );
}

#[test]
fn test_totals_round_from_full_precision_not_rounded_cells() {
    // 25 minutes = 0.41666… h, which rounds to 0.42 per cell; three of
    // them are 75 minutes = 1.25 h, not 3 × 0.42 = 1.26
    let entries = vec![
        entry(1, "a", d(4), "09:00", 25),
        entry(2, "b", d(4), "10:00", 25),
        entry(3, "c", d(4), "11:00", 25),
    ];
    let overview = aggregate(&entries, d(WEEK_START), d(WEEK_END));

    for row in &overview.rows {
        assert_eq!(row.cells[0].hours, 0.42);
    }
    assert_eq!(overview.day_totals[0], 1.25);
    assert_eq!(overview.week_total, 1.25);
}

#[test]
fn test_row_total_rounds_from_full_precision() {
    // same 25-minute entry on three different days of one charge code
    let entries = vec![
        entry(1, "a", d(4), "09:00", 25),
        entry(2, "a", d(5), "09:00", 25),
        entry(3, "a", d(6), "09:00", 25),
    ];
    let overview = aggregate(&entries, d(WEEK_START), d(WEEK_END));

    let row = &overview.rows[0];
    assert_eq!(row.cells[0].hours, 0.42);
    assert_eq!(row.cells[1].hours, 0.42);
    assert_eq!(row.cells[2].hours, 0.42);
    assert_eq!(row.total_hours, 1.25);
}

#[test]
fn test_day_and_week_totals_agree_across_rows() {
    let entries = vec![
        entry(1, "a", d(4), "09:00", 90),
        entry(2, "b", d(4), "11:00", 30),
        entry(3, "a", d(7), "09:00", 120),
        entry(4, "b", d(10), "16:00", 45),
    ];
    let overview = aggregate(&entries, d(WEEK_START), d(WEEK_END));

    let row_sum: f64 = overview.rows.iter().map(|r| r.total_hours).sum();
    let day_sum: f64 = overview.day_totals.iter().sum();
    assert!((row_sum - overview.week_total).abs() < 1e-9);
    assert!((day_sum - overview.week_total).abs() < 1e-9);
    assert_eq!(overview.week_total, 4.75);

    // entries landed on the right days
    assert_eq!(overview.day_totals[0], 2.0);
    assert_eq!(overview.day_totals[3], 2.0);
    assert_eq!(overview.day_totals[6], 0.75);
}
