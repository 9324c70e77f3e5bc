use crate::core::overview::WeekOverview;
use crate::errors::AppResult;
use crate::utils::date;
use csv::Writer;

/// Write the week overview matrix to a CSV file: one row per charge code,
/// one column per day, plus row totals and a closing day-totals row.
pub fn write_overview_csv(path: &str, overview: &WeekOverview) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    let mut header = vec!["charge_code".to_string()];
    header.extend(overview.days.iter().map(|d| date::iso(*d)));
    header.push("total".to_string());
    wtr.write_record(&header)?;

    for row in &overview.rows {
        let mut record = vec![row.label.clone()];
        record.extend(row.cells.iter().map(|c| format!("{:.2}", c.hours)));
        record.push(format!("{:.2}", row.total_hours));
        wtr.write_record(&record)?;
    }

    let mut totals = vec!["TOTAL".to_string()];
    totals.extend(overview.day_totals.iter().map(|t| format!("{:.2}", t)));
    totals.push(format!("{:.2}", overview.week_total));
    wtr.write_record(&totals)?;

    wtr.flush()?;
    Ok(())
}
