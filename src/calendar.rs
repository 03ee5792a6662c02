use crate::models::completed_on;
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};

/// One cell of the month grid handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days that pad the grid to full weeks.
    pub in_month: bool,
    pub completed: bool,
    pub is_today: bool,
}

pub fn current_month() -> NaiveDate {
    first_of_month(Utc::now().date_naive())
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Start-of-month instant sent to the metrics endpoint as the window anchor.
pub fn month_anchor_instant(month: NaiveDate) -> DateTime<Utc> {
    first_of_month(month).and_time(NaiveTime::MIN).and_utc()
}

pub fn days_in_month(month: NaiveDate) -> u32 {
    let first = first_of_month(month);
    let next = first + Months::new(1);
    (next - first).num_days() as u32
}

/// Builds the month grid as whole weeks (Monday start), padded with days from
/// the adjacent months. `completed_dates` comes from the currently loaded
/// metrics; each cell is marked via day-level equality.
pub fn month_cells(
    month: NaiveDate,
    completed_dates: &[DateTime<Utc>],
    today: NaiveDate,
) -> Vec<DayCell> {
    let first = first_of_month(month);
    let last = first + Duration::days(days_in_month(first) as i64 - 1);
    let grid_start = week_start(first);
    let grid_end = week_start(last) + Duration::days(6);

    let mut cells = Vec::new();
    let mut date = grid_start;
    while date <= grid_end {
        cells.push(DayCell {
            date,
            in_month: date.year() == first.year() && date.month() == first.month(),
            completed: completed_on(completed_dates, date),
            is_today: date == today,
        });
        date += Duration::days(1);
    }
    cells
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}
