use crate::calendar::days_in_month;
use crate::models::HabitMetrics;
use chrono::NaiveDate;

/// Display strings for the metrics panel, derived from the fetched monthly
/// metrics and the viewed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsInfo {
    pub completed_dates_per_month: String,
    pub completed_month_percent: String,
}

/// `"C/D"` and `"{round(C/D*100)}%"` where D is the day count of the viewed
/// month and C the number of completed days in the fetched window. With no
/// metrics loaded the counts read as zero.
pub fn metrics_info(metrics: Option<&HabitMetrics>, month: NaiveDate) -> MetricsInfo {
    let days = days_in_month(month);
    let completed = metrics.map(|m| m.completed_dates.len()).unwrap_or(0);
    let percent = (completed as f64 / days as f64 * 100.0).round() as i64;

    MetricsInfo {
        completed_dates_per_month: format!("{completed}/{days}"),
        completed_month_percent: format!("{percent}%"),
    }
}
