use crate::calendar::{DayCell, month_cells};
use crate::metrics::metrics_info;
use crate::state::ViewState;
use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Renders the whole screen: habit list with completed-today checkboxes and
/// selection marker, then (when a habit is selected) the metrics panel and the
/// month calendar with completion indicators.
pub fn render_screen(state: &ViewState, today: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&format!("Daily habits ({today})\n\n"));

    if state.habits.is_empty() {
        out.push_str("  (no habits yet)\n");
    }
    for habit in &state.habits {
        let marker = if state.selected_id() == Some(habit.id.as_str()) {
            '>'
        } else {
            ' '
        };
        let checked = if habit.completed_on(today) { 'x' } else { ' ' };
        out.push_str(&format!("{marker} [{checked}] {}\n", habit.name));
    }

    if let Some(selected) = &state.selected {
        let info = metrics_info(state.metrics.as_ref(), state.viewed_month);
        out.push('\n');
        out.push_str(&format!(
            "{}: {}\n",
            selected.name,
            month_title(state.viewed_month)
        ));
        out.push_str(&format!(
            "  days completed: {}   percentage: {}\n\n",
            info.completed_dates_per_month, info.completed_month_percent
        ));
        out.push_str(&render_calendar(state, today));
    }

    out
}

fn month_title(month: NaiveDate) -> String {
    format!("{} {}", MONTH_NAMES[month.month0() as usize], month.year())
}

fn render_calendar(state: &ViewState, today: NaiveDate) -> String {
    let completed_dates = state
        .metrics
        .as_ref()
        .map(|metrics| metrics.completed_dates.as_slice())
        .unwrap_or(&[]);
    let cells = month_cells(state.viewed_month, completed_dates, today);

    let mut out = String::from("  Mo  Tu  We  Th  Fr  Sa  Su\n");
    for week in cells.chunks(7) {
        for cell in week {
            out.push_str(&render_cell(cell));
        }
        out.push('\n');
    }
    out
}

fn render_cell(cell: &DayCell) -> String {
    if !cell.in_month {
        return "    ".to_string();
    }
    let mark = if cell.completed { '*' } else { ' ' };
    format!(" {:>2}{mark}", cell.date.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Habit, HabitMetrics};
    use chrono::Utc;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn run_habit() -> Habit {
        Habit {
            id: "1".to_string(),
            name: "Run".to_string(),
            completed_dates: vec!["2024-03-05T00:00:00Z".parse().unwrap()],
            user_id: "u1".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn screen_shows_metrics_and_marks_completed_day() {
        let mut state = ViewState::anchored_to(day(2024, 3, 1));
        state.habits = vec![run_habit()];
        state.selected = Some(run_habit());
        state.metrics = Some(HabitMetrics {
            id: "1".to_string(),
            name: "Run".to_string(),
            completed_dates: vec!["2024-03-05T00:00:00Z".parse().unwrap()],
        });

        let screen = render_screen(&state, day(2024, 3, 15));
        assert!(screen.contains("> [ ] Run"));
        assert!(screen.contains("days completed: 1/31"));
        assert!(screen.contains("percentage: 3%"));
        assert!(screen.contains("March 2024"));
        assert!(screen.contains("  5*"));
        // Only one day carries the completion indicator.
        assert_eq!(screen.matches('*').count(), 1);
    }

    #[test]
    fn checkbox_is_checked_on_day_level_match() {
        let mut state = ViewState::anchored_to(day(2024, 3, 1));
        state.habits = vec![run_habit()];

        let screen = render_screen(&state, day(2024, 3, 5));
        assert!(screen.contains("  [x] Run"));
    }
}
