use crate::calendar::current_month;
use crate::models::{Habit, HabitMetrics};
use chrono::NaiveDate;

/// Owned screen state with a defined empty initial value. Everything here is a
/// read-through cache of the remote service, refreshed after each mutating
/// call; nothing persists across sessions.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub habits: Vec<Habit>,
    pub selected: Option<Habit>,
    pub metrics: Option<HabitMetrics>,
    /// First day of the month the calendar is showing.
    pub viewed_month: NaiveDate,
    pub name_input: String,
    /// Request generations for stale-response protection: a fetch response is
    /// applied only if no newer fetch of the same kind was issued meanwhile.
    pub(crate) list_generation: u64,
    pub(crate) metrics_generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::anchored_to(current_month())
    }

    pub fn anchored_to(month: NaiveDate) -> Self {
        Self {
            habits: Vec::new(),
            selected: None,
            metrics: None,
            viewed_month: month,
            name_input: String::new(),
            list_generation: 0,
            metrics_generation: 0,
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|habit| habit.id.as_str())
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
