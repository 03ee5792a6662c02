use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A user-defined recurring task as stored by the remote habit service.
///
/// `completed_dates` is semantically a set of calendar days (at most one
/// entry per day); the service serializes it as an ordered sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub completed_dates: Vec<DateTime<Utc>>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Habit {
    /// Day-level completion check, used for the "completed today" checkbox.
    pub fn completed_on(&self, day: NaiveDate) -> bool {
        completed_on(&self.completed_dates, day)
    }
}

/// Completion data for one habit restricted to one month window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitMetrics {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub completed_dates: Vec<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
}

/// Single day-equality comparison used everywhere a completed-date instant is
/// matched against a calendar day. Instants are interpreted as UTC days, which
/// is how the service stores them (start-of-day UTC).
pub fn completed_on(dates: &[DateTime<Utc>], day: NaiveDate) -> bool {
    dates.iter().any(|instant| instant.date_naive() == day)
}
