use crate::api::HabitApi;
use crate::calendar::{first_of_month, month_anchor_instant};
use crate::errors::{AppError, AppResult};
use crate::models::Habit;
use crate::state::ViewState;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// View-model for the habits screen: orchestrates remote calls and owns the
/// in-memory screen state.
///
/// State sits behind a mutex so overlapping operations (a rapid double-click
/// racing a prior in-flight call) stay coherent. The lock is never held across
/// a network await; instead each fetch carries a generation token and its
/// response is dropped if a newer fetch of the same kind was issued meanwhile.
pub struct HabitsViewModel<A> {
    api: A,
    state: Arc<Mutex<ViewState>>,
}

impl<A: HabitApi> HabitsViewModel<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(ViewState::new())),
        }
    }

    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    pub async fn set_name_input(&self, value: &str) {
        self.state.lock().await.name_input = value.to_string();
    }

    /// Fetches the full habit list and replaces local state wholesale.
    pub async fn load_habits(&self) -> AppResult<()> {
        let generation = {
            let mut state = self.state.lock().await;
            state.list_generation += 1;
            state.list_generation
        };

        let habits = self.api.list_habits().await?;

        let mut state = self.state.lock().await;
        if state.list_generation == generation {
            state.habits = habits;
        } else {
            debug!("dropping stale habit list response");
        }
        Ok(())
    }

    /// Marks `habit` selected immediately, then fetches its metrics for the
    /// month containing `month` (current month when `None`). Selection is
    /// observable before the fetch resolves; metrics are replaced wholesale
    /// on response unless a newer selection superseded this one.
    pub async fn select_habit(&self, habit: &Habit, month: Option<NaiveDate>) -> AppResult<()> {
        let anchor = first_of_month(month.unwrap_or_else(|| Utc::now().date_naive()));
        let generation = {
            let mut state = self.state.lock().await;
            state.selected = Some(habit.clone());
            state.viewed_month = anchor;
            state.metrics_generation += 1;
            state.metrics_generation
        };

        let metrics = self
            .api
            .fetch_metrics(&habit.id, month_anchor_instant(anchor))
            .await?;

        let mut state = self.state.lock().await;
        if state.metrics_generation == generation {
            state.metrics = Some(metrics);
        } else {
            debug!(habit = %habit.id, "dropping stale metrics response");
        }
        Ok(())
    }

    /// Creates a habit and reloads the list. Exact-empty names are a no-op
    /// with no network call; there is no optimistic insert, the habit appears
    /// only after the reload completes.
    pub async fn create_habit(&self, name: &str) -> AppResult<()> {
        if name.is_empty() {
            return Ok(());
        }

        self.api.create_habit(name).await?;
        self.state.lock().await.name_input.clear();
        self.load_habits().await
    }

    /// Submits the current name-input buffer as a new habit.
    pub async fn submit_name_input(&self) -> AppResult<()> {
        let name = self.state.lock().await.name_input.clone();
        self.create_habit(&name).await
    }

    /// Asks the server to toggle "today" for `habit` (the server decides what
    /// today is and whether to add or remove), then reloads the list and
    /// re-selects the habit so both the checkbox and the metrics panel reflect
    /// the new state.
    pub async fn toggle_completion(&self, habit: &Habit) -> AppResult<()> {
        self.api.toggle_today(&habit.id).await?;
        self.load_habits().await?;
        self.select_habit(habit, None).await
    }

    /// Deletes a habit, clears selection and metrics unconditionally (even
    /// when `id` is not the selected habit), and reloads the list.
    pub async fn delete_habit(&self, id: &str) -> AppResult<()> {
        self.api.delete_habit(id).await?;
        {
            let mut state = self.state.lock().await;
            state.selected = None;
            state.metrics = None;
        }
        self.load_habits().await
    }

    /// Re-selects the current habit anchored to the month containing `target`,
    /// refetching metrics scoped to that month. Errors when nothing is
    /// selected; no request is issued in that case.
    pub async fn navigate_month(&self, target: NaiveDate) -> AppResult<()> {
        let selected = self
            .state
            .lock()
            .await
            .selected
            .clone()
            .ok_or(AppError::NoHabitSelected)?;
        self.select_habit(&selected, Some(target)).await
    }
}
