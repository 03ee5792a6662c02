use crate::errors::AppResult;
use crate::models::{CreateHabitRequest, Habit, HabitMetrics};
use chrono::{DateTime, Utc};
use std::env;
use tracing::debug;

/// Client-side contract of the remote habit service. The view-model is generic
/// over this so tests can substitute a scripted implementation.
#[allow(async_fn_in_trait)]
pub trait HabitApi {
    async fn list_habits(&self) -> AppResult<Vec<Habit>>;
    async fn create_habit(&self, name: &str) -> AppResult<Habit>;
    async fn toggle_today(&self, id: &str) -> AppResult<Habit>;
    async fn delete_habit(&self, id: &str) -> AppResult<()>;
    async fn fetch_metrics(&self, id: &str, month_anchor: DateTime<Utc>) -> AppResult<HabitMetrics>;
}

pub fn resolve_base_url() -> String {
    env::var("HABITS_API_URL").unwrap_or_else(|_| "http://localhost:3333".to_string())
}

#[derive(Clone)]
pub struct HttpHabitApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpHabitApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl HabitApi for HttpHabitApi {
    async fn list_habits(&self) -> AppResult<Vec<Habit>> {
        debug!("GET /habits");
        let habits = self
            .client
            .get(self.url("/habits"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(habits)
    }

    async fn create_habit(&self, name: &str) -> AppResult<Habit> {
        debug!(name, "POST /habits");
        let habit = self
            .client
            .post(self.url("/habits"))
            .json(&CreateHabitRequest {
                name: name.to_string(),
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(habit)
    }

    async fn toggle_today(&self, id: &str) -> AppResult<Habit> {
        debug!(id, "PATCH /habits/{{id}}/toggle");
        let habit = self
            .client
            .patch(self.url(&format!("/habits/{id}/toggle")))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(habit)
    }

    async fn delete_habit(&self, id: &str) -> AppResult<()> {
        debug!(id, "DELETE /habits/{{id}}");
        self.client
            .delete(self.url(&format!("/habits/{id}")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn fetch_metrics(&self, id: &str, month_anchor: DateTime<Utc>) -> AppResult<HabitMetrics> {
        debug!(id, %month_anchor, "GET /habits/{{id}}/metrics");
        let metrics = self
            .client
            .get(self.url(&format!("/habits/{id}/metrics")))
            .query(&[("date", month_anchor.to_rfc3339())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(metrics)
    }
}
