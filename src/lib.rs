pub mod api;
pub mod calendar;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod state;
pub mod ui;
pub mod viewmodel;

pub use api::{HabitApi, HttpHabitApi, resolve_base_url};
pub use errors::{AppError, AppResult};
pub use models::{Habit, HabitMetrics};
pub use state::ViewState;
pub use viewmodel::HabitsViewModel;
