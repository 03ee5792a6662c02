use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("habit API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no habit selected")]
    NoHabitSelected,
}
