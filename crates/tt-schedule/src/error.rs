use thiserror::Error;
use tt_core::TtError;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Core(#[from] TtError),

    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
