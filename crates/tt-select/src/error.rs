use thiserror::Error;
use tt_core::TtError;
use tt_schedule::ScheduleError;

#[derive(Debug, Error)]
pub enum SelectError {
    /// A collaborator (data source or display lookup) failed.
    #[error("data source error: {0}")]
    Source(String),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Core(#[from] TtError),

    #[error("sampling error: {0}")]
    Sample(String),
}

pub type SelectResult<T> = Result<T, SelectError>;
