//! Schedule error types

use chrono::NaiveDate;
use thiserror::Error;

use super::models::HIZB_COUNT;

/// Errors that can occur while computing a schedule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Target date {target} is before the start date {start}")]
    InvalidRange { target: NaiveDate, start: NaiveDate },

    #[error("Hizb number must be between 1 and {}, got {0}", HIZB_COUNT)]
    InvalidCounter(i64),
}

/// Result type alias for schedule operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;
