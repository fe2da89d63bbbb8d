use thiserror::Error;

/// Scheduling domain errors
#[derive(Error, Debug)]
pub enum SchedError {
    /// A slot time string did not parse as 24h `HH:MM` wall-clock.
    #[error("Invalid time format: {0:?} (expected HH:MM)")]
    InvalidTimeFormat(String),

    #[error("Invalid day of week: {0:?}")]
    InvalidDayOfWeek(String),

    #[error("Invalid booking status: {0:?}")]
    InvalidBookingStatus(String),

    #[error("Slot must start before it ends: {start:?} >= {end:?}")]
    InvertedTimeRange { start: String, end: String },
}

pub type SchedResult<T> = std::result::Result<T, SchedError>;
