use chrono::NaiveDate;
use thiserror::Error;

/// Failures surfaced by the generators and the live-update step.
///
/// Sampling itself is bounded and cannot fail; only caller input can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid count: {0} (at least one project is required)")]
    InvalidCount(usize),

    #[error("Invalid window: {days} days from {start} runs past the calendar")]
    InvalidWindow { start: NaiveDate, days: u64 },

    #[error("Macro series is empty, no previous observation to extend")]
    EmptySeries,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
