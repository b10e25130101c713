//! Error types for calendar and time-of-day validation.

/// Errors from calendar date/time validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    #[error("invalid month: {0} (must be 1..=12)")]
    InvalidMonth(u32),
    /// Day outside the valid range for the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        max_day: u32,
    },
    /// Hour, minute or second out of range.
    #[error("invalid time of day: {0}")]
    InvalidTimeOfDay(&'static str),
}
