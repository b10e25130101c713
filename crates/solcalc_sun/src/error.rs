//! Error types for the sunrise/sunset pipeline.

use solcalc_time::TimeError;

use crate::riseset_types::RiseSetEvent;

/// Errors from rise/set computation and the next-event search.
///
/// A day without sunrise or sunset is not an error; it is reported through
/// [`crate::RiseSetResult::NeverRises`] / [`crate::RiseSetResult::NeverSets`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SunError {
    /// Invalid calendar date/time handed to the finder.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Invalid search configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// No event found before the scan limit was reached.
    #[error("no {event:?} within {scanned_days} days")]
    EventNotFound {
        event: RiseSetEvent,
        scanned_days: u32,
    },
}
