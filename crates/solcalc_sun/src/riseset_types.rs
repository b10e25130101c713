//! Types for sunrise/sunset calculations.
//!
//! Provides the observer location, event kinds, hour-angle and event-time
//! results, and the search configuration used by the next-event finder.

/// Geographic location on Earth's surface.
///
/// The NOAA formulas place solar noon at `720 + 4·longitude` minutes UTC,
/// so a positive longitude makes events happen later in UTC: longitude is
/// measured positive WEST of Greenwich. Hammerfest (70.66 N, 23.68 E) is
/// therefore `GeoLocation::new(70.66, -23.68)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: (-90, 90).
    pub latitude_deg: f64,
    /// Longitude in degrees, west positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Reject locations the hour-angle formula cannot handle.
    ///
    /// At the poles `cos(latitude)` is zero and the hour-angle argument is
    /// undefined.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.latitude_deg.is_finite() {
            return Err("latitude must be finite");
        }
        if self.latitude_deg.abs() >= 90.0 {
            return Err("latitude must be strictly between -90 and 90 degrees");
        }
        if !self.longitude_deg.is_finite() {
            return Err("longitude must be finite");
        }
        if self.longitude_deg.abs() > 180.0 {
            return Err("longitude must be within -180 and 180 degrees");
        }
        Ok(())
    }
}

/// Rise/set event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb of the Sun appears at the horizon (zenith 90.833 deg).
    Sunrise,
    /// Upper limb of the Sun disappears below the horizon.
    Sunset,
}

impl RiseSetEvent {
    /// Whether this is a rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }

    /// Lowercase name, used in log messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
        }
    }
}

/// Hour angle of the Sun at a rise/set threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HourAngle {
    /// Hour angle in radians: positive for sunrise, negative for sunset.
    Angle(f64),
    /// The Sun stays below the horizon all day (polar night).
    NeverRises,
    /// The Sun stays above the horizon all day (midnight sun).
    NeverSets,
}

/// Result of a rise/set computation for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event time in minutes after 0h UTC of the queried Julian Day.
    ///
    /// May be negative or exceed 1440 when the event falls on the
    /// neighbouring UTC day.
    Event {
        minutes_utc: f64,
        event: RiseSetEvent,
    },
    /// Sun never rises during this day (polar night).
    NeverRises,
    /// Sun never sets during this day (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    /// Event minutes, or `None` on a day without the event.
    pub fn minutes_utc(&self) -> Option<f64> {
        match *self {
            Self::Event { minutes_utc, .. } => Some(minutes_utc),
            Self::NeverRises | Self::NeverSets => None,
        }
    }

    /// Whether the event occurs on this day.
    pub fn is_event(&self) -> bool {
        matches!(self, Self::Event { .. })
    }
}

/// Configuration for the next-event search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of days probed before giving up (default 400).
    ///
    /// Polar night at latitudes close to 90 deg lasts about half a year,
    /// so the default covers any reachable latitude.
    pub max_scan_days: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_scan_days: 400 }
    }
}

impl SearchConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.max_scan_days == 0 {
            return Err("max_scan_days must be > 0");
        }
        Ok(())
    }
}
