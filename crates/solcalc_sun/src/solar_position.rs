//! Low-precision solar ephemeris (NOAA solar calculator series).
//!
//! Every function takes `t` = Julian centuries since J2000.0 and returns
//! degrees (or minutes of time for the equation of time). The series are
//! valid for several millennia around J2000 with an accuracy of roughly a
//! minute of time for rise/set purposes.
//!
//! Source: Meeus, *Astronomical Algorithms*, ch. 25 (low-accuracy solar
//! coordinates) and ch. 28 (equation of time), as tabulated in the NOAA
//! Global Monitoring Laboratory solar calculator.

use crate::util::normalize_360;

/// Geometric mean longitude of the Sun, normalized to [0, 360).
pub fn geom_mean_longitude_deg(t: f64) -> f64 {
    normalize_360(280.46646 + t * (36_000.76983 + 0.0003032 * t))
}

/// Geometric mean anomaly of the Sun (not normalized).
pub fn geom_mean_anomaly_deg(t: f64) -> f64 {
    357.52911 + t * (35_999.05029 - 0.0001537 * t)
}

/// Eccentricity of Earth's orbit (unitless).
pub fn earth_orbit_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// Equation of center of the Sun.
pub fn equation_of_center_deg(t: f64) -> f64 {
    let m = geom_mean_anomaly_deg(t).to_radians();
    let sin_m = m.sin();
    let sin_2m = (2.0 * m).sin();
    let sin_3m = (3.0 * m).sin();

    sin_m * (1.914602 - t * (0.004817 + 0.000014 * t))
        + sin_2m * (0.019993 - 0.000101 * t)
        + sin_3m * 0.000289
}

/// True geometric longitude of the Sun.
pub fn true_longitude_deg(t: f64) -> f64 {
    geom_mean_longitude_deg(t) + equation_of_center_deg(t)
}

/// Longitude of the Moon's ascending node, low-precision form.
///
/// Drives the nutation/aberration terms of the apparent longitude and the
/// obliquity correction.
pub fn omega_deg(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Apparent longitude of the Sun (true longitude corrected for nutation and
/// aberration).
pub fn apparent_longitude_deg(t: f64) -> f64 {
    true_longitude_deg(t) - 0.00569 - 0.00478 * omega_deg(t).to_radians().sin()
}

/// Mean obliquity of the ecliptic.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity of the ecliptic corrected for nutation.
pub fn obliquity_correction_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + 0.00256 * omega_deg(t).to_radians().cos()
}

/// Declination of the Sun.
pub fn declination_deg(t: f64) -> f64 {
    let eps = obliquity_correction_deg(t).to_radians();
    let lambda = apparent_longitude_deg(t).to_radians();
    (eps.sin() * lambda.sin()).asin().to_degrees()
}

/// Equation of time in minutes: apparent minus mean solar time.
pub fn equation_of_time_min(t: f64) -> f64 {
    let epsilon = obliquity_correction_deg(t).to_radians();
    let l0 = geom_mean_longitude_deg(t).to_radians();
    let e = earth_orbit_eccentricity(t);
    let m = geom_mean_anomaly_deg(t).to_radians();

    let y = (epsilon / 2.0).tan();
    let y = y * y;

    let sin_2l0 = (2.0 * l0).sin();
    let cos_2l0 = (2.0 * l0).cos();
    let sin_4l0 = (4.0 * l0).sin();
    let sin_m = m.sin();
    let sin_2m = (2.0 * m).sin();

    let e_time = y * sin_2l0 - 2.0 * e * sin_m + 4.0 * e * y * sin_m * cos_2l0
        - 0.5 * y * y * sin_4l0
        - 1.25 * e * e * sin_2m;

    // radians → degrees → minutes of time (1 deg = 4 min)
    e_time.to_degrees() * 4.0
}

/// Declination and equation of time at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Solar declination in degrees.
    pub declination_deg: f64,
    /// Equation of time in minutes.
    pub equation_of_time_min: f64,
}

/// Solar quantities needed for rise/set at Julian century `t`.
pub fn solar_position(t: f64) -> SolarPosition {
    SolarPosition {
        declination_deg: declination_deg(t),
        equation_of_time_min: equation_of_time_min(t),
    }
}
