//! Astronomical sun position approximation
//!
//! Declination and the equation of time come from Spencer's truncated
//! Fourier series; the hour angle from true solar time with the standard
//! 4 minutes-per-degree longitude correction. Adequate for lighting
//! previews, not ephemeris work.
//!
//! Conventions: latitude/longitude in degrees (north/east positive), all
//! trigonometry in radians internally. The returned direction points from
//! the observer toward the sun: `x` east, `y` north, `z` up.

use crate::foundation::math::{constants, Vec3};
use crate::solar::SolarError;
use chrono::{NaiveTime, Timelike};

/// Day of year all solar calculations run on (June 21).
///
/// Only time of day and geography matter for direction matching, so the
/// calendar date is pinned rather than configurable.
pub const REFERENCE_DAY_OF_YEAR: u32 = 172;

/// Below this, `cos(altitude) * cos(latitude)` counts as zero and the
/// azimuth is undefined.
const AZIMUTH_DENOM_EPSILON: f64 = 1.0e-9;

/// Fractional year angle in radians for a time of day on the reference day.
fn fractional_year(hours: f64) -> f64 {
    constants::TAU / 365.0 * (f64::from(REFERENCE_DAY_OF_YEAR) - 1.0 + (hours - 12.0) / 24.0)
}

/// Solar declination in radians for a fractional-year angle `gamma`.
///
/// Spencer (1971) truncated Fourier series.
#[must_use]
pub fn declination(gamma: f64) -> f64 {
    0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin()
}

/// Equation of time in minutes for a fractional-year angle `gamma`.
///
/// Spencer (1971) truncated Fourier series.
#[must_use]
pub fn equation_of_time(gamma: f64) -> f64 {
    229.18
        * (0.000075 + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040890 * (2.0 * gamma).sin())
}

/// Unit direction from an observer toward the sun.
///
/// `time` is clock time at the given longitude's reference meridian (UTC);
/// true solar time applies the equation-of-time and longitude corrections
/// on top of it.
///
/// # Errors
///
/// [`SolarError::UndefinedPosition`] when `cos(altitude) * cos(latitude)`
/// vanishes (observer at a pole, or sun at the zenith) and the azimuth has
/// no defined value. Callers scanning a grid should skip such points.
pub fn sun_direction(
    latitude_deg: f64,
    longitude_deg: f64,
    time: NaiveTime,
) -> Result<Vec3, SolarError> {
    let clock_minutes = f64::from(time.num_seconds_from_midnight()) / 60.0;
    let gamma = fractional_year(clock_minutes / 60.0);

    let decl = declination(gamma);
    let eot = equation_of_time(gamma);

    // True solar time, in minutes from midnight.
    let true_solar_minutes = clock_minutes + eot + 4.0 * longitude_deg;
    let hour_angle = (true_solar_minutes / 4.0 - 180.0).to_radians();

    let lat = latitude_deg.to_radians();
    let sin_altitude = lat.sin() * decl.sin() + lat.cos() * decl.cos() * hour_angle.cos();
    let altitude = sin_altitude.clamp(-1.0, 1.0).asin();

    let denom = altitude.cos() * lat.cos();
    if denom.abs() < AZIMUTH_DENOM_EPSILON {
        return Err(SolarError::UndefinedPosition {
            latitude: latitude_deg,
        });
    }

    let cos_azimuth = ((decl.sin() - altitude.sin() * lat.sin()) / denom).clamp(-1.0, 1.0);
    let mut azimuth = cos_azimuth.acos();
    if hour_angle > 0.0 {
        // Afternoon: the sun has crossed the meridian to the west.
        azimuth = constants::TAU - azimuth;
    }

    Ok(Vec3::new(
        altitude.cos() * azimuth.sin(),
        altitude.cos() * azimuth.cos(),
        altitude.sin(),
    ))
}
