//! Solar position and direction solving
//!
//! [`position`] approximates where the sun sits for a latitude, longitude,
//! and time of day. [`solver`] inverts that approximation by grid search:
//! given a desired light direction it finds the geographic and temporal
//! configuration whose sun direction matches best. [`shadow`] packages the
//! result for a host's shadow subsystem.

pub mod position;
pub mod shadow;
pub mod solver;

use thiserror::Error;

pub use position::{declination, equation_of_time, sun_direction, REFERENCE_DAY_OF_YEAR};
pub use shadow::ShadowSettings;
pub use solver::{solve, SolarResult};

/// Errors from solar position evaluation and direction solving
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolarError {
    /// Azimuth is undefined at this grid point (pole, or sun at the
    /// zenith). Recoverable: the solver skips the point.
    #[error("sun position undefined at latitude {latitude}°")]
    UndefinedPosition {
        /// Latitude of the offending grid point, in degrees
        latitude: f64,
    },

    /// Every grid point in a search stage was undefined.
    #[error("no solar configuration matches the target direction")]
    NoSolution,
}
