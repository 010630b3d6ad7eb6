//! Shadow subsystem parameters
//!
//! The host's built-in shadow rendering takes an explicit sun direction
//! plus a handful of toggles. [`ShadowSettings`] bundles them the way the
//! host expects: direction pointing from the sun toward the scene, manual
//! sun control enabled, full light, no extra darkening.

use crate::foundation::math::{constants, Point3, Vec3};
use crate::shading::reflectance::ShadingError;
use crate::solar::position::sun_direction;
use crate::solar::{SolarError, SolarResult};

/// Parameters to apply to the host's shadow/sun rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    /// Disable the host's own geographic sun so the explicit direction wins
    pub use_sun_for_all_shading: bool,
    /// Light level in `[0, 1]`
    pub light: f64,
    /// Darkness level in `[0, 1]`
    pub dark: f64,
    /// Whether shadows are drawn at all
    pub display_shadows: bool,
    /// Unit direction the sunlight travels, from the sun toward the scene
    pub sun_direction: Vec3,
}

impl ShadowSettings {
    fn with_direction(sun_direction: Vec3) -> Self {
        Self {
            use_sun_for_all_shading: false,
            light: 1.0,
            dark: 0.0,
            display_shadows: true,
            sun_direction,
        }
    }

    /// Shadow parameters for a sun placed at `sun_position` lighting
    /// `target`.
    ///
    /// # Errors
    ///
    /// [`ShadingError::DegenerateDirection`] when the two points coincide.
    pub fn toward(target: Point3, sun_position: Point3) -> Result<Self, ShadingError> {
        let direction = (target - sun_position)
            .try_normalize(constants::DIRECTION_EPSILON)
            .ok_or(ShadingError::DegenerateDirection("sun"))?;
        Ok(Self::with_direction(direction))
    }

    /// Shadow parameters for solved solar coordinates.
    ///
    /// The solver's direction points toward the sun; sunlight travels the
    /// opposite way.
    ///
    /// # Errors
    ///
    /// [`SolarError::UndefinedPosition`] when the result sits where the
    /// sun direction is undefined. Solver output never does.
    pub fn from_solar_result(result: &SolarResult) -> Result<Self, SolarError> {
        let to_sun = sun_direction(result.latitude, result.longitude, result.time)?;
        Ok(Self::with_direction(-to_sun))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveTime;

    #[test]
    fn test_toward_points_down_from_overhead_sun() {
        let settings = ShadowSettings::toward(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 300.0),
        )
        .unwrap();
        assert_relative_eq!(settings.sun_direction.z, -1.0);
        assert!(!settings.use_sun_for_all_shading);
        assert!(settings.display_shadows);
        assert_relative_eq!(settings.light, 1.0);
        assert_relative_eq!(settings.dark, 0.0);
    }

    #[test]
    fn test_coincident_points_are_degenerate() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(
            ShadowSettings::toward(p, p),
            Err(ShadingError::DegenerateDirection("sun"))
        );
    }

    #[test]
    fn test_from_solar_result_negates_sun_direction() {
        let result = SolarResult {
            latitude: 40.0,
            longitude: 10.0,
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        };
        let to_sun = sun_direction(40.0, 10.0, result.time).unwrap();
        let settings = ShadowSettings::from_solar_result(&result).unwrap();
        assert_relative_eq!((settings.sun_direction + to_sun).norm(), 0.0, epsilon = 1e-12);
    }
}
