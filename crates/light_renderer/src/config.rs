//! Configuration system
//!
//! Light parameters are explicit values handed to each call, never hidden
//! module state. [`LightSettings`] is the host-facing configuration object
//! and round-trips through TOML or RON files.

use crate::foundation::math::{constants, Point3, Vec3};
use crate::shading::color::Color;
use crate::shading::reflectance::DEFAULT_AMBIENT;
use serde::{Deserialize, Serialize};

/// Configuration trait: load and save by file extension
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a `.toml` or `.ron` file
    ///
    /// # Errors
    ///
    /// [`ConfigError`] on IO failure, parse failure, or an unrecognized
    /// file extension.
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to a `.toml` or `.ron` file
    ///
    /// # Errors
    ///
    /// [`ConfigError`] on IO failure, serialization failure, or an
    /// unrecognized file extension.
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// User-adjustable light parameters for a lighting pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSettings {
    /// World-space light position
    pub position: Point3,
    /// Light color, multiplied into face base colors
    pub color: Color,
    /// Ambient floor in `[0, 1]`
    pub ambient: f64,
    /// Overall brightness multiplier in `[0.1, 3.0]`
    pub intensity: f64,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 300.0),
            color: Color::SUNLIGHT,
            ambient: DEFAULT_AMBIENT,
            intensity: 1.0,
        }
    }
}

impl Config for LightSettings {}

impl LightSettings {
    /// Horizontal bound on the light position, in model units
    pub const POSITION_RANGE: f64 = 1000.0;

    /// Smallest accepted intensity
    pub const MIN_INTENSITY: f64 = 0.1;

    /// Largest accepted intensity
    pub const MAX_INTENSITY: f64 = 3.0;

    /// Return a copy with every parameter forced into its accepted range.
    ///
    /// The light stays within `±1000` horizontally and above the ground
    /// plane, matching the interactive placement bounds.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        let r = Self::POSITION_RANGE;
        self.position.x = self.position.x.clamp(-r, r);
        self.position.y = self.position.y.clamp(-r, r);
        self.position.z = self.position.z.clamp(0.0, r);
        self.ambient = self.ambient.clamp(0.0, 1.0);
        self.intensity = self.intensity.clamp(Self::MIN_INTENSITY, Self::MAX_INTENSITY);
        self
    }

    /// Direction the light shines, toward `model_center`.
    ///
    /// Falls back to straight down when the light sits exactly on the
    /// center, so callers always get a usable direction.
    #[must_use]
    pub fn light_direction(&self, model_center: Point3) -> Vec3 {
        (model_center - self.position)
            .try_normalize(constants::DIRECTION_EPSILON)
            .unwrap_or_else(|| -Vec3::z())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_match_plugin_defaults() {
        let settings = LightSettings::default();
        assert_eq!(settings.position, Point3::new(0.0, 0.0, 300.0));
        assert_eq!(settings.color, Color::new(255, 255, 200));
        assert_relative_eq!(settings.ambient, 0.4);
        assert_relative_eq!(settings.intensity, 1.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = LightSettings {
            position: Point3::new(100.0, -50.0, 200.0),
            color: Color::new(255, 215, 0),
            ambient: 0.3,
            intensity: 1.5,
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        let restored: LightSettings = toml::from_str(&text).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_save_then_load_file_round_trip() {
        let settings = LightSettings {
            position: Point3::new(10.0, 20.0, 150.0),
            color: Color::new(0, 255, 255),
            ambient: 0.25,
            intensity: 0.8,
        };

        for extension in ["toml", "ron"] {
            let path = std::env::temp_dir()
                .join(format!("light_settings_{}.{extension}", std::process::id()));
            let path = path.to_string_lossy().into_owned();

            settings.save_to_file(&path).unwrap();
            let restored = LightSettings::load_from_file(&path).unwrap();
            let _ = std::fs::remove_file(&path);

            assert_eq!(restored, settings, "{extension} round trip");
        }
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let result = LightSettings::default().save_to_file("light_settings.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let restored: LightSettings = toml::from_str("ambient = 0.2\n").unwrap();
        assert_relative_eq!(restored.ambient, 0.2);
        assert_eq!(restored.color, Color::SUNLIGHT);
    }

    #[test]
    fn test_clamped_bounds_everything() {
        let settings = LightSettings {
            position: Point3::new(5000.0, -5000.0, -10.0),
            color: Color::WHITE,
            ambient: 1.8,
            intensity: 99.0,
        }
        .clamped();
        assert_eq!(settings.position, Point3::new(1000.0, -1000.0, 0.0));
        assert_relative_eq!(settings.ambient, 1.0);
        assert_relative_eq!(settings.intensity, LightSettings::MAX_INTENSITY);
    }

    #[test]
    fn test_light_direction_points_at_center() {
        let settings = LightSettings::default();
        let direction = settings.light_direction(Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(direction.z, -1.0);
    }

    #[test]
    fn test_light_on_center_falls_back_to_down() {
        let settings = LightSettings::default();
        let direction = settings.light_direction(settings.position);
        assert_eq!(direction, -Vec3::z());
    }
}
