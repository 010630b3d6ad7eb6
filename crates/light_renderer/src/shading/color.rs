//! RGB color type for face materials

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGB color.
///
/// All channel arithmetic clamps back into `0..=255`; the type can never
/// hold an out-of-range channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure white, the default material for faces without one
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Warm sunlight, the default light color
    pub const SUNLIGHT: Self = Self::new(255, 255, 200);

    /// Create a color from channel values
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply by a light color, per channel, modeling the light filtering
    /// the surface's intrinsic color.
    ///
    /// Each channel becomes `round(self * light / 255)`.
    #[must_use]
    pub fn tinted_by(self, light: Self) -> Self {
        Self {
            r: mul_channel(self.r, light.r),
            g: mul_channel(self.g, light.g),
            b: mul_channel(self.b, light.b),
        }
    }

    /// Scale all channels by a brightness factor, saturating at 255.
    ///
    /// Negative factors clamp to black.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            r: scale_channel(self.r, factor),
            g: scale_channel(self.g, factor),
            b: scale_channel(self.b, factor),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

fn mul_channel(base: u8, light: u8) -> u8 {
    // Product of two 0..=255 channels over 255 stays in range.
    (f64::from(base) * f64::from(light) / 255.0).round() as u8
}

fn scale_channel(channel: u8, factor: f64) -> u8 {
    (f64::from(channel) * factor).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_tint_is_identity() {
        let base = Color::new(200, 150, 100);
        assert_eq!(base.tinted_by(Color::WHITE), base);
    }

    #[test]
    fn test_tint_rounds_per_channel() {
        // 100 * 200 / 255 = 78.43 -> 78
        let tinted = Color::new(100, 100, 100).tinted_by(Color::new(200, 200, 200));
        assert_eq!(tinted, Color::new(78, 78, 78));
    }

    #[test]
    fn test_black_light_kills_all_channels() {
        let tinted = Color::new(200, 150, 100).tinted_by(Color::new(0, 0, 0));
        assert_eq!(tinted, Color::new(0, 0, 0));
    }

    #[test]
    fn test_scale_saturates_at_white() {
        assert_eq!(Color::new(200, 150, 100).scaled(10.0), Color::WHITE);
    }

    #[test]
    fn test_scale_clamps_negative_to_black() {
        assert_eq!(Color::new(200, 150, 100).scaled(-1.0), Color::new(0, 0, 0));
    }

    #[test]
    fn test_half_scale_rounds() {
        assert_eq!(Color::new(201, 150, 1).scaled(0.5), Color::new(101, 75, 1));
    }
}
