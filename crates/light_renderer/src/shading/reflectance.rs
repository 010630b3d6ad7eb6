//! Lambertian reflectance with an ambient floor
//!
//! The shading model is `lambert = ambient + (1 - ambient) * max(0, N . L)`,
//! applied to the base color after tinting it by the light color. A pure
//! function of its input; traversal over a scene and material application
//! belong to [`crate::shading::pass`].

use crate::foundation::math::{constants, utils, Point3, Vec3};
use crate::shading::color::Color;
use thiserror::Error;

/// Ambient floor used when the caller does not specify one.
pub const DEFAULT_AMBIENT: f64 = 0.4;

/// Errors from shading a single face
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShadingError {
    /// A vector that must define a direction had zero length.
    #[error("degenerate {0} direction (zero length)")]
    DegenerateDirection(&'static str),
}

/// Everything needed to shade one face. Immutable per invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct LightingInput {
    /// Intrinsic color of the face material
    pub base_color: Color,
    /// Color of the light source
    pub light_color: Color,
    /// World-space position of the light source
    pub light_position: Point3,
    /// Face normal; need not be unit length, must be nonzero
    pub face_normal: Vec3,
    /// Center of the face's bounding volume
    pub face_center: Point3,
    /// Ambient floor in `[0, 1]`; out-of-range values are clamped
    pub ambient: f64,
}

/// Compute the display color for a face under a point light.
///
/// Deterministic and free of side effects. Every output channel is in
/// `0..=255` by construction.
///
/// # Errors
///
/// [`ShadingError::DegenerateDirection`] when the light position coincides
/// with the face center, or when the face normal has zero length. The caller
/// should skip that face and keep going.
pub fn compute_lit_color(input: &LightingInput) -> Result<Color, ShadingError> {
    let ambient = utils::clamp(input.ambient, 0.0, 1.0);
    let tinted = input.base_color.tinted_by(input.light_color);

    let to_light = (input.light_position - input.face_center)
        .try_normalize(constants::DIRECTION_EPSILON)
        .ok_or(ShadingError::DegenerateDirection("light"))?;
    let normal = input
        .face_normal
        .try_normalize(constants::DIRECTION_EPSILON)
        .ok_or(ShadingError::DegenerateDirection("normal"))?;

    let intensity = utils::clamp(normal.dot(&to_light), 0.0, 1.0);
    let lambert = utils::clamp(ambient + (1.0 - ambient) * intensity, 0.0, 1.0);

    Ok(tinted.scaled(lambert))
}
