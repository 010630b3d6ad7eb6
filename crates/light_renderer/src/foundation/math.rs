//! Math types and helpers
//!
//! Lighting and solar calculations run in `f64`; these aliases pin the
//! nalgebra scalar type in one place.

pub use nalgebra::Vector3;

/// 3D vector type for directions and normals
pub type Vec3 = Vector3<f64>;

/// 3D point type for positions (light position, face centers)
pub type Point3 = nalgebra::Point3<f64>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// 2 * Pi
    pub const TAU: f64 = 2.0 * PI;

    /// Norm below which a vector is treated as having no direction
    pub const DIRECTION_EPSILON: f64 = 1.0e-12;
}

/// Math utility functions
pub mod utils {
    /// Clamp a value between min and max
    #[must_use]
    pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }
}
