//! Face shading
//!
//! Converts a light position and color plus per-face geometry into display
//! colors using a Lambertian reflectance model with an ambient floor.

pub mod color;
pub mod pass;
pub mod reflectance;

pub use color::Color;
pub use pass::{shade_surface, shade_tree, PassReport, SceneNode, Surface};
pub use reflectance::{compute_lit_color, LightingInput, ShadingError, DEFAULT_AMBIENT};
