//! # Light Renderer
//!
//! Computational core for an interactive sun/light placement plugin: a
//! Lambertian lighting preview that recolors model faces, and a solar
//! position solver that turns a desired light direction back into
//! latitude, longitude, and time of day.
//!
//! The host application owns the scene graph, undo handling, and all UI.
//! It talks to this crate through plain values ([`LightingInput`],
//! [`LightSettings`], [`SolarResult`]) and two capability traits
//! ([`Surface`], [`SceneNode`]) that answer "is this a paintable face?"
//! and "what are this container's children?" without exposing host types.
//!
//! ## Quick start
//!
//! ```rust
//! use light_renderer::prelude::*;
//!
//! let input = LightingInput {
//!     base_color: Color::new(200, 150, 100),
//!     light_color: Color::SUNLIGHT,
//!     light_position: Point3::new(0.0, 0.0, 300.0),
//!     face_normal: Vec3::z(),
//!     face_center: Point3::new(0.0, 0.0, 0.0),
//!     ambient: DEFAULT_AMBIENT,
//! };
//! let color = compute_lit_color(&input)?;
//! assert_eq!(color, Color::new(200, 150, 78));
//!
//! // Reproduce that overhead light with the host's geographic sun:
//! let result = solve(&Vec3::z())?;
//! println!("place the model at {}°, {}°", result.latitude, result.longitude);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Both computations are pure and deterministic; invoking them per face or
//! per frame is the host's call.

pub mod config;
pub mod foundation;
pub mod shading;
pub mod solar;

pub use config::{Config, ConfigError, LightSettings};
pub use shading::{
    compute_lit_color, shade_surface, shade_tree, Color, LightingInput, PassReport, SceneNode,
    ShadingError, Surface, DEFAULT_AMBIENT,
};
pub use solar::{solve, ShadowSettings, SolarError, SolarResult};

/// Common imports for hosts embedding the lighting core
pub mod prelude {
    pub use crate::config::{Config, ConfigError, LightSettings};
    pub use crate::foundation::math::{Point3, Vec3};
    pub use crate::shading::{
        compute_lit_color, shade_surface, shade_tree, Color, LightingInput, PassReport,
        SceneNode, ShadingError, Surface, DEFAULT_AMBIENT,
    };
    pub use crate::solar::{
        solve, sun_direction, ShadowSettings, SolarError, SolarResult, REFERENCE_DAY_OF_YEAR,
    };
}
