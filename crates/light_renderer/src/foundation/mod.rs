//! Foundation utilities shared by the shading and solar modules.

pub mod logging;
pub mod math;
