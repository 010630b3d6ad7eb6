//! Lighting pass over a host scene graph
//!
//! The core never inspects host entity types. The host answers two
//! capability questions instead: "is this node a paintable surface?" and
//! "what are this container's children?". Per-face failures are logged and
//! skipped so one bad face cannot abort a whole pass.

use crate::config::LightSettings;
use crate::foundation::math::{Point3, Vec3};
use crate::shading::color::Color;
use crate::shading::reflectance::{compute_lit_color, LightingInput, ShadingError};
use log::warn;

/// A paintable leaf surface supplied by the host.
pub trait Surface {
    /// Face normal, if the host can determine one. Need not be unit length.
    fn normal(&self) -> Option<Vec3>;

    /// Center of the face's bounding volume.
    fn bounds_center(&self) -> Point3;

    /// Current intrinsic material color, if any is assigned.
    fn base_color(&self) -> Option<Color>;

    /// Apply the computed display color as the face material.
    fn set_display_color(&mut self, color: Color);
}

/// A node in the host scene graph: either a paintable surface or a
/// container of child nodes (group, component instance).
pub trait SceneNode {
    /// The surface view of this node, or `None` for containers.
    fn as_surface_mut(&mut self) -> Option<&mut dyn Surface>;

    /// Visit each child of a container node. Leaves visit nothing.
    fn for_each_child(&mut self, visit: &mut dyn FnMut(&mut dyn SceneNode));
}

/// Outcome of a lighting pass over a scene tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Surfaces that received a new display color
    pub shaded: usize,
    /// Surfaces skipped because shading failed
    pub skipped: usize,
}

/// Shade a single surface with the given light settings.
///
/// Surfaces without a material shade as white; surfaces without a usable
/// normal fall back to +Z. The fallback normal is a compatibility choice,
/// not a geometric truth, so it is logged.
///
/// # Errors
///
/// Propagates [`ShadingError`] from [`compute_lit_color`], e.g. when the
/// light position coincides with the face center.
pub fn shade_surface(
    surface: &mut dyn Surface,
    settings: &LightSettings,
) -> Result<(), ShadingError> {
    let normal = surface.normal().unwrap_or_else(|| {
        warn!("surface has no usable normal, assuming +Z");
        Vec3::z()
    });
    let input = LightingInput {
        base_color: surface.base_color().unwrap_or(Color::WHITE),
        light_color: settings.color,
        light_position: settings.position,
        face_normal: normal,
        face_center: surface.bounds_center(),
        ambient: settings.ambient,
    };
    let lit = compute_lit_color(&input)?;
    surface.set_display_color(lit.scaled(settings.intensity));
    Ok(())
}

/// Recolor every paintable surface under `root`.
///
/// Containers are recursed into, leaves are shaded. Shading failures are
/// reported per face and the pass continues with the remaining faces.
pub fn shade_tree(root: &mut dyn SceneNode, settings: &LightSettings) -> PassReport {
    let mut report = PassReport::default();
    shade_node(root, settings, &mut report);
    report
}

fn shade_node(node: &mut dyn SceneNode, settings: &LightSettings, report: &mut PassReport) {
    if let Some(surface) = node.as_surface_mut() {
        match shade_surface(surface, settings) {
            Ok(()) => report.shaded += 1,
            Err(err) => {
                warn!("skipping face: {err}");
                report.skipped += 1;
            }
        }
        return;
    }
    node.for_each_child(&mut |child| shade_node(child, settings, report));
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeFace {
        normal: Option<Vec3>,
        center: Point3,
        base: Option<Color>,
        display: Option<Color>,
    }

    impl FakeFace {
        fn new(normal: Vec3, center: Point3) -> Self {
            Self {
                normal: Some(normal),
                center,
                base: Some(Color::new(200, 150, 100)),
                display: None,
            }
        }
    }

    impl Surface for FakeFace {
        fn normal(&self) -> Option<Vec3> {
            self.normal
        }

        fn bounds_center(&self) -> Point3 {
            self.center
        }

        fn base_color(&self) -> Option<Color> {
            self.base
        }

        fn set_display_color(&mut self, color: Color) {
            self.display = Some(color);
        }
    }

    enum FakeNode {
        Group(Vec<FakeNode>),
        Face(FakeFace),
    }

    impl SceneNode for FakeNode {
        fn as_surface_mut(&mut self) -> Option<&mut dyn Surface> {
            match self {
                Self::Face(face) => Some(face),
                Self::Group(_) => None,
            }
        }

        fn for_each_child(&mut self, visit: &mut dyn FnMut(&mut dyn SceneNode)) {
            if let Self::Group(children) = self {
                for child in children {
                    visit(child);
                }
            }
        }
    }

    #[test]
    fn test_nested_groups_shade_all_leaves() {
        let mut scene = FakeNode::Group(vec![
            FakeNode::Face(FakeFace::new(Vec3::z(), Point3::new(0.0, 0.0, 0.0))),
            FakeNode::Group(vec![
                FakeNode::Face(FakeFace::new(Vec3::x(), Point3::new(10.0, 0.0, 0.0))),
                FakeNode::Face(FakeFace::new(-Vec3::z(), Point3::new(0.0, 10.0, 0.0))),
            ]),
        ]);
        let report = shade_tree(&mut scene, &LightSettings::default());
        assert_eq!(report, PassReport { shaded: 3, skipped: 0 });
    }

    #[test]
    fn test_degenerate_face_is_skipped_not_fatal() {
        let light = LightSettings::default();
        // Second face sits exactly at the light position.
        let mut scene = FakeNode::Group(vec![
            FakeNode::Face(FakeFace::new(Vec3::z(), Point3::new(0.0, 0.0, 0.0))),
            FakeNode::Face(FakeFace::new(Vec3::z(), light.position)),
            FakeNode::Face(FakeFace::new(Vec3::z(), Point3::new(5.0, 0.0, 0.0))),
        ]);
        let report = shade_tree(&mut scene, &light);
        assert_eq!(report, PassReport { shaded: 2, skipped: 1 });
    }

    #[test]
    fn test_unset_material_defaults_to_white() {
        let mut face = FakeFace::new(Vec3::z(), Point3::new(0.0, 0.0, 0.0));
        face.base = None;
        let light = LightSettings {
            color: Color::WHITE,
            ..LightSettings::default()
        };
        shade_surface(&mut face, &light).unwrap();
        // White base, white light, face directly under the light.
        assert_eq!(face.display, Some(Color::WHITE));
    }

    #[test]
    fn test_missing_normal_falls_back_to_up() {
        crate::foundation::logging::try_init();
        let mut with_normal = FakeFace::new(Vec3::z(), Point3::new(3.0, 4.0, 0.0));
        let mut without_normal = FakeFace::new(Vec3::z(), Point3::new(3.0, 4.0, 0.0));
        without_normal.normal = None;

        let light = LightSettings::default();
        shade_surface(&mut with_normal, &light).unwrap();
        shade_surface(&mut without_normal, &light).unwrap();
        assert_eq!(with_normal.display, without_normal.display);
    }

    #[test]
    fn test_intensity_scales_result() {
        let mut dim = FakeFace::new(Vec3::z(), Point3::new(0.0, 0.0, 0.0));
        let light = LightSettings {
            color: Color::WHITE,
            intensity: 0.5,
            ..LightSettings::default()
        };
        shade_surface(&mut dim, &light).unwrap();
        assert_eq!(dim.display, Some(Color::new(100, 75, 50)));
    }
}
