//! Shade demo application
//!
//! Stands in for a modeling host: builds a small in-memory scene, runs a
//! lighting pass over it, then solves for the geographic sun position that
//! reproduces the configured light and prints the shadow parameters a host
//! would apply.
//!
//! Pass a path to a `.toml` or `.ron` light settings file as the first
//! argument to override the defaults.

use light_renderer::prelude::*;

/// One rectangular face of the demo model.
struct DemoFace {
    name: &'static str,
    normal: Option<Vec3>,
    center: Point3,
    base_color: Option<Color>,
    display_color: Option<Color>,
}

impl DemoFace {
    fn new(name: &'static str, normal: Vec3, center: Point3, base_color: Color) -> Self {
        Self {
            name,
            normal: Some(normal),
            center,
            base_color: Some(base_color),
            display_color: None,
        }
    }
}

impl Surface for DemoFace {
    fn normal(&self) -> Option<Vec3> {
        self.normal
    }

    fn bounds_center(&self) -> Point3 {
        self.center
    }

    fn base_color(&self) -> Option<Color> {
        self.base_color
    }

    fn set_display_color(&mut self, color: Color) {
        self.display_color = Some(color);
    }
}

/// Scene graph node: groups contain children, faces are paintable leaves.
enum DemoNode {
    Group(Vec<DemoNode>),
    Face(DemoFace),
}

impl SceneNode for DemoNode {
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

/// A 20-unit cube centered at the origin, grouped, plus a ground face.
fn build_scene() -> DemoNode {
    let tan = Color::new(200, 150, 100);
    let cube = DemoNode::Group(vec![
        DemoNode::Face(DemoFace::new("top", Vec3::z(), Point3::new(0.0, 0.0, 10.0), tan)),
        DemoNode::Face(DemoFace::new("bottom", -Vec3::z(), Point3::new(0.0, 0.0, -10.0), tan)),
        DemoNode::Face(DemoFace::new("north", Vec3::y(), Point3::new(0.0, 10.0, 0.0), tan)),
        DemoNode::Face(DemoFace::new("south", -Vec3::y(), Point3::new(0.0, -10.0, 0.0), tan)),
        DemoNode::Face(DemoFace::new("east", Vec3::x(), Point3::new(10.0, 0.0, 0.0), tan)),
        DemoNode::Face(DemoFace::new("west", -Vec3::x(), Point3::new(-10.0, 0.0, 0.0), tan)),
    ]);
    let ground = DemoNode::Face(DemoFace::new(
        "ground",
        Vec3::z(),
        Point3::new(0.0, 0.0, -10.0),
        Color::new(120, 160, 90),
    ));
    DemoNode::Group(vec![cube, ground])
}

fn print_faces(node: &DemoNode, depth: usize) {
    match node {
        DemoNode::Group(children) => {
            for child in children {
                print_faces(child, depth + 1);
            }
        }
        DemoNode::Face(face) => {
            if let Some(color) = face.display_color {
                println!(
                    "{:indent$}{:<8} -> rgb({}, {}, {})",
                    "",
                    face.name,
                    color.r,
                    color.g,
                    color.b,
                    indent = depth * 2
                );
            }
        }
    }
}

fn load_settings() -> LightSettings {
    let settings = match std::env::args().nth(1) {
        Some(path) => match LightSettings::load_from_file(&path) {
            Ok(settings) => {
                log::info!("loaded light settings from {path}");
                settings
            }
            Err(err) => {
                log::error!("could not load {path}: {err}, using defaults");
                LightSettings::default()
            }
        },
        None => LightSettings::default(),
    };
    settings.clamped()
}

fn main() {
    light_renderer::foundation::logging::init();

    let settings = load_settings();
    log::info!(
        "light at ({:.0}, {:.0}, {:.0}), ambient {:.2}, intensity {:.2}",
        settings.position.x,
        settings.position.y,
        settings.position.z,
        settings.ambient,
        settings.intensity
    );

    let mut scene = build_scene();
    let report = shade_tree(&mut scene, &settings);
    println!(
        "lighting pass: {} faces shaded, {} skipped",
        report.shaded, report.skipped
    );
    print_faces(&scene, 0);

    // Reproduce the placed light with the host's geographic sun. The solver
    // wants the direction toward the light source.
    let model_center = Point3::new(0.0, 0.0, 0.0);
    let to_sun = -settings.light_direction(model_center);
    match solve(&to_sun) {
        Ok(result) => {
            println!(
                "matching sun position: lat {:.0}°, lon {:.0}°, {} on day {}",
                result.latitude, result.longitude, result.time, REFERENCE_DAY_OF_YEAR
            );
            match ShadowSettings::from_solar_result(&result) {
                Ok(shadow) => println!(
                    "shadow direction: ({:.3}, {:.3}, {:.3})",
                    shadow.sun_direction.x, shadow.sun_direction.y, shadow.sun_direction.z
                ),
                Err(err) => log::error!("shadow parameters unavailable: {err}"),
            }
        }
        Err(err) => log::error!("sun position solve failed: {err}"),
    }
}
