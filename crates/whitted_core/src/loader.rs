//! JSON scene loading.
//!
//! Reads the coursework scene format and converts it into a [`Scene`]:
//!
//! ```json
//! {
//!   "geometry": [
//!     { "type": "sphere", "centre": [0, 0, -5], "radius": 1,
//!       "ac": [0.1, 0.1, 0.1], "dc": [1, 0, 0], "sc": [1, 1, 1],
//!       "ka": 0.2, "kd": 0.7, "ks": 0.5, "pc": 16 }
//!   ],
//!   "light": [ { "type": "point", "centre": [0, 4, 0], "id": [1, 1, 1], "is": [1, 1, 1] } ],
//!   "output": [ { "filename": "out.ppm", "size": [320, 240], "centre": [0, 0, 0],
//!                 "lookat": [0, 0, -1], "up": [0, 1, 0], "fov": 60,
//!                 "bkc": [0, 0, 0], "ai": [0.3, 0.3, 0.3] } ]
//! }
//! ```
//!
//! Unknown geometry or light types are rejected rather than skipped.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::de::IgnoredAny;
use serde::Deserialize;
use thiserror::Error;
use whitted_math::{Color, Vec3};

use crate::scene::{Geometry, Light, Material, OutputConfig, Rectangle, Scene, Sphere};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(String),

    #[error("Unsupported feature: {0}")]
    Unsupported(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Deserialize)]
struct SceneFile {
    #[serde(default)]
    geometry: Vec<GeometryDesc>,
    #[serde(default, alias = "lights")]
    light: Vec<LightDesc>,
    #[serde(default)]
    output: Vec<OutputDesc>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum GeometryDesc {
    Sphere(SphereDesc),
    Rectangle(RectangleDesc),
}

#[derive(Deserialize)]
struct SphereDesc {
    centre: [f64; 3],
    radius: f64,
    #[serde(flatten)]
    material: MaterialDesc,
}

#[derive(Deserialize)]
struct RectangleDesc {
    p1: [f64; 3],
    p2: [f64; 3],
    p3: [f64; 3],
    p4: [f64; 3],
    #[serde(flatten)]
    material: MaterialDesc,
}

#[derive(Deserialize)]
struct MaterialDesc {
    dc: [f64; 3],
    #[serde(default)]
    ac: [f64; 3],
    #[serde(default)]
    sc: [f64; 3],
    #[serde(default)]
    ka: f64,
    #[serde(default = "default_kd")]
    kd: f64,
    #[serde(default)]
    ks: f64,
    #[serde(default = "default_pc")]
    pc: f64,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum LightDesc {
    Point(PointLightDesc),
    Area(IgnoredAny),
}

#[derive(Deserialize)]
struct PointLightDesc {
    centre: [f64; 3],
    id: [f64; 3],
    is: [f64; 3],
}

#[derive(Deserialize)]
struct OutputDesc {
    filename: String,
    size: [u32; 2],
    centre: [f64; 3],
    lookat: [f64; 3],
    up: [f64; 3],
    fov: f64,
    bkc: [f64; 3],
    #[serde(default)]
    ai: [f64; 3],
    #[serde(default = "default_two_sided")]
    twosiderender: bool,
    /// Keys this renderer does not act on (antialiasing, global illumination, ...)
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

fn default_kd() -> f64 {
    1.0
}

fn default_pc() -> f64 {
    1.0
}

fn default_two_sided() -> bool {
    true
}

/// Load a scene from a JSON file.
///
/// # Example
///
/// ```ignore
/// use whitted_core::load_scene;
///
/// let scene = load_scene("scenes/cornell.json")?;
/// println!("{} outputs", scene.output_count());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    log::debug!("Reading scene file {:?}", path);
    let json = std::fs::read_to_string(path)?;
    load_scene_from_str(&json)
}

/// Load a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> LoadResult<Scene> {
    let file: SceneFile = serde_json::from_str(json)?;

    let mut scene = Scene::new();

    for desc in file.geometry {
        scene.add_geometry(convert_geometry(desc));
    }

    for (index, desc) in file.light.into_iter().enumerate() {
        match desc {
            LightDesc::Point(p) => scene.add_light(Light::point(
                Vec3::from(p.centre),
                Color::from(p.id),
                Color::from(p.is),
            )),
            LightDesc::Area(_) => {
                return Err(LoadError::Unsupported(format!(
                    "light[{}]: area lights are not supported",
                    index
                )));
            }
        }
    }

    for desc in file.output {
        for key in desc.extra.keys() {
            log::warn!("Output {:?}: ignoring unsupported key '{}'", desc.filename, key);
        }
        scene.add_output(convert_output(desc));
    }

    validate_scene(&scene)?;

    let (spheres, rectangles) = scene.geometry_breakdown();
    log::info!(
        "Loaded scene: {} spheres, {} rectangles, {} lights, {} outputs",
        spheres,
        rectangles,
        scene.light_count(),
        scene.output_count()
    );

    Ok(scene)
}

fn convert_material(desc: MaterialDesc) -> Arc<Material> {
    Arc::new(Material {
        ambient: Color::from(desc.ac),
        diffuse: Color::from(desc.dc),
        specular: Color::from(desc.sc),
        ka: desc.ka,
        kd: desc.kd,
        ks: desc.ks,
        phong_exponent: desc.pc,
    })
}

fn convert_geometry(desc: GeometryDesc) -> Geometry {
    match desc {
        GeometryDesc::Sphere(s) => Sphere::new(
            Vec3::from(s.centre),
            s.radius,
            convert_material(s.material),
        )
        .into(),
        GeometryDesc::Rectangle(r) => Rectangle::new(
            Vec3::from(r.p1),
            Vec3::from(r.p2),
            Vec3::from(r.p3),
            Vec3::from(r.p4),
            convert_material(r.material),
        )
        .into(),
    }
}

fn convert_output(desc: OutputDesc) -> OutputConfig {
    OutputConfig {
        filename: desc.filename.into(),
        width: desc.size[0],
        height: desc.size[1],
        camera_center: Vec3::from(desc.centre),
        look_at: Vec3::from(desc.lookat),
        up: Vec3::from(desc.up),
        fov: desc.fov,
        background: Color::from(desc.bkc),
        ambient_intensity: Color::from(desc.ai),
        two_sided: desc.twosiderender,
    }
}

/// Check the numeric content of a scene.
///
/// Rendering assumes a scene that passes this check: positive radii,
/// non-negative colors, a usable camera basis and a non-empty image.
pub fn validate_scene(scene: &Scene) -> LoadResult<()> {
    if scene.outputs.is_empty() {
        return Err(invalid("scene declares no outputs".to_string()));
    }

    for (index, geometry) in scene.geometry.iter().enumerate() {
        if let Geometry::Sphere(s) = geometry {
            if !(s.radius > 0.0) {
                return Err(invalid(format!(
                    "geometry[{}]: sphere radius must be positive, got {}",
                    index, s.radius
                )));
            }
        }
        if !geometry.material().is_physical() {
            return Err(invalid(format!(
                "geometry[{}]: {} material has a negative color or coefficient, or a non-positive exponent",
                index,
                geometry.kind()
            )));
        }
    }

    for (index, light) in scene.lights.iter().enumerate() {
        if !non_negative(light.diffuse_intensity) || !non_negative(light.specular_intensity) {
            return Err(invalid(format!("light[{}]: intensities must be non-negative", index)));
        }
    }

    for (index, output) in scene.outputs.iter().enumerate() {
        if output.width == 0 || output.height == 0 {
            return Err(invalid(format!(
                "output[{}]: image size must be non-zero, got {}x{}",
                index, output.width, output.height
            )));
        }
        if !(output.fov > 0.0 && output.fov < 180.0) {
            return Err(invalid(format!(
                "output[{}]: fov must be in (0, 180) degrees, got {}",
                index, output.fov
            )));
        }
        if output.look_at.length_squared() == 0.0 || output.up.length_squared() == 0.0 {
            return Err(invalid(format!(
                "output[{}]: lookat and up must be non-zero",
                index
            )));
        }
        if output.up.cross(output.look_at).length_squared() == 0.0 {
            return Err(invalid(format!(
                "output[{}]: up is parallel to lookat",
                index
            )));
        }
        if !non_negative(output.background) || !non_negative(output.ambient_intensity) {
            return Err(invalid(format!(
                "output[{}]: background and ambient intensity must be non-negative",
                index
            )));
        }
    }

    Ok(())
}

fn invalid(message: String) -> LoadError {
    LoadError::Invalid(message)
}

fn non_negative(c: Color) -> bool {
    c.cmpge(Color::ZERO).all()
}
