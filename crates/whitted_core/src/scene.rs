//! Scene store types for the ray tracer.
//!
//! A [`Scene`] is populated once (usually by [`crate::loader`]) and is
//! read-only while rendering. Primitives share their material through an
//! `Arc`, so hit records can borrow it for as long as the scene lives.

use std::path::PathBuf;
use std::sync::Arc;

use whitted_math::{Color, Vec3};

/// A Phong material.
///
/// Reflectance colors are RGB in [0, 1]; the coefficients scale each term.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Ambient reflectance color
    pub ambient: Color,

    /// Diffuse reflectance color
    pub diffuse: Color,

    /// Specular reflectance color
    pub specular: Color,

    /// Ambient coefficient
    pub ka: f64,

    /// Diffuse coefficient
    pub kd: f64,

    /// Specular coefficient
    pub ks: f64,

    /// Specular exponent (shininess)
    pub phong_exponent: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::ZERO,
            diffuse: Color::splat(0.5), // Grey default
            specular: Color::ZERO,
            ka: 0.0,
            kd: 1.0,
            ks: 0.0,
            phong_exponent: 1.0,
        }
    }
}

impl Material {
    /// A purely diffuse material.
    pub fn diffuse(color: Color) -> Self {
        Self {
            diffuse: color,
            ..Default::default()
        }
    }

    /// Set the ambient term.
    pub fn with_ambient(mut self, color: Color, ka: f64) -> Self {
        self.ambient = color;
        self.ka = ka;
        self
    }

    /// Set the diffuse coefficient.
    pub fn with_kd(mut self, kd: f64) -> Self {
        self.kd = kd;
        self
    }

    /// Set the specular term.
    pub fn with_specular(mut self, color: Color, ks: f64, phong_exponent: f64) -> Self {
        self.specular = color;
        self.ks = ks;
        self.phong_exponent = phong_exponent;
        self
    }

    /// True if every color and coefficient is non-negative and the exponent is positive.
    pub fn is_physical(&self) -> bool {
        is_non_negative(self.ambient)
            && is_non_negative(self.diffuse)
            && is_non_negative(self.specular)
            && self.ka >= 0.0
            && self.kd >= 0.0
            && self.ks >= 0.0
            && self.phong_exponent > 0.0
    }
}

/// A sphere primitive.
#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    pub material: Arc<Material>,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// A planar quadrilateral given by four corners in winding order.
///
/// `p1`, `p2`, `p3` define the supporting plane and the face normal
/// `(p2 - p1) x (p3 - p1)`. Planarity and convexity are not checked.
#[derive(Clone, Debug)]
pub struct Rectangle {
    pub p1: Vec3,
    pub p2: Vec3,
    pub p3: Vec3,
    pub p4: Vec3,
    pub material: Arc<Material>,
}

impl Rectangle {
    pub fn new(p1: Vec3, p2: Vec3, p3: Vec3, p4: Vec3, material: Arc<Material>) -> Self {
        Self {
            p1,
            p2,
            p3,
            p4,
            material,
        }
    }

    /// Corners in boundary order.
    pub fn corners(&self) -> [Vec3; 4] {
        [self.p1, self.p2, self.p3, self.p4]
    }

    /// Unnormalized face normal. Zero for coincident or collinear corners.
    pub fn face_normal(&self) -> Vec3 {
        (self.p2 - self.p1).cross(self.p3 - self.p1)
    }
}

/// Any primitive the scene can hold.
#[derive(Clone, Debug)]
pub enum Geometry {
    Sphere(Sphere),
    Rectangle(Rectangle),
}

impl Geometry {
    /// Material of the primitive.
    pub fn material(&self) -> &Arc<Material> {
        match self {
            Geometry::Sphere(s) => &s.material,
            Geometry::Rectangle(r) => &r.material,
        }
    }

    /// Short name of the primitive kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Sphere(_) => "sphere",
            Geometry::Rectangle(_) => "rectangle",
        }
    }
}

impl From<Sphere> for Geometry {
    fn from(sphere: Sphere) -> Self {
        Geometry::Sphere(sphere)
    }
}

impl From<Rectangle> for Geometry {
    fn from(rect: Rectangle) -> Self {
        Geometry::Rectangle(rect)
    }
}

/// Kind of light source. Only point lights are supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    Point,
}

/// A light source.
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub position: Vec3,
    pub diffuse_intensity: Color,
    pub specular_intensity: Color,
}

impl Light {
    /// A point light with separate diffuse and specular intensities.
    pub fn point(position: Vec3, diffuse_intensity: Color, specular_intensity: Color) -> Self {
        Self {
            kind: LightKind::Point,
            position,
            diffuse_intensity,
            specular_intensity,
        }
    }
}

/// One image to produce: camera, resolution and per-image lighting settings.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputConfig {
    /// Destination image path
    pub filename: PathBuf,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Camera position
    pub camera_center: Vec3,

    /// View direction (a direction, not a target point)
    pub look_at: Vec3,

    /// Up vector
    pub up: Vec3,

    /// Vertical field of view in degrees
    pub fov: f64,

    /// Color of pixels whose primary ray hits nothing
    pub background: Color,

    /// Ambient light intensity
    pub ambient_intensity: Color,

    /// Flip normals towards the viewer before shading
    pub two_sided: bool,
}

impl OutputConfig {
    /// Camera at the origin looking down -Z with Y up, 90 degree fov, black background.
    pub fn new(filename: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            filename: filename.into(),
            width,
            height,
            camera_center: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            up: Vec3::Y,
            fov: 90.0,
            background: Color::ZERO,
            ambient_intensity: Color::ZERO,
            two_sided: true,
        }
    }

    /// Set camera position, view direction and up vector.
    pub fn with_camera(mut self, center: Vec3, look_at: Vec3, up: Vec3) -> Self {
        self.camera_center = center;
        self.look_at = look_at;
        self.up = up;
        self
    }

    /// Set vertical field of view in degrees.
    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    /// Set background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set ambient light intensity.
    pub fn with_ambient(mut self, intensity: Color) -> Self {
        self.ambient_intensity = intensity;
        self
    }

    /// Enable or disable two-sided shading.
    pub fn with_two_sided(mut self, two_sided: bool) -> Self {
        self.two_sided = two_sided;
        self
    }
}

/// A complete scene: primitives, lights and the images to render.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Primitives in declaration order
    pub geometry: Vec<Geometry>,

    /// Light sources
    pub lights: Vec<Light>,

    /// Images to produce
    pub outputs: Vec<OutputConfig>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive.
    pub fn add_geometry(&mut self, geometry: impl Into<Geometry>) {
        self.geometry.push(geometry.into());
    }

    /// Add a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Add an output.
    pub fn add_output(&mut self, output: OutputConfig) {
        self.outputs.push(output);
    }

    /// Get primitive count.
    pub fn geometry_count(&self) -> usize {
        self.geometry.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Get output count.
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Count primitives of each kind as `(spheres, rectangles)`.
    pub fn geometry_breakdown(&self) -> (usize, usize) {
        self.geometry
            .iter()
            .fold((0, 0), |(spheres, rects), g| match g {
                Geometry::Sphere(_) => (spheres + 1, rects),
                Geometry::Rectangle(_) => (spheres, rects + 1),
            })
    }
}

fn is_non_negative(c: Color) -> bool {
    c.cmpge(Color::ZERO).all()
}
