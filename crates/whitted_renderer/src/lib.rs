//! Whitted Renderer - CPU ray tracing with direct illumination.
//!
//! One primary ray per pixel, nearest-hit visibility over spheres and
//! rectangles, ambient + diffuse + Blinn-Phong specular shading and hard
//! shadows from point lights. No recursive reflection or refraction.

mod camera;
mod hittable;
mod rectangle;
mod renderer;
mod shading;
mod sphere;
mod tracer;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HIT_EPSILON, PARALLEL_EPSILON};
pub use renderer::{render, render_all, render_pixel, ImageBuffer, RenderConfig, RenderedImage};
pub use shading::{facing_normal, is_occluded, shade, SHADOW_BIAS};
pub use tracer::trace;

/// Re-export scene and math types used in the public API
pub use whitted_core::{Geometry, Light, Material, OutputConfig, Rectangle, Scene, Sphere};
pub use whitted_math::{Color, Interval, Ray, Vec3};
