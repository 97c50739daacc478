//! Direct illumination: ambient, diffuse and Blinn-Phong specular with hard shadows.
//!
//! No secondary bounces are traced. Each light either contributes fully or,
//! when a primitive sits between it and the hit point, not at all.

use whitted_core::{Light, LightKind, Material, OutputConfig};
use whitted_math::{Color, Ray, Vec3};

use crate::hittable::{HitRecord, Hittable};
use crate::tracer::trace;

/// Shadow rays start this far off the surface along the shading normal so
/// they cannot re-hit the surface they leave.
pub const SHADOW_BIAS: f64 = 1e-6;

/// Normal used for shading.
///
/// With two-sided shading a normal facing away from the viewer is flipped,
/// so thin surfaces such as rectangles light the same from either side.
#[inline]
pub fn facing_normal(normal: Vec3, view: Vec3, two_sided: bool) -> Vec3 {
    if two_sided && normal.dot(view) < 0.0 {
        -normal
    } else {
        normal
    }
}

/// True if something lies between `point` and the light.
///
/// Only hits strictly closer than the light count; geometry behind the light
/// casts no shadow.
pub fn is_occluded<H: Hittable + ?Sized>(world: &H, point: Vec3, normal: Vec3, light: &Light) -> bool {
    let to_light = light.position - point;
    let distance = to_light.length();
    if distance == 0.0 {
        return false;
    }

    let shadow_ray = Ray::new(point + SHADOW_BIAS * normal, to_light / distance);
    matches!(trace(world, &shadow_ray), Some(rec) if rec.t < distance)
}

/// Diffuse plus specular light arriving from one light, ignoring occlusion.
fn direct_light(material: &Material, light: &Light, point: Vec3, normal: Vec3, view: Vec3) -> Color {
    let to_light = match light.kind {
        LightKind::Point => (light.position - point).normalize_or_zero(),
    };

    let n_dot_l = normal.dot(to_light);
    if n_dot_l <= 0.0 {
        return Color::ZERO;
    }

    let diffuse = material.kd * material.diffuse * light.diffuse_intensity * n_dot_l;

    let half = (to_light + view).normalize_or_zero();
    let n_dot_h = normal.dot(half).max(0.0);
    let specular = material.ks
        * material.specular
        * light.specular_intensity
        * n_dot_h.powf(material.phong_exponent);

    diffuse + specular
}

/// Color of a surface hit seen along `ray`.
///
/// The result is clamped to at most 1.0 per channel. There is no lower
/// clamp: every term is non-negative for non-negative inputs.
pub fn shade<H: Hittable + ?Sized>(
    world: &H,
    lights: &[Light],
    output: &OutputConfig,
    ray: &Ray,
    hit: &HitRecord,
) -> Color {
    let material = hit.material;
    let mut color = material.ka * material.ambient * output.ambient_intensity;

    let view = (-ray.direction()).normalize_or_zero();
    let normal = facing_normal(hit.normal, view, output.two_sided);

    for light in lights {
        if is_occluded(world, hit.p, normal, light) {
            continue;
        }
        color += direct_light(material, light, hit.p, normal, view);
    }

    debug_assert!(
        color.cmpge(Color::ZERO).all(),
        "shaded color has a negative channel: {:?}",
        color
    );

    color.min(Color::ONE)
}
