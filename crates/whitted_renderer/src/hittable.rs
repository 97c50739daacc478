//! Hittable trait and HitRecord for ray-object intersection.

use whitted_core::{Geometry, Material};
use whitted_math::{Interval, Ray, Vec3};

/// Hits closer than this to the ray origin are rejected as self-intersections
/// with the surface the ray just left.
pub const HIT_EPSILON: f64 = 1e-6;

/// Below this, `|normal . direction|` means the ray runs along a plane and a
/// squared direction length means the ray has no direction.
pub const PARALLEL_EPSILON: f64 = 1e-8;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal. Spheres: outward. Rectangles: the fixed face normal.
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest hit with `t` strictly inside `ray_t`, if any.
    ///
    /// Implementations are pure: they never modify the ray or the object.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}

impl Hittable for Geometry {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        match self {
            Geometry::Sphere(sphere) => sphere.hit(ray, ray_t),
            Geometry::Rectangle(rect) => rect.hit(ray, ray_t),
        }
    }
}

impl<T: Hittable> Hittable for [T] {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for object in self {
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

impl<T: Hittable> Hittable for Vec<T> {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        self.as_slice().hit(ray, ray_t)
    }
}
