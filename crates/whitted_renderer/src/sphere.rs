//! Ray-sphere intersection.

use whitted_core::Sphere;
use whitted_math::{Interval, Ray};

use crate::hittable::{HitRecord, Hittable, PARALLEL_EPSILON};

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        if a < PARALLEL_EPSILON {
            return None;
        }
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Near root first; fall back to the far root when the near one is
        // behind the origin or within the self-intersection epsilon.
        let mut root = (-b - sqrtd) / (2.0 * a);
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / (2.0 * a);
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        Some(HitRecord {
            t: root,
            p,
            normal: (p - self.center).normalize_or_zero(),
            material: &self.material,
        })
    }
}
