//! Nearest-hit queries against the whole scene.
//!
//! Primary and shadow rays go through the same [`trace`] call. The scan is
//! linear over every primitive; the closest `t` wins regardless of the
//! order primitives were declared in.

use whitted_core::Scene;
use whitted_math::{Interval, Ray};

use crate::hittable::{HitRecord, Hittable, HIT_EPSILON};

impl Hittable for Scene {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        self.geometry.hit(ray, ray_t)
    }
}

/// Closest hit along `ray` beyond the self-intersection epsilon.
pub fn trace<'a, H: Hittable + ?Sized>(world: &'a H, ray: &Ray) -> Option<HitRecord<'a>> {
    world.hit(ray, Interval::from_min(HIT_EPSILON))
}
