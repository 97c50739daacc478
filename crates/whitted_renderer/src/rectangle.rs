//! Ray-rectangle intersection.
//!
//! The supporting plane comes from `p1`, `p2`, `p3`; the hit point is then
//! tested against the four boundary edges p1->p2->p3->p4->p1. A point is
//! inside when it lies on the non-negative side of every edge with respect
//! to the face normal, which assumes the corners are wound consistently.

use whitted_core::Rectangle;
use whitted_math::{Interval, Ray, Vec3};

use crate::hittable::{HitRecord, Hittable, PARALLEL_EPSILON};

/// True if `p` (on the rectangle's plane) is inside or on the boundary.
fn inside_edges(corners: &[Vec3; 4], normal: Vec3, p: Vec3) -> bool {
    (0..4).all(|k| {
        let a = corners[k];
        let b = corners[(k + 1) % 4];
        normal.dot((b - a).cross(p - a)) >= 0.0
    })
}

impl Hittable for Rectangle {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        // Coincident or collinear corners have no plane
        let normal = self.face_normal().try_normalize()?;

        let denom = normal.dot(ray.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = normal.dot(self.p1 - ray.origin()) / denom;
        if !ray_t.surrounds(t) {
            return None;
        }

        let p = ray.at(t);
        if !inside_edges(&self.corners(), normal, p) {
            return None;
        }

        Some(HitRecord {
            t,
            p,
            normal,
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::HIT_EPSILON;
    use std::sync::Arc;
    use whitted_core::Material;
    use whitted_math::Color;

    /// Unit square in the z = -2 plane, counter-clockwise seen from the origin.
    fn square(scale: f64) -> Rectangle {
        Rectangle::new(
            Vec3::new(-1.0, -1.0, -2.0) * scale,
            Vec3::new(1.0, -1.0, -2.0) * scale,
            Vec3::new(1.0, 1.0, -2.0) * scale,
            Vec3::new(-1.0, 1.0, -2.0) * scale,
            Arc::new(Material::diffuse(Color::ONE)),
        )
    }

    #[test]
    fn test_rectangle_hit() {
        let rect = square(1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let rec = rect.hit(&ray, Interval::from_min(HIT_EPSILON)).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-12);
        assert_eq!(rec.normal, Vec3::Z);
    }

    #[test]
    fn test_normal_not_reoriented_from_behind() {
        let rect = square(1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);

        let rec = rect.hit(&ray, Interval::from_min(HIT_EPSILON)).unwrap();
        assert!((rec.t - 3.0).abs() < 1e-12);
        assert_eq!(rec.normal, Vec3::Z);
    }

    #[test]
    fn test_plane_hit_outside_quad_rejected() {
        let rect = square(1.0);
        // Hits the plane at (1.5, 0, -2)
        let ray = Ray::new(Vec3::new(1.5, 0.0, 0.0), Vec3::NEG_Z);
        assert!(rect.hit(&ray, Interval::from_min(HIT_EPSILON)).is_none());

        // Diagonal outside a corner
        let ray = Ray::new(Vec3::new(1.2, 1.2, 0.0), Vec3::NEG_Z);
        assert!(rect.hit(&ray, Interval::from_min(HIT_EPSILON)).is_none());
    }

    #[test]
    fn test_edge_point_accepted() {
        let rect = square(1.0);
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::NEG_Z);
        assert!(rect.hit(&ray, Interval::from_min(HIT_EPSILON)).is_some());
    }

    #[test]
    fn test_parallel_ray_rejected() {
        let rect = square(1.0);
        let ray = Ray::new(Vec3::new(-5.0, 0.0, -2.0), Vec3::X);
        assert!(rect.hit(&ray, Interval::from_min(HIT_EPSILON)).is_none());
    }

    #[test]
    fn test_behind_origin_rejected() {
        let rect = square(1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(rect.hit(&ray, Interval::from_min(HIT_EPSILON)).is_none());
    }

    #[test]
    fn test_degenerate_corners_rejected() {
        let rect = Rectangle::new(
            Vec3::new(0.0, 0.0, -2.0),
            Vec3::new(0.0, 0.0, -2.0),
            Vec3::new(1.0, 1.0, -2.0),
            Vec3::new(0.0, 1.0, -2.0),
            Arc::new(Material::default()),
        );
        let ray = Ray::new(Vec3::new(0.2, 0.5, 0.0), Vec3::NEG_Z);
        assert!(rect.hit(&ray, Interval::from_min(HIT_EPSILON)).is_none());
    }

    #[test]
    fn test_uniform_scale_invariance() {
        let origins = [
            Vec3::new(0.3, -0.2, 0.5),
            Vec3::new(0.9, 0.9, 1.0),
            Vec3::new(1.4, 0.0, 0.0),
            Vec3::new(-0.5, 1.2, 3.0),
        ];
        let directions = [
            Vec3::NEG_Z,
            Vec3::new(0.1, -0.2, -1.0).normalize(),
            Vec3::new(-0.3, 0.0, -1.0).normalize(),
        ];

        for scale in [0.25, 3.7, 120.0] {
            let base = square(1.0);
            let scaled = square(scale);

            for origin in origins {
                for dir in directions {
                    let a = base.hit(&Ray::new(origin, dir), Interval::from_min(HIT_EPSILON));
                    let b = scaled.hit(&Ray::new(origin * scale, dir), Interval::from_min(HIT_EPSILON));

                    assert_eq!(a.is_some(), b.is_some(), "origin {:?} dir {:?}", origin, dir);
                    if let (Some(a), Some(b)) = (a, b) {
                        assert!((a.t * scale - b.t).abs() < 1e-9 * scale);
                    }
                }
            }
        }
    }

    #[test]
    fn test_inconsistent_winding_rejects() {
        // p3 and p4 swapped: the boundary self-intersects, so no point is
        // on the inner side of all four edges.
        let rect = Rectangle::new(
            Vec3::new(-1.0, -1.0, -2.0),
            Vec3::new(1.0, -1.0, -2.0),
            Vec3::new(-1.0, 1.0, -2.0),
            Vec3::new(1.0, 1.0, -2.0),
            Arc::new(Material::default()),
        );
        let ray = Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::NEG_Z);
        assert!(rect.hit(&ray, Interval::from_min(HIT_EPSILON)).is_none());
    }
}
