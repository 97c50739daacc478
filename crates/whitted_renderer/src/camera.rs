//! Camera for primary ray generation.

use whitted_core::OutputConfig;
use whitted_math::{Ray, Vec3};

/// Pinhole camera derived from an output configuration.
///
/// The basis keeps `w` pointing backwards from the view direction, so rays
/// travel along `-w`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    center: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,

    /// Width over height
    aspect: f64,
    /// tan(fov / 2)
    scale: f64,
}

impl Camera {
    /// Build the camera basis for an output.
    pub fn from_output(output: &OutputConfig) -> Self {
        let w = -output.look_at.normalize_or_zero();
        let u = output.up.cross(w).normalize_or_zero();
        let v = w.cross(u);

        let aspect = output.width as f64 / output.height as f64;
        let scale = (output.fov.to_radians() / 2.0).tan();

        log::debug!(
            "Camera at {:?}: u={:?} v={:?} w={:?} aspect={:.3} scale={:.3}",
            output.camera_center,
            u,
            v,
            w,
            aspect,
            scale
        );

        Self {
            image_width: output.width,
            image_height: output.height,
            center: output.camera_center,
            u,
            v,
            w,
            aspect,
            scale,
        }
    }

    /// Camera position.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Orthonormal basis `(u, v, w)`: right, up, backwards.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }

    /// Primary ray through the centre of pixel `(i, j)`, `j = 0` being the top row.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let x = (2.0 * (i as f64 + 0.5) / self.image_width as f64 - 1.0) * self.aspect * self.scale;
        let y = (1.0 - 2.0 * (j as f64 + 0.5) / self.image_height as f64) * self.scale;

        Ray::normalized(self.center, x * self.u + y * self.v - self.w)
    }
}
