// Re-export glam for convenience
pub use glam;
pub use glam::DVec3;

/// Scene-space vector. All geometry is double precision.
pub type Vec3 = DVec3;

/// RGB color, components nominally in [0, 1].
pub type Color = DVec3;

// Whitted math types
mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;
