//! Whitted Core - scene store, scene loading and image output.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Geometry`, `Sphere`, `Rectangle`, `Material`,
//!   `Light`, `OutputConfig`
//! - **Scene loading**: the JSON scene format
//! - **Image output**: flat float buffers to PPM (or any format `image` knows)
//!
//! # Example
//!
//! ```ignore
//! use whitted_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} primitives, {} lights",
//!     scene.geometry_count(),
//!     scene.light_count());
//! ```

pub mod image_io;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use image_io::{save_image, WriteError, WriteResult};
pub use loader::{load_scene, load_scene_from_str, validate_scene, LoadError, LoadResult};
pub use scene::{Geometry, Light, LightKind, Material, OutputConfig, Rectangle, Scene, Sphere};
