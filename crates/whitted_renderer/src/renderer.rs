//! Image synthesis.
//!
//! One primary ray per pixel through the pixel centre; hits are shaded with
//! direct lighting, misses take the background color. Scanlines are
//! independent, so with `RenderConfig::parallel` they are rendered on the
//! rayon pool, each worker writing its own row of the buffer.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use whitted_core::{save_image, OutputConfig, Scene, WriteResult};
use whitted_math::Color;

use crate::{shade, trace, Camera};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Render scanlines in parallel on the rayon pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl RenderConfig {
    /// Single-threaded rendering.
    pub fn serial() -> Self {
        Self { parallel: false }
    }

    /// Enable or disable parallel rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Float RGB image, flat and row-major with the top row first.
///
/// Holds `width * height * 3` interleaved channel values.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    data: Vec<f64>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::ZERO)
    }

    /// Create an image buffer filled with one color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let pixels = width as usize * height as usize;
        let data = std::iter::repeat(color.to_array())
            .take(pixels)
            .flatten()
            .collect();
        Self { width, height, data }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        3 * (y as usize * self.width as usize + x as usize)
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        let i = self.offset(x, y);
        Color::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.offset(x, y);
        self.data[i..i + 3].copy_from_slice(&color.to_array());
    }

    /// Iterate over pixels in storage order.
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.data
            .chunks_exact(3)
            .map(|c| Color::new(c[0], c[1], c[2]))
    }

    /// Flat channel data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Convert to 8-bit RGB (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        whitted_core::image_io::to_rgb8(&self.data)
    }

    /// Write the image; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> WriteResult<()> {
        save_image(path, self.width, self.height, &self.data)
    }
}

/// An output configuration together with its rendered image.
#[derive(Debug, Clone)]
pub struct RenderedImage<'a> {
    pub output: &'a OutputConfig,
    pub image: ImageBuffer,
}

/// Color seen through pixel (i, j).
pub fn render_pixel(camera: &Camera, scene: &Scene, output: &OutputConfig, i: u32, j: u32) -> Color {
    let ray = camera.get_ray(i, j);
    match trace(scene, &ray) {
        Some(hit) => shade(scene, &scene.lights, output, &ray, &hit),
        None => output.background,
    }
}

/// Render one output of the scene into a fresh buffer.
pub fn render(scene: &Scene, output: &OutputConfig, config: &RenderConfig) -> ImageBuffer {
    let camera = Camera::from_output(output);
    let mut image = ImageBuffer::new(output.width, output.height);

    if scene.geometry.is_empty() {
        log::warn!(
            "Scene has no geometry; {:?} will be a uniform background",
            output.filename
        );
    }

    let row_len = 3 * output.width as usize;
    if row_len == 0 {
        return image;
    }

    let render_row = |(j, row): (usize, &mut [f64])| {
        for (i, px) in row.chunks_exact_mut(3).enumerate() {
            let color = render_pixel(&camera, scene, output, i as u32, j as u32);
            px.copy_from_slice(&color.to_array());
        }
    };

    if config.parallel {
        image.data.par_chunks_mut(row_len).enumerate().for_each(render_row);
    } else {
        image.data.chunks_mut(row_len).enumerate().for_each(render_row);
    }

    image
}

/// Render every output declared by the scene, in declaration order.
pub fn render_all<'a>(scene: &'a Scene, config: &RenderConfig) -> Vec<RenderedImage<'a>> {
    scene
        .outputs
        .iter()
        .map(|output| {
            log::info!(
                "Rendering {:?} at {}x{}...",
                output.filename,
                output.width,
                output.height
            );
            let start = Instant::now();
            let image = render(scene, output, config);
            log::info!("Rendered {:?} in {:?}", output.filename, start.elapsed());
            RenderedImage { output, image }
        })
        .collect()
}
