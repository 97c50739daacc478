//! Writing rendered images to disk.
//!
//! Renders are flat `width * height * 3` float buffers (row-major, top row
//! first, interleaved RGB). They are quantized to 8 bits and handed to the
//! `image` crate, which picks the encoder from the file extension; `.ppm`
//! produces a binary P6 pixmap.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Pixel buffer has {actual} values, expected {expected} for the image size")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

pub type WriteResult<T> = Result<T, WriteError>;

/// Quantize a channel value in [0, 1] to a byte.
#[inline]
pub fn quantize(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a flat float RGB buffer to 8-bit RGB.
pub fn to_rgb8(data: &[f64]) -> Vec<u8> {
    data.iter().map(|&v| quantize(v)).collect()
}

/// Save a flat float RGB buffer as an image file.
///
/// Parent directories are created when missing.
pub fn save_image<P: AsRef<Path>>(path: P, width: u32, height: u32, data: &[f64]) -> WriteResult<()> {
    let path = path.as_ref();
    let expected = width as usize * height as usize * 3;
    if data.len() != expected {
        return Err(WriteError::SizeMismatch {
            expected,
            actual: data.len(),
        });
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let bytes = to_rgb8(data);
    image::save_buffer(path, &bytes, width, height, image::ColorType::Rgb8)?;
    log::debug!("Wrote {}x{} image to {:?}", width, height, path);

    Ok(())
}
