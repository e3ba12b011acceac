//! Core types for image decoding.

use thiserror::Error;

/// Number of channels in every decoded image.
pub const RGBA_CHANNELS: u8 = 4;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// The bytes are not a recognized image or the image is corrupted.
    #[error("Corrupted or unsupported image file: {0}")]
    CorruptedFile(String),

    /// The decoded pixel data does not match the reported dimensions.
    #[error("Invalid dimensions: {width}x{height} does not match {actual} bytes of pixel data")]
    InvalidDimensions {
        width: u32,
        height: u32,
        actual: usize,
    },
}

/// A decoded image with RGBA pixel data.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage, checking the pixel buffer length.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        let expected = (width as usize) * (height as usize) * RGBA_CHANNELS as usize;
        if pixels.len() != expected {
            return Err(DecodeError::InvalidDimensions {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a DecodedImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
