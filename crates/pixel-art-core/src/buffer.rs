//! The pixel buffer store.
//!
//! [`PixelBuffer`] owns a `width x height` grid of RGBA pixels in row-major
//! order (`index = y * width + x`, origin top-left). A buffer is either
//! empty (nothing loaded, or the last load failed) or fully populated.
//!
//! Loading and saving go through the [`decode`](crate::decode) and
//! [`encode`](crate::encode) modules. Pixel access is bounds-checked;
//! out-of-range coordinates are reported and never panic.

use std::path::Path;

use thiserror::Error;

use crate::decode::{self, DecodeError, DecodedImage, RGBA_CHANNELS};
use crate::encode::{self, EncodeError, ImageFormat};
use crate::Pixel;

/// Errors from pixel access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Coordinates outside the grid.
    #[error("Pixel coordinates ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
}

/// An RGBA image held in memory as a flat grid of [`Pixel`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u8,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Pixel) -> Self {
        if width == 0 || height == 0 {
            return Self::new();
        }
        Self {
            width,
            height,
            channels: RGBA_CHANNELS,
            pixels: vec![fill; (width as usize) * (height as usize)],
        }
    }

    /// Build a buffer from a decoded image, one pixel per 4-byte group.
    pub fn from_decoded(image: DecodedImage) -> Self {
        if image.is_empty() {
            return Self::new();
        }
        let mut pixels = Vec::with_capacity(image.pixel_count());
        pixels.extend(
            image
                .pixels
                .chunks_exact(RGBA_CHANNELS as usize)
                .map(|px| Pixel::new(px[0], px[1], px[2], px[3])),
        );
        Self {
            width: image.width,
            height: image.height,
            channels: RGBA_CHANNELS,
            pixels,
        }
    }

    /// Build a buffer from raw RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidDimensions` if `rgba.len()` is not
    /// `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, DecodeError> {
        DecodedImage::new(width, height, rgba).map(Self::from_decoded)
    }

    /// Load an image file, replacing the current contents.
    ///
    /// On failure the buffer is left empty.
    pub fn load(&mut self, path: &Path) -> Result<(), DecodeError> {
        let result = decode::read_image(path);
        self.replace_with(result)
    }

    /// Decode an in-memory image, replacing the current contents.
    ///
    /// On failure the buffer is left empty.
    pub fn load_from_bytes(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        let result = decode::decode_image(bytes);
        self.replace_with(result)
    }

    fn replace_with(&mut self, result: Result<DecodedImage, DecodeError>) -> Result<(), DecodeError> {
        match result {
            Ok(image) => {
                *self = Self::from_decoded(image);
                log::info!("Loaded image: {}x{} pixels", self.width, self.height);
                Ok(())
            }
            Err(e) => {
                self.clear();
                Err(e)
            }
        }
    }

    /// Encode the buffer and write it to `path`.
    ///
    /// The format comes from the file extension (case-insensitive):
    /// `.png`, `.jpg`/`.jpeg` (quality 100) or `.bmp`.
    ///
    /// # Errors
    ///
    /// * `EncodeError::EmptyBuffer` if nothing is loaded; no file is touched.
    /// * `EncodeError::UnsupportedFormat` for any other extension; no file is touched.
    /// * `EncodeError::EncodingFailed` or `EncodeError::Io` if encoding or writing fails.
    pub fn save(&self, path: &Path) -> Result<(), EncodeError> {
        if self.is_empty() {
            return Err(EncodeError::EmptyBuffer);
        }
        let format = ImageFormat::from_path(path)
            .ok_or_else(|| EncodeError::UnsupportedFormat(path.display().to_string()))?;

        let bytes = self.encode(format)?;
        std::fs::write(path, bytes)
            .map_err(|e| EncodeError::Io(format!("{}: {}", path.display(), e)))?;

        log::info!("Saved image: {}", path.display());
        Ok(())
    }

    /// Encode the buffer in memory.
    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>, EncodeError> {
        if self.is_empty() {
            return Err(EncodeError::EmptyBuffer);
        }
        encode::encode_image(&self.to_rgba_bytes(), self.width, self.height, format)
    }

    /// Flatten to R, G, B, A bytes in row-major order.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_rgba()).collect()
    }

    /// Image width in pixels (0 when empty).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels (0 when empty).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel count: 4 once an image is loaded, 0 when empty.
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Swap in a new pixel grid of the same dimensions.
    pub(crate) fn replace_pixels(&mut self, pixels: Vec<Pixel>) {
        debug_assert_eq!(pixels.len(), self.pixels.len(), "Pixel grid size mismatch");
        self.pixels = pixels;
    }

    /// Drop the image and return to the empty state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Result<usize, BufferError> {
        if x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64 {
            Ok(y as usize * self.width as usize + x as usize)
        } else {
            Err(BufferError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Read the pixel at `(x, y)`.
    pub fn try_pixel(&self, x: i64, y: i64) -> Result<Pixel, BufferError> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Read the pixel at `(x, y)`, or the default pixel if out of bounds.
    ///
    /// Out-of-bounds reads are logged as warnings.
    pub fn pixel(&self, x: i64, y: i64) -> Pixel {
        self.try_pixel(x, y).unwrap_or_else(|e| {
            log::warn!("{}", e);
            Pixel::default()
        })
    }

    /// Write the pixel at `(x, y)`.
    ///
    /// Out-of-bounds writes are logged, return an error and change nothing.
    pub fn set_pixel(&mut self, x: i64, y: i64, pixel: Pixel) -> Result<(), BufferError> {
        match self.index(x, y) {
            Ok(i) => {
                self.pixels[i] = pixel;
                Ok(())
            }
            Err(e) => {
                log::warn!("{}", e);
                Err(e)
            }
        }
    }
}
