//! Pixel Art Core - block pixelation library
//!
//! This crate turns a raster image into a "pixel art" rendition by
//! averaging square blocks of pixels and, optionally, snapping the result
//! to a fixed color palette.
//!
//! # Module Structure
//!
//! - `pixel` - The RGBA [`Pixel`] value type
//! - `buffer` - [`PixelBuffer`], the in-memory pixel grid with load/save
//! - `decode` - Image decoding to RGBA8
//! - `encode` - PNG/JPEG/BMP encoding and output format selection
//! - `palette` - Built-in palette and nearest-color lookup
//! - `pixelate` - Block averaging and palette quantization
//!
//! # Usage
//!
//! ```ignore
//! use pixel_art_core::{pixelate_with_palette, PixelBuffer, RETRO_PALETTE};
//!
//! let mut image = PixelBuffer::new();
//! image.load("input.png".as_ref())?;
//! pixelate_with_palette(&mut image, 8, &RETRO_PALETTE);
//! image.save("output.png".as_ref())?;
//! ```

pub mod buffer;
pub mod decode;
pub mod encode;
pub mod palette;
pub mod pixel;
pub mod pixelate;

pub use buffer::{BufferError, PixelBuffer};
pub use decode::DecodeError;
pub use encode::{EncodeError, ImageFormat};
pub use palette::{nearest_color, RETRO_PALETTE};
pub use pixel::Pixel;
pub use pixelate::{pixelate, pixelate_with_palette};
