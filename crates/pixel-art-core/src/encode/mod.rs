//! Image encoding for the pixel art converter.
//!
//! This module provides functionality for:
//! - Choosing an output format from a file extension
//! - Encoding RGBA pixel data to PNG, JPEG or BMP
//!
//! PNG and BMP keep the alpha channel and are lossless. JPEG has no alpha
//! channel, so alpha is discarded before encoding.
//!
//! # Examples
//!
//! ```ignore
//! use pixel_art_core::encode::{encode_image, ImageFormat};
//!
//! let pixels = vec![128u8; 100 * 100 * 4]; // Gray image
//! let png = encode_image(&pixels, 100, 100, ImageFormat::Png).unwrap();
//! println!("Encoded {} bytes", png.len());
//! ```

mod format;
mod raster;

pub use format::ImageFormat;
pub use raster::{encode_bmp, encode_image, encode_jpeg, encode_png, EncodeError, JPEG_QUALITY};
