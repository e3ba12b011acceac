//! Image decoding for the pixel art converter.
//!
//! This module provides functionality for:
//! - Decoding PNG, JPEG and BMP images from bytes or from a file
//! - Normalizing every decoded image to 4-channel RGBA8
//!
//! # Architecture
//!
//! Decoding is delegated to the `image` crate. The format is guessed from
//! the file contents, not from the file name. Grayscale, RGB and 16-bit
//! sources are all expanded to RGBA8 so that downstream code only ever
//! sees one layout.
//!
//! # Examples
//!
//! ```ignore
//! use pixel_art_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod rgba;
mod types;

pub use rgba::{decode_image, read_image};
pub use types::{DecodeError, DecodedImage, RGBA_CHANNELS};
