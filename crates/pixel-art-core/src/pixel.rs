//! The RGBA pixel value type.

use serde::{Deserialize, Serialize};

/// A single RGBA pixel with 8 bits per channel.
///
/// Two pixels are equal when all four channels match. The default pixel is
/// opaque black `(0, 0, 0, 255)`, which is also what out-of-bounds reads
/// return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0 = transparent, 255 = opaque)
    pub a: u8,
}

impl Default for Pixel {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Pixel {
    /// Create a pixel from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque pixel.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Channels in R, G, B, A order.
    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Squared Euclidean distance in RGB space. Alpha is ignored.
    #[inline]
    pub fn distance_sq(self, other: Pixel) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}
