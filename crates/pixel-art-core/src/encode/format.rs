//! Output format selection.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Image formats the converter can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    /// Lossless PNG with alpha.
    Png,
    /// JPEG at maximum quality, alpha discarded.
    Jpeg,
    /// Uncompressed 32-bit BMP.
    Bmp,
}

impl ImageFormat {
    /// Match a file extension, ignoring ASCII case.
    ///
    /// Accepts `png`, `jpg`, `jpeg` and `bmp`. The leading dot is optional.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext).to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    /// Pick the format from the extension of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}
