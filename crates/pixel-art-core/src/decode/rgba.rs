//! Decoding of any supported image into RGBA8.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;

use super::{DecodeError, DecodedImage};

/// Decode an image from bytes, expanding it to RGBA8.
///
/// # Arguments
///
/// * `bytes` - Raw image file bytes (PNG, JPEG or BMP)
///
/// # Returns
///
/// A `DecodedImage` with 4 bytes per pixel regardless of the source
/// channel count.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the format cannot be guessed or
/// the image data is invalid.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(DecodedImage::from_rgba_image(img.into_rgba8()))
}

/// Read and decode an image file.
///
/// # Errors
///
/// Returns `DecodeError::Io` if the file cannot be read, otherwise the same
/// errors as [`decode_image`].
pub fn read_image(path: &Path) -> Result<DecodedImage, DecodeError> {
    let bytes = std::fs::read(path)
        .map_err(|e| DecodeError::Io(format!("{}: {}", path.display(), e)))?;
    decode_image(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat};

    fn png_bytes(img: DynamicImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_rgba_png() {
        let src = image::RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 40]));
        let bytes = png_bytes(DynamicImage::ImageRgba8(src));

        let img = decode_image(&bytes).unwrap();
        assert_eq!((img.width, img.height), (4, 3));
        assert_eq!(img.pixels.len(), 4 * 3 * 4);
        assert_eq!(&img.pixels[0..4], &[10, 20, 30, 40]);
    }

    #[test]
    fn test_decode_rgb_png_expands_to_rgba() {
        let src = image::RgbImage::from_pixel(2, 2, image::Rgb([200, 100, 50]));
        let bytes = png_bytes(DynamicImage::ImageRgb8(src));

        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.pixels.len(), 2 * 2 * 4);
        assert_eq!(&img.pixels[0..4], &[200, 100, 50, 255]);
    }

    #[test]
    fn test_decode_gray_png_expands_to_rgba() {
        let src = image::GrayImage::from_pixel(2, 1, image::Luma([77]));
        let bytes = png_bytes(DynamicImage::ImageLuma8(src));

        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.pixels, vec![77, 77, 77, 255, 77, 77, 77, 255]);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        match result {
            Err(DecodeError::CorruptedFile(_)) => {}
            Err(e) => panic!("Expected CorruptedFile error, got: {:?}", e),
            Ok(_) => panic!("Expected error, got success"),
        }
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let src = image::RgbaImage::from_pixel(8, 8, image::Rgba([1, 2, 3, 255]));
        let bytes = png_bytes(DynamicImage::ImageRgba8(src));
        assert!(decode_image(&bytes[..bytes.len() / 2]).is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let path = std::env::temp_dir().join(format!(
            "pixel-art-missing-{}.png",
            std::process::id()
        ));
        assert!(matches!(read_image(&path), Err(DecodeError::Io(_))));
    }
}
