//! PNG, JPEG and BMP encoding of RGBA pixel data.
//!
//! All encoders take RGBA8 pixel data (4 bytes per pixel, row-major) and
//! return the encoded file bytes.

use std::io::Cursor;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use super::ImageFormat;

/// Quality used for JPEG output.
pub const JPEG_QUALITY: u8 = 100;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// There is no image to encode.
    #[error("No image data to save")]
    EmptyBuffer,

    /// The output path does not name a supported format.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the output file failed
    #[error("I/O error: {0}")]
    Io(String),
}

fn validate(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 4;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// Encode RGBA pixel data to PNG bytes.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height)?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode RGBA pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// JPEG carries no alpha channel; alpha is dropped, not blended.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height)?;

    let quality = quality.clamp(1, 100);

    let rgb: Vec<u8> = pixels
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode RGBA pixel data to 32-bit BMP bytes.
pub fn encode_bmp(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height)?;

    let mut buffer = Cursor::new(Vec::new());
    BmpEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode RGBA pixel data in the given format.
///
/// JPEG output always uses [`JPEG_QUALITY`].
pub fn encode_image(
    pixels: &[u8],
    width: u32,
    height: u32,
    format: ImageFormat,
) -> Result<Vec<u8>, EncodeError> {
    log::debug!("Encoding {}x{} image as {:?}", width, height, format);
    match format {
        ImageFormat::Png => encode_png(pixels, width, height),
        ImageFormat::Jpeg => encode_jpeg(pixels, width, height, JPEG_QUALITY),
        ImageFormat::Bmp => encode_bmp(pixels, width, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_image;

    fn gradient(width: u32, height: u32) -> Vec<u8> {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width) as u8);
                pixels.push((y * 255 / height) as u8);
                pixels.push(128);
                pixels.push(255);
            }
        }
        pixels
    }

    #[test]
    fn test_encode_png_signature() {
        let png = encode_png(&[128u8; 10 * 10 * 4], 10, 10).unwrap();
        assert_eq!(&png[0..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_jpeg_markers() {
        let jpeg = encode_jpeg(&gradient(100, 100), 100, 100, 90).unwrap();

        // SOI and EOI markers
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        let len = jpeg.len();
        assert_eq!(&jpeg[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_bmp_signature() {
        let bmp = encode_bmp(&[200u8; 3 * 2 * 4], 3, 2).unwrap();
        assert_eq!(&bmp[0..2], b"BM");
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let pixels = vec![128u8; 10 * 10 * 4];
        assert!(encode_jpeg(&pixels, 10, 10, 0).is_ok());
        assert!(encode_jpeg(&pixels, 10, 10, 255).is_ok());
    }

    #[test]
    fn test_png_round_trip_is_exact() {
        let pixels = gradient(17, 9);
        let png = encode_png(&pixels, 17, 9).unwrap();
        let decoded = decode_image(&png).unwrap();

        assert_eq!((decoded.width, decoded.height), (17, 9));
        assert_eq!(decoded.pixels, pixels);
    }

    #[test]
    fn test_png_keeps_alpha() {
        let pixels = [10, 20, 30, 0, 40, 50, 60, 128];
        let png = encode_png(&pixels, 2, 1).unwrap();
        assert_eq!(decode_image(&png).unwrap().pixels, pixels.to_vec());
    }

    #[test]
    fn test_bmp_round_trip_solid_color() {
        let pixels: Vec<u8> = [90, 160, 30, 255].repeat(6 * 5);
        let bmp = encode_bmp(&pixels, 6, 5).unwrap();
        let decoded = decode_image(&bmp).unwrap();

        assert_eq!((decoded.width, decoded.height), (6, 5));
        assert_eq!(decoded.pixels, pixels);
    }

    #[test]
    fn test_jpeg_solid_color_is_close() {
        let pixels: Vec<u8> = [200, 40, 90, 255].repeat(16 * 16);
        let jpeg = encode_jpeg(&pixels, 16, 16, JPEG_QUALITY).unwrap();
        let decoded = decode_image(&jpeg).unwrap();

        assert_eq!((decoded.width, decoded.height), (16, 16));
        for (a, b) in decoded.pixels.iter().zip(pixels.iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 4);
        }
    }

    #[test]
    fn test_encode_image_dispatch() {
        let pixels = vec![64u8; 4 * 4 * 4];
        let png = encode_image(&pixels, 4, 4, ImageFormat::Png).unwrap();
        let jpeg = encode_image(&pixels, 4, 4, ImageFormat::Jpeg).unwrap();
        let bmp = encode_image(&pixels, 4, 4, ImageFormat::Bmp).unwrap();

        assert_eq!(&png[1..4], b"PNG");
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&bmp[0..2], b"BM");
    }

    #[test]
    fn test_invalid_pixel_data() {
        let pixels = vec![128u8; 10 * 10 * 3]; // RGB, not RGBA
        for format in [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Bmp] {
            let result = encode_image(&pixels, 10, 10, format);
            assert!(matches!(
                result,
                Err(EncodeError::InvalidPixelData {
                    expected: 400,
                    actual: 300
                })
            ));
        }
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(matches!(
            encode_png(&[], 0, 10),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_bmp(&[], 10, 0),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }
}
