//! Block pixelation and palette quantization.
//!
//! # Algorithm
//!
//! The image is split into non-overlapping `block_size x block_size` blocks
//! scanned in row-major order. Blocks on the right and bottom edges are
//! clipped to the image, so they may be smaller. Every pixel in a block is
//! replaced by the block's per-channel average, computed with integer sums
//! and truncating division.
//!
//! Averages are always read from the untouched source grid and written to a
//! separate output grid, which replaces the source once all blocks are done.
//!
//! Palette quantization runs after block averaging and maps every pixel to
//! the closest palette entry by squared RGB distance (see
//! [`nearest_color`]).

use crate::palette::nearest_color;
use crate::{Pixel, PixelBuffer};

/// Average all four channels of the pixels in a block, truncating.
fn block_average(
    src: &[Pixel],
    stride: usize,
    x_range: std::ops::Range<usize>,
    y_range: std::ops::Range<usize>,
) -> Pixel {
    let (mut r, mut g, mut b, mut a) = (0u64, 0u64, 0u64, 0u64);
    let mut count = 0u64;

    for y in y_range {
        let row = &src[y * stride..(y + 1) * stride];
        for p in &row[x_range.clone()] {
            r += p.r as u64;
            g += p.g as u64;
            b += p.b as u64;
            a += p.a as u64;
            count += 1;
        }
    }

    if count == 0 {
        return Pixel::default();
    }

    Pixel::new(
        (r / count) as u8,
        (g / count) as u8,
        (b / count) as u8,
        (a / count) as u8,
    )
}

/// Replace each block of the image with its average color.
///
/// Does nothing if `block_size <= 1` or the buffer is empty.
///
/// # Example
///
/// ```ignore
/// use pixel_art_core::{pixelate, Pixel, PixelBuffer};
///
/// let mut image = PixelBuffer::filled(10, 10, Pixel::rgb(40, 80, 120));
/// pixelate(&mut image, 4);
/// assert_eq!(image.pixel(9, 9), Pixel::rgb(40, 80, 120));
/// ```
pub fn pixelate(image: &mut PixelBuffer, block_size: u32) {
    if block_size <= 1 || image.is_empty() {
        return;
    }

    let width = image.width() as usize;
    let height = image.height() as usize;
    let block = block_size as usize;
    let src = image.pixels();
    let mut output = src.to_vec();

    for y in (0..height).step_by(block) {
        let y_end = (y + block).min(height);
        for x in (0..width).step_by(block) {
            let x_end = (x + block).min(width);
            let avg = block_average(src, width, x..x_end, y..y_end);

            for by in y..y_end {
                output[by * width + x..by * width + x_end].fill(avg);
            }
        }
    }

    image.replace_pixels(output);
    log::info!("Applied pixelation, block size: {}", block_size);
}

/// Pixelate, then snap every pixel to the nearest palette color.
///
/// The replacement is the full palette entry, alpha included. With an empty
/// palette or `block_size <= 1` this is plain [`pixelate`] and the palette is
/// ignored.
pub fn pixelate_with_palette(image: &mut PixelBuffer, block_size: u32, palette: &[Pixel]) {
    if palette.is_empty() || block_size <= 1 {
        pixelate(image, block_size);
        return;
    }

    pixelate(image, block_size);

    for pixel in image.pixels_mut() {
        if let Some(closest) = nearest_color(*pixel, palette) {
            *pixel = closest;
        }
    }

    log::info!(
        "Applied palette pixelation, block size: {}, palette size: {}",
        block_size,
        palette.len()
    );
}
