//! Fixed color palettes and nearest-color lookup.
//!
//! A palette is an ordered slice of [`Pixel`]s. Order matters: when two
//! entries are equally close to a color, the earlier one wins.

use crate::Pixel;

/// The classic 16-color retro game palette.
pub const RETRO_PALETTE: [Pixel; 16] = [
    Pixel::rgb(0, 0, 0),       // black
    Pixel::rgb(255, 255, 255), // white
    Pixel::rgb(255, 0, 0),     // red
    Pixel::rgb(0, 255, 0),     // green
    Pixel::rgb(0, 0, 255),     // blue
    Pixel::rgb(255, 255, 0),   // yellow
    Pixel::rgb(255, 0, 255),   // magenta
    Pixel::rgb(0, 255, 255),   // cyan
    Pixel::rgb(128, 128, 128), // gray
    Pixel::rgb(128, 0, 0),     // maroon
    Pixel::rgb(0, 128, 0),     // dark green
    Pixel::rgb(0, 0, 128),     // navy
    Pixel::rgb(128, 128, 0),   // olive
    Pixel::rgb(128, 0, 128),   // purple
    Pixel::rgb(0, 128, 128),   // teal
    Pixel::rgb(192, 192, 192), // silver
];

/// Find the palette entry closest to `color` by squared RGB distance.
///
/// Returns the full palette entry, alpha included. Ties go to the entry
/// with the lowest index. Returns `None` only for an empty palette.
pub fn nearest_color(color: Pixel, palette: &[Pixel]) -> Option<Pixel> {
    let mut entries = palette.iter();
    let mut closest = *entries.next()?;
    let mut min_dist = color.distance_sq(closest);

    for &entry in entries {
        let dist = color.distance_sq(entry);
        if dist < min_dist {
            min_dist = dist;
            closest = entry;
        }
    }

    Some(closest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retro_palette_contents() {
        assert_eq!(RETRO_PALETTE.len(), 16);
        assert_eq!(RETRO_PALETTE[0], Pixel::rgb(0, 0, 0));
        assert_eq!(RETRO_PALETTE[15], Pixel::rgb(192, 192, 192));
        assert!(RETRO_PALETTE.iter().all(|p| p.a == 255));
    }

    #[test]
    fn test_nearest_empty_palette() {
        assert_eq!(nearest_color(Pixel::rgb(1, 2, 3), &[]), None);
    }

    #[test]
    fn test_nearest_single_entry_always_wins() {
        let only = Pixel::new(9, 9, 9, 7);
        assert_eq!(nearest_color(Pixel::rgb(250, 0, 250), &[only]), Some(only));
    }

    #[test]
    fn test_nearest_black_white() {
        let palette = [Pixel::rgb(0, 0, 0), Pixel::rgb(255, 255, 255)];

        // 30000 to black vs 72075 to white
        assert_eq!(
            nearest_color(Pixel::rgb(100, 100, 100), &palette),
            Some(Pixel::rgb(0, 0, 0))
        );
        assert_eq!(
            nearest_color(Pixel::rgb(200, 200, 200), &palette),
            Some(Pixel::rgb(255, 255, 255))
        );
    }

    #[test]
    fn test_tie_prefers_first_entry() {
        let first = Pixel::new(10, 10, 10, 255);
        let second = Pixel::new(10, 10, 10, 0);
        assert_eq!(
            nearest_color(Pixel::rgb(77, 1, 200), &[first, second]),
            Some(first)
        );

        // Equidistant distinct colors: 0 and 200 around 100
        let low = Pixel::rgb(0, 0, 0);
        let high = Pixel::rgb(200, 200, 200);
        assert_eq!(nearest_color(Pixel::rgb(100, 100, 100), &[low, high]), Some(low));
        assert_eq!(nearest_color(Pixel::rgb(100, 100, 100), &[high, low]), Some(high));
    }

    #[test]
    fn test_nearest_ignores_input_alpha() {
        let palette = [Pixel::rgb(255, 0, 0), Pixel::rgb(0, 0, 255)];
        assert_eq!(
            nearest_color(Pixel::new(240, 10, 10, 0), &palette),
            Some(Pixel::rgb(255, 0, 0))
        );
    }

    #[test]
    fn test_retro_palette_exact_matches() {
        for entry in RETRO_PALETTE {
            assert_eq!(nearest_color(entry, &RETRO_PALETTE), Some(entry));
        }
    }
}
