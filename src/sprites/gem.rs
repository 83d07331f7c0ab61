//! Collectible gemstone and the block damage overlay.

use image::Rgba;

use crate::canvas::{opaque, Canvas};
use crate::error::Result;

const GEM: Rgba<u8> = opaque(65, 105, 225);
const SPARKLE: Rgba<u8> = opaque(255, 255, 255);
const INK: Rgba<u8> = opaque(0, 0, 0);

/// Diamond vertices, clockwise from the top point.
const FACETS: [(i32, i32); 4] = [(12, 2), (22, 12), (12, 22), (2, 12)];

/// 24x24 gemstone: royal blue diamond with four white sparkle points.
pub fn gemstone() -> Result<Canvas> {
    let mut canvas = Canvas::new(24, 24)?;
    canvas.fill_polygon(&FACETS, GEM)?;
    canvas.plot_points(&[(8, 8), (16, 8), (12, 6), (12, 18)], SPARKLE)?;
    Ok(canvas)
}

/// 24x24 crack overlay: four strokes radiating through the center, meant to
/// be layered on top of a block sprite.
pub fn crack() -> Result<Canvas> {
    let mut canvas = Canvas::new(24, 24)?;
    canvas.draw_line(12, 6, 12, 18, INK, 2)?;
    canvas.draw_line(6, 12, 18, 12, INK, 2)?;
    canvas.draw_line(8, 8, 16, 16, INK, 2)?;
    canvas.draw_line(16, 8, 8, 16, INK, 2)?;
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::TRANSPARENT;

    #[test]
    fn test_gemstone_center_and_corners() {
        let canvas = gemstone().unwrap();
        assert_eq!(canvas.width(), 24);
        assert_eq!(canvas.get_pixel(12, 12), Some(GEM));
        assert_eq!(canvas.get_pixel(0, 0), Some(TRANSPARENT));
        assert_eq!(canvas.get_pixel(23, 23), Some(TRANSPARENT));
    }

    #[test]
    fn test_gemstone_sparkles_sit_on_the_facets() {
        let canvas = gemstone().unwrap();
        for point in [(8, 8), (16, 8), (12, 6), (12, 18)] {
            assert_eq!(canvas.get_pixel(point.0, point.1), Some(SPARKLE));
        }
        // sparkle neighbors keep the facet color
        assert_eq!(canvas.get_pixel(9, 8), Some(GEM));
        assert_eq!(canvas.get_pixel(12, 17), Some(GEM));
    }

    #[test]
    fn test_crack_strokes_cross_the_center() {
        let canvas = crack().unwrap();
        assert_eq!(canvas.get_pixel(12, 12), Some(INK));
        // tips of the horizontal and vertical strokes
        assert_eq!(canvas.get_pixel(12, 6), Some(INK));
        assert_eq!(canvas.get_pixel(12, 18), Some(INK));
        assert_eq!(canvas.get_pixel(6, 12), Some(INK));
        assert_eq!(canvas.get_pixel(18, 12), Some(INK));
        // diagonal tips
        assert_eq!(canvas.get_pixel(8, 8), Some(INK));
        assert_eq!(canvas.get_pixel(16, 16), Some(INK));
        assert_eq!(canvas.get_pixel(16, 8), Some(INK));
        assert_eq!(canvas.get_pixel(8, 16), Some(INK));
    }

    #[test]
    fn test_crack_background_stays_transparent() {
        let canvas = crack().unwrap();
        assert_eq!(canvas.get_pixel(0, 0), Some(TRANSPARENT));
        assert_eq!(canvas.get_pixel(23, 0), Some(TRANSPARENT));
        assert_eq!(canvas.get_pixel(2, 20), Some(TRANSPARENT));
    }

    #[test]
    fn test_gemstone_is_deterministic() {
        let a = gemstone().unwrap();
        let b = gemstone().unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
