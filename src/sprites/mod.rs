//! Sprite generators. Each function runs a fixed drawing program and hands
//! back the finished canvas; callers decide where it gets written.

pub mod biome;
pub mod gem;
pub mod pickaxe;
pub mod unlock;

use image::Rgba;

/// Three-tone palette for the shaded icons.
#[derive(Clone, Copy)]
pub struct Shading {
    pub base: Rgba<u8>,
    pub dark: Rgba<u8>,
    pub light: Rgba<u8>,
}

impl Shading {
    /// Shade for a pixel offset from the shape center: strictly lower-right
    /// takes the dark tone, strictly upper-left the highlight, everything on
    /// or across an axis the base color.
    pub fn pick(&self, dx: i32, dy: i32) -> Rgba<u8> {
        if dx > 0 && dy > 0 {
            self.dark
        } else if dx < 0 && dy < 0 {
            self.light
        } else {
            self.base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::opaque;

    const SHADES: Shading = Shading {
        base: opaque(255, 215, 0),
        dark: opaque(212, 175, 55),
        light: opaque(255, 235, 100),
    };

    #[test]
    fn test_quadrants_map_to_tones() {
        assert_eq!(SHADES.pick(3, 2), SHADES.dark);
        assert_eq!(SHADES.pick(-1, -4), SHADES.light);
        assert_eq!(SHADES.pick(-3, 2), SHADES.base);
        assert_eq!(SHADES.pick(3, -2), SHADES.base);
    }

    #[test]
    fn test_axes_and_center_take_base() {
        assert_eq!(SHADES.pick(0, 0), SHADES.base);
        assert_eq!(SHADES.pick(0, 5), SHADES.base);
        assert_eq!(SHADES.pick(5, 0), SHADES.base);
        assert_eq!(SHADES.pick(0, -5), SHADES.base);
        assert_eq!(SHADES.pick(-5, 0), SHADES.base);
    }
}
