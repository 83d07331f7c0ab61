//! Unlock icons: the gold key and the key-over-terrain biome unlock button.

use image::Rgba;

use super::Shading;
use crate::canvas::{opaque, Canvas, TRANSPARENT};
use crate::error::{Error, Result};

const GOLD: Rgba<u8> = opaque(255, 215, 0);
const GOLD_DARK: Rgba<u8> = opaque(212, 175, 55);
const GOLD_LIGHT: Rgba<u8> = opaque(255, 235, 100);

const GRASS: Rgba<u8> = opaque(76, 175, 80);
const GRASS_DARK: Rgba<u8> = opaque(56, 142, 60);
const SOIL: Rgba<u8> = opaque(121, 85, 72);
const SOIL_DARK: Rgba<u8> = opaque(93, 64, 55);

const KEY_SHADES: Shading = Shading {
    base: GOLD,
    dark: GOLD_DARK,
    light: GOLD_LIGHT,
};

/// Gold key unlock icon.
///
/// The head is a shaded disc with a transparent square punched out after the
/// disc is fully painted; the shaft and teeth reuse the same three gold tones.
/// Coordinates are fixed for the 32px default, so smaller sizes fail with
/// `OutOfBounds` and a zero size is rejected outright.
pub fn key_icon(size: u32) -> Result<Canvas> {
    if size == 0 {
        return Err(Error::InvalidParameters("icon size must be positive".into()));
    }
    let mut canvas = Canvas::new(size, size)?;

    // Disc head, radius 8 around (16, 16), shaded per pixel.
    let (cx, cy) = (16, 16);
    for x in 8..24 {
        for y in 8..24 {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= 64 {
                canvas.set_pixel(x, y, KEY_SHADES.pick(dx, dy))?;
            }
        }
    }

    // Square hole through the finished head.
    canvas.fill_rect(12, 12, 20, 20, TRANSPARENT);

    // Shaft, shaded along its vertical edges.
    for y in 24..28 {
        for x in 14..18 {
            let color = if x == 17 {
                GOLD_DARK
            } else if x == 14 {
                GOLD_LIGHT
            } else {
                GOLD
            };
            canvas.set_pixel(x, y, color)?;
        }
    }

    // Teeth flanking the shaft tip.
    for x in 10..22 {
        if (10..=14).contains(&x) || (18..=22).contains(&x) {
            canvas.set_pixel(x, 26, GOLD)?;
            if x >= 18 {
                canvas.set_pixel(x, 27, GOLD_DARK)?;
            }
            if x <= 14 {
                canvas.set_pixel(x, 25, GOLD_LIGHT)?;
            }
        }
    }

    Ok(canvas)
}

/// Biome unlock button: a grass-over-soil block with a small key laid on top.
///
/// Fixed 24px-default coordinates, same size contract as [`key_icon`].
pub fn biome_icon(size: u32) -> Result<Canvas> {
    if size == 0 {
        return Err(Error::InvalidParameters("icon size must be positive".into()));
    }
    let mut canvas = Canvas::new(size, size)?;

    // Terrain block: grass band over soil, darkened along the bottom of each
    // band and down the left edge.
    for x in 4..20 {
        for y in 8..18 {
            let color = if y < 12 {
                if y == 11 || x == 4 {
                    GRASS_DARK
                } else {
                    GRASS
                }
            } else if y == 17 || x == 4 {
                SOIL_DARK
            } else {
                SOIL
            };
            canvas.set_pixel(x, y, color)?;
        }
    }

    // Key head outlined in dark gold.
    for x in 14..19 {
        for y in 5..10 {
            let color = if x == 14 || x == 18 || y == 5 || y == 9 {
                GOLD_DARK
            } else {
                GOLD
            };
            canvas.set_pixel(x, y, color)?;
        }
    }
    // Tooth notch, punched after the head is painted.
    canvas.set_pixel(17, 7, TRANSPARENT)?;

    // Stem down into the terrain, then the bit pointing left.
    for y in 10..15 {
        let color = if y == 14 { GOLD_DARK } else { GOLD };
        canvas.set_pixel(16, y, color)?;
    }
    for x in 12..16 {
        let color = if x == 12 { GOLD_DARK } else { GOLD };
        canvas.set_pixel(x, 14, color)?;
    }

    Ok(canvas)
}
