//! World background tiles and the desert unlock artwork.

use image::Rgba;

use crate::canvas::{opaque, Canvas};
use crate::error::Result;

/// One tileable biome look: solid ground with a sparse accent speckle.
#[derive(Clone, Copy, Debug)]
pub struct BiomeTheme {
    pub name: &'static str,
    pub base: Rgba<u8>,
    pub accent: Rgba<u8>,
}

pub const PLAINS: BiomeTheme = BiomeTheme {
    name: "plains",
    base: opaque(100, 150, 100),
    accent: opaque(80, 120, 80),
};

pub const DESERT: BiomeTheme = BiomeTheme {
    name: "desert",
    base: opaque(210, 180, 140),
    accent: opaque(230, 210, 170),
};

const CACTUS: Rgba<u8> = opaque(50, 120, 50);

const TILE_SIZE: u32 = 64;
const PATCH_COUNT: i32 = 10;
const STRIDE_X: i32 = 6;
const STRIDE_Y: i32 = 7;
/// Inclusive extent of one accent patch, so each is 5x5 pixels.
const PATCH_EXTENT: i32 = 4;
/// Vertical wrap bound; stops short of the tile height so the last patches
/// stay clear of the bottom edge.
const WRAP_Y: i32 = 60;

/// 64x64 background tile. Patch `i` sits at `(i * 6, (i * 7) % 60)`, pure
/// arithmetic with no randomness, so every run reproduces the same bytes.
pub fn tile(theme: BiomeTheme) -> Result<Canvas> {
    let mut canvas = Canvas::with_background(TILE_SIZE, TILE_SIZE, theme.base)?;
    for i in 0..PATCH_COUNT {
        let x = i * STRIDE_X;
        let y = (i * STRIDE_Y) % WRAP_Y;
        canvas.fill_rect(x, y, x + PATCH_EXTENT, y + PATCH_EXTENT, theme.accent);
    }
    Ok(canvas)
}

/// 32x32 desert selection icon: sandy field with a blocky cactus cross.
pub fn desert_icon() -> Result<Canvas> {
    let mut canvas = Canvas::with_background(32, 32, DESERT.base)?;
    canvas.fill_rect(13, 8, 17, 24, CACTUS);
    canvas.fill_rect(8, 12, 22, 16, CACTUS);
    Ok(canvas)
}
