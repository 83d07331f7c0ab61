mod primitives;

use image::Rgba;

use crate::error::{Error, Result};

/// Fully transparent black, used for empty canvases and cutouts.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Opaque color shorthand for palette tables.
pub const fn opaque(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// In-memory RGBA raster a sprite is drawn onto.
///
/// Pixels are stored row-major, four bytes per pixel. Later draws overwrite
/// earlier ones channel-for-channel; there is no alpha blending, which is what
/// lets a transparent draw punch a hole through finished artwork.
#[derive(Clone)]
pub struct Canvas {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_background(width, height, TRANSPARENT)
    }

    /// Create a canvas with every pixel set to `background`.
    pub fn with_background(width: u32, height: u32, background: Rgba<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = background.0.repeat(width as usize * height as usize);
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Write one pixel directly without bounds checking the caller's intent:
    /// coordinates outside the canvas are silently dropped. Drawing routines
    /// that clamp (rects, strokes) funnel through here.
    fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if self.in_bounds(x, y) {
            let i = self.index(x as u32, y as u32);
            self.data[i..i + 4].copy_from_slice(&color.0);
        }
    }

    /// Set one pixel. Out-of-bounds coordinates are an error and leave the
    /// canvas untouched.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>) -> Result<()> {
        if !self.in_bounds(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.index(x as u32, y as u32);
        self.data[i..i + 4].copy_from_slice(&color.0);
        Ok(())
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba<u8>> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let i = self.index(x as u32, y as u32);
        Some(Rgba([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    /// Set each listed pixel in order. Fails on the first out-of-range point;
    /// points already written stay written.
    pub fn plot_points(&mut self, points: &[(i32, i32)], color: Rgba<u8>) -> Result<()> {
        for &(x, y) in points {
            self.set_pixel(x, y, color)?;
        }
        Ok(())
    }

    /// Fill the inclusive box spanned by the two corners, in either corner
    /// order. The box is clamped to the canvas, so a fill that hangs over an
    /// edge paints the overlap and ignores the rest.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        let xs = left.max(0);
        let xe = right.min(self.width as i32 - 1);
        let ys = top.max(0);
        let ye = bottom.min(self.height as i32 - 1);
        if xs > xe || ys > ye {
            return;
        }
        for y in ys..=ye {
            for x in xs..=xe {
                let i = self.index(x as u32, y as u32);
                self.data[i..i + 4].copy_from_slice(&color.0);
            }
        }
    }
}
