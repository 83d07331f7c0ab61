use image::Rgba;

use super::Canvas;
use crate::error::{Error, Result};

impl Canvas {
    /// Draw a straight stroke between two points.
    ///
    /// `width` fans the stroke out perpendicular to its dominant axis: odd
    /// widths sit symmetrically around the center line, even widths lean one
    /// pixel toward the positive side. Pixels falling outside the canvas are
    /// dropped; a zero width is an error.
    pub fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgba<u8>,
        width: u32,
    ) -> Result<()> {
        if width == 0 {
            return Err(Error::InvalidParameters("line width must be positive".into()));
        }
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        let lo = -((width as i32 - 1) / 2);
        let hi = width as i32 / 2;
        for off in lo..=hi {
            let (ox, oy) = if steep { (off, 0) } else { (0, off) };
            self.stroke(x0 + ox, y0 + oy, x1 + ox, y1 + oy, color);
        }
        Ok(())
    }

    /// Fill a closed polygon using even-odd scanline parity, then stroke its
    /// outline so vertex pixels the scan rounds away still land. The last
    /// vertex connects back to the first implicitly. Spans are clamped to the
    /// canvas; fewer than three vertices is an error.
    pub fn fill_polygon(&mut self, vertices: &[(i32, i32)], color: Rgba<u8>) -> Result<()> {
        if vertices.len() < 3 {
            return Err(Error::InvalidParameters(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }

        let mut y_top = i32::MAX;
        let mut y_bot = i32::MIN;
        for &(_, y) in vertices {
            y_top = y_top.min(y);
            y_bot = y_bot.max(y);
        }
        let y_start = y_top.max(0);
        let y_end = y_bot.min(self.height() as i32 - 1);

        let mut crossings: Vec<i32> = Vec::with_capacity(vertices.len());
        for y in y_start..=y_end {
            crossings.clear();
            for i in 0..vertices.len() {
                let (ax, ay) = vertices[i];
                let (bx, by) = vertices[(i + 1) % vertices.len()];
                if ay == by {
                    continue;
                }
                // walk each edge top-down; the half-open span keeps a vertex
                // shared by two edges from counting twice
                let (top_y, bot_y, top_x, bot_x) =
                    if ay < by { (ay, by, ax, bx) } else { (by, ay, bx, ax) };
                if y < top_y || y >= bot_y {
                    continue;
                }
                let t = (y - top_y) as f64 / (bot_y - top_y) as f64;
                crossings.push((top_x as f64 + t * (bot_x - top_x) as f64).round() as i32);
            }
            crossings.sort_unstable();
            for span in crossings.chunks_exact(2) {
                if let &[a, b] = span {
                    for x in a.max(0)..=b.min(self.width() as i32 - 1) {
                        self.put(x, y, color);
                    }
                }
            }
        }

        for i in 0..vertices.len() {
            let (ax, ay) = vertices[i];
            let (bx, by) = vertices[(i + 1) % vertices.len()];
            self.stroke(ax, ay, bx, by, color);
        }
        Ok(())
    }

    // Bresenham, clamped to the canvas through `put`.
    fn stroke(&mut self, mut x: i32, mut y: i32, x1: i32, y1: i32, color: Rgba<u8>) {
        let dx = (x1 - x).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let dy = -(y1 - y).abs();
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
