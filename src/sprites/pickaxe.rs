//! Tool sprites: the three shop pickaxe tiers and the shop button icon.

use image::Rgba;

use crate::canvas::{opaque, Canvas};
use crate::error::{Error, Result};

/// Handle wood shared by every tier.
const HANDLE: Rgba<u8> = opaque(139, 69, 19);
const HANDLE_DARK: Rgba<u8> = opaque(101, 67, 33);

const METAL: Rgba<u8> = opaque(192, 192, 192);
const METAL_DARK: Rgba<u8> = opaque(105, 105, 105);
const METAL_SHINE: Rgba<u8> = opaque(220, 220, 220);

/// One purchasable tier: same shape program, different head metal.
#[derive(Clone, Copy, Debug)]
pub struct ToolTier {
    pub name: &'static str,
    pub head: Rgba<u8>,
}

pub const WOODEN: ToolTier = ToolTier {
    name: "wooden",
    head: opaque(169, 169, 169),
};

pub const STONE: ToolTier = ToolTier {
    name: "stone",
    head: opaque(105, 105, 105),
};

pub const IRON: ToolTier = ToolTier {
    name: "iron",
    head: opaque(176, 196, 222),
};

pub const TIERS: [ToolTier; 3] = [WOODEN, STONE, IRON];

/// 32x32 inventory sprite: vertical handle with two head blocks in the tier
/// metal, everything else transparent.
pub fn sprite(tier: ToolTier) -> Result<Canvas> {
    let mut canvas = Canvas::new(32, 32)?;
    canvas.fill_rect(12, 16, 19, 25, HANDLE);
    canvas.fill_rect(5, 5, 14, 12, tier.head);
    canvas.fill_rect(20, 5, 29, 12, tier.head);
    Ok(canvas)
}

/// Shop button pickaxe: a diagonal handle under an L-shaped silver head.
///
/// The drawing program uses fixed coordinates sized for the 24px default;
/// `size` only grows the canvas, so anything smaller fails with `OutOfBounds`
/// once the program walks off the edge.
pub fn shop_icon(size: u32) -> Result<Canvas> {
    if size == 0 {
        return Err(Error::InvalidParameters("icon size must be positive".into()));
    }
    let mut canvas = Canvas::new(size, size)?;

    // Diagonal handle, two pixels thick, darkened along its upper edge.
    for i in 7..19 {
        canvas.set_pixel(i, i, HANDLE)?;
        canvas.set_pixel(i, i + 1, HANDLE)?;
        canvas.set_pixel(i + 1, i, HANDLE)?;
        if i > 7 {
            canvas.set_pixel(i - 1, i, HANDLE_DARK)?;
            canvas.set_pixel(i - 1, i + 1, HANDLE_DARK)?;
        }
    }

    // Top arm of the head: shine along the upper rim, dark at the tips.
    for y in 3..8 {
        for x in 4..15 {
            let color = if y == 3 && x > 6 && x < 12 {
                METAL_SHINE
            } else if y == 7 && (x == 4 || x == 14) {
                METAL_DARK
            } else {
                METAL
            };
            canvas.set_pixel(x, y, color)?;
        }
    }

    // Left arm, mirrored.
    for x in 3..8 {
        for y in 4..15 {
            let color = if x == 3 && y > 6 && y < 12 {
                METAL_SHINE
            } else if x == 7 && (y == 4 || y == 14) {
                METAL_DARK
            } else {
                METAL
            };
            canvas.set_pixel(x, y, color)?;
        }
    }

    // Sparkle where the arms meet.
    canvas.plot_points(&[(6, 6), (7, 5), (5, 7), (6, 5)], METAL_SHINE)?;

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::TRANSPARENT;

    #[test]
    fn test_wooden_sprite_landmark_pixels() {
        let canvas = sprite(WOODEN).unwrap();
        assert_eq!(canvas.width(), 32);
        assert_eq!(canvas.height(), 32);
        // handle interior
        assert_eq!(canvas.get_pixel(15, 20), Some(HANDLE));
        // head blocks
        assert_eq!(canvas.get_pixel(7, 7), Some(WOODEN.head));
        assert_eq!(canvas.get_pixel(25, 7), Some(WOODEN.head));
        // background untouched
        assert_eq!(canvas.get_pixel(0, 0), Some(TRANSPARENT));
        assert_eq!(canvas.get_pixel(31, 31), Some(TRANSPARENT));
    }

    #[test]
    fn test_tiers_differ_only_in_head_metal() {
        for tier in TIERS {
            let canvas = sprite(tier).unwrap();
            assert_eq!(canvas.get_pixel(15, 20), Some(HANDLE), "{}", tier.name);
            assert_eq!(canvas.get_pixel(7, 7), Some(tier.head), "{}", tier.name);
        }
        let wooden = sprite(WOODEN).unwrap();
        let iron = sprite(IRON).unwrap();
        assert_ne!(wooden.get_pixel(7, 7), iron.get_pixel(7, 7));
    }

    #[test]
    fn test_sprite_head_extents() {
        let canvas = sprite(STONE).unwrap();
        assert_eq!(canvas.get_pixel(5, 5), Some(STONE.head));
        assert_eq!(canvas.get_pixel(14, 12), Some(STONE.head));
        assert_eq!(canvas.get_pixel(20, 5), Some(STONE.head));
        assert_eq!(canvas.get_pixel(29, 12), Some(STONE.head));
        // the gap between the two head blocks stays clear above the handle
        assert_eq!(canvas.get_pixel(17, 5), Some(TRANSPARENT));
        assert_eq!(canvas.get_pixel(4, 5), Some(TRANSPARENT));
        assert_eq!(canvas.get_pixel(30, 5), Some(TRANSPARENT));
    }

    #[test]
    fn test_shop_icon_landmarks() {
        let canvas = shop_icon(24).unwrap();
        // handle body and its shaded upper edge
        assert_eq!(canvas.get_pixel(10, 10), Some(HANDLE));
        assert_eq!(canvas.get_pixel(9, 10), Some(HANDLE_DARK));
        // head arms
        assert_eq!(canvas.get_pixel(10, 5), Some(METAL));
        assert_eq!(canvas.get_pixel(8, 3), Some(METAL_SHINE));
        assert_eq!(canvas.get_pixel(4, 3), Some(METAL));
        assert_eq!(canvas.get_pixel(14, 7), Some(METAL_DARK));
        assert_eq!(canvas.get_pixel(3, 8), Some(METAL_SHINE));
        // the left arm repaints the overlap, so its dark tip wins at (7, 4)
        assert_eq!(canvas.get_pixel(7, 4), Some(METAL_DARK));
        // sparkle
        assert_eq!(canvas.get_pixel(6, 5), Some(METAL_SHINE));
        // background
        assert_eq!(canvas.get_pixel(23, 3), Some(TRANSPARENT));
    }

    #[test]
    fn test_shop_icon_rejects_zero_size() {
        assert!(matches!(
            shop_icon(0),
            Err(Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_shop_icon_too_small_for_program() {
        assert!(matches!(
            shop_icon(10),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_shop_icon_is_deterministic() {
        let a = shop_icon(24).unwrap();
        let b = shop_icon(24).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
