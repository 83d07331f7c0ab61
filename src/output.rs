//! Asset writer. The only place pixels touch the filesystem.

use std::fs;
use std::path::Path;

use crate::canvas::Canvas;
use crate::error::Result;

/// Write `canvas` to `path`, creating missing parent directories and replacing
/// any existing file. The encoding follows the file extension; catalog assets
/// all use `.png`, which keeps the bytes lossless.
pub fn save(canvas: &Canvas, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    image::save_buffer(
        path,
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{opaque, TRANSPARENT};
    use std::env;
    use std::path::PathBuf;

    fn temp_file(name: &str) -> PathBuf {
        env::temp_dir().join(format!("spritegen-output-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let mut canvas = Canvas::new(6, 4).unwrap();
        canvas.fill_rect(1, 1, 3, 2, opaque(200, 40, 10));
        let path = temp_file("roundtrip.png");

        save(&canvas, &path).unwrap();
        let loaded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(loaded.width(), 6);
        assert_eq!(loaded.height(), 4);
        assert_eq!(loaded.get_pixel(2, 1), &opaque(200, 40, 10));
        assert_eq!(loaded.get_pixel(0, 0), &TRANSPARENT);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let canvas = Canvas::new(2, 2).unwrap();
        let dir = temp_file("nested-dir");
        let path = dir.join("deep").join("sprite.png");

        save(&canvas, &path).unwrap();
        assert!(path.is_file());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let path = temp_file("overwrite.png");
        let first = Canvas::with_background(3, 3, opaque(255, 0, 0)).unwrap();
        save(&first, &path).unwrap();

        let second = Canvas::with_background(3, 3, opaque(0, 255, 0)).unwrap();
        save(&second, &path).unwrap();

        let loaded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(loaded.get_pixel(1, 1), &opaque(0, 255, 0));

        let _ = fs::remove_file(&path);
    }
}
