use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure kinds for canvas construction, drawing, and asset output.
#[derive(Debug, Error)]
pub enum Error {
    /// Canvas dimensions must both be positive.
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A pixel address fell outside the canvas extent.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// A drawing call or generator was handed unusable parameters.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
