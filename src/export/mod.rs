//! Preview export of generated maps.
//!
//! Tile grids are written as RGB PNGs using each tile's preview color;
//! scalar fields as 16-bit grayscale PNGs.

mod png;
mod tile_map;

pub use png::{export_field_png, FieldPngOptions};
pub use tile_map::{export_tile_map_png, TileMapOptions};

use thiserror::Error;

/// Errors that can occur during export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Image too large: {width}x{height}")]
    TooLarge { width: usize, height: usize },
}

/// Pixel dimensions of a `width × height` grid drawn at `scale` pixels per cell.
pub(crate) fn image_size(width: usize, height: usize, scale: u32) -> Result<(u32, u32), ExportError> {
    let too_large = || ExportError::TooLarge { width, height };
    let scale = scale.max(1) as usize;
    let w = u32::try_from(width.checked_mul(scale).ok_or_else(too_large)?).map_err(|_| too_large())?;
    let h = u32::try_from(height.checked_mul(scale).ok_or_else(too_large)?).map_err(|_| too_large())?;
    Ok((w, h))
}
