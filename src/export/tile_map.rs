//! RGB preview of a tile grid.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Rgb};

use super::{image_size, ExportError};
use crate::terrain::TileGrid;

/// Options for tile map export.
#[derive(Debug, Clone)]
pub struct TileMapOptions {
    /// Pixels per cell along each axis.
    pub scale: u32,
    pub compression: CompressionType,
    pub filter: FilterType,
}

impl Default for TileMapOptions {
    fn default() -> Self {
        Self {
            scale: 1,
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Export a tile grid as an RGB PNG using each tile's preview color.
pub fn export_tile_map_png(
    grid: &TileGrid,
    path: &Path,
    options: &TileMapOptions,
) -> Result<(), ExportError> {
    let (w, h) = image_size(grid.width(), grid.height(), options.scale)?;
    let scale = options.scale.max(1);

    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(w, h, |px, py| {
        Rgb(grid.get((px / scale) as usize, (py / scale) as usize).preview_rgb())
    });

    let writer = BufWriter::new(File::create(path)?);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(img.as_raw(), w, h, image::ExtendedColorType::Rgb8)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::Tile;
    use tempfile::tempdir;

    #[test]
    fn export_tile_map_smoke() {
        let mut grid = TileGrid::new(6, 4, Tile::Ocean);
        grid.set(2, 2, Tile::Grass);

        let dir = tempdir().unwrap();
        let path = dir.path().join("map.png");
        export_tile_map_png(&grid, &path, &TileMapOptions::default()).unwrap();
        assert_eq!(image::image_dimensions(&path).unwrap(), (6, 4));
    }

    #[test]
    fn scale_multiplies_dimensions() {
        let grid = TileGrid::new(5, 3, Tile::Desert);
        let dir = tempdir().unwrap();
        let path = dir.path().join("map.png");
        let options = TileMapOptions {
            scale: 4,
            ..Default::default()
        };
        export_tile_map_png(&grid, &path, &options).unwrap();
        assert_eq!(image::image_dimensions(&path).unwrap(), (20, 12));

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.get_pixel(19, 11).0, Tile::Desert.preview_rgb());
    }
}
