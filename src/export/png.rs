//! 16-bit grayscale export of scalar fields.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Luma};

use super::{image_size, ExportError};
use crate::terrain::ScalarField;

/// Options for field export.
#[derive(Debug, Clone)]
pub struct FieldPngOptions {
    /// Pixels per cell along each axis.
    pub scale: u32,
    pub compression: CompressionType,
    pub filter: FilterType,
}

impl Default for FieldPngOptions {
    fn default() -> Self {
        Self {
            scale: 1,
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Exports a [0, 1] field as a 16-bit grayscale PNG. Values are clamped.
pub fn export_field_png(
    field: &ScalarField,
    path: &Path,
    options: &FieldPngOptions,
) -> Result<(), ExportError> {
    let (w, h) = image_size(field.width(), field.height(), options.scale)?;
    let scale = options.scale.max(1);

    let img: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_fn(w, h, |px, py| {
        let v = field.get((px / scale) as usize, (py / scale) as usize);
        Luma([(v.clamp(0.0, 1.0) * 65535.0) as u16])
    });

    let writer = BufWriter::new(File::create(path)?);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    let bytes: &[u8] = bytemuck::cast_slice(img.as_raw());
    encoder.write_image(bytes, w, h, image::ExtendedColorType::L16)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_field_at_grid_size() {
        let field = ScalarField::from_values(4, 3, (0..12).map(|i| i as f32 / 11.0).collect());
        let dir = tempdir().unwrap();
        let path = dir.path().join("elevation.png");
        export_field_png(&field, &path, &FieldPngOptions::default()).unwrap();
        assert_eq!(image::image_dimensions(&path).unwrap(), (4, 3));
    }
}
