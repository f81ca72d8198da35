//! Temperature from latitude, noise and bias.

use rayon::prelude::*;

use super::ClimateConfig;
use crate::terrain::ScalarField;

/// Turns raw temperature noise into a bounded temperature field.
///
/// `t = (row / height)·0.65 + noise·0.35 + bias·0.3`, clamped to [0, 1].
/// Row 0 is the cold edge of the map.
pub fn derive_temperature(mut noise: ScalarField, bias: f32, cfg: &ClimateConfig) -> ScalarField {
    let width = noise.width();
    let height = noise.height() as f32;
    let shift = bias * cfg.bias_weight;

    noise
        .values_mut()
        .par_chunks_mut(width.max(1))
        .enumerate()
        .for_each(|(y, row)| {
            let latitude = y as f32 / height;
            for t in row {
                *t = (latitude * cfg.latitude_weight + *t * cfg.temperature_noise_weight + shift)
                    .clamp(0.0, 1.0);
            }
        });
    noise
}
