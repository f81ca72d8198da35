//! Moisture from noise and bias.

use super::ClimateConfig;
use crate::terrain::ScalarField;

/// `m = noise + bias·0.3`, clamped to [0, 1].
pub fn derive_moisture(mut noise: ScalarField, bias: f32, cfg: &ClimateConfig) -> ScalarField {
    let shift = bias * cfg.bias_weight;
    for m in noise.values_mut() {
        *m = (*m + shift).clamp(0.0, 1.0);
    }
    noise
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bias_is_identity() {
        let raw = ScalarField::from_values(3, 1, vec![0.0, 0.4, 1.0]);
        let m = derive_moisture(raw.clone(), 0.0, &ClimateConfig::default());
        assert_eq!(m, raw);
    }

    #[test]
    fn bias_is_scaled_and_clamped() {
        let raw = ScalarField::from_values(3, 1, vec![0.0, 0.5, 0.9]);
        let m = derive_moisture(raw, 0.5, &ClimateConfig::default());
        assert!((m.values()[0] - 0.15).abs() < 1e-6);
        assert!((m.values()[1] - 0.65).abs() < 1e-6);
        assert_eq!(m.values()[2], 1.0);
    }
}
