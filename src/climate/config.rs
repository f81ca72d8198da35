//! Climate blend coefficients.

use serde::{Deserialize, Serialize};

/// Weights used when turning raw noise into temperature and moisture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateConfig {
    /// Weight of the north–south gradient in temperature.
    pub latitude_weight: f32,
    /// Weight of local noise in temperature.
    pub temperature_noise_weight: f32,
    /// Scale applied to the user biases before they shift a field.
    pub bias_weight: f32,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            latitude_weight: 0.65,
            temperature_noise_weight: 0.35,
            bias_weight: 0.3,
        }
    }
}
