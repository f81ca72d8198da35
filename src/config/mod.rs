//! Generation configuration.
//!
//! [`GenerationConfig`] carries the map dimensions, the seed and every
//! shaping parameter. It is serde-serializable so front ends can load it from
//! JSON, edit it, and hand it back for regeneration. Named bundles of shaping
//! parameters live in [`presets`].

mod error;
pub mod presets;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;
pub use presets::Preset;

use crate::biomes::{BiomeWeights, Richness};
use crate::landmass::LandMass;
use crate::noise::ValueNoiseConfig;

/// Default map width in cells.
pub const DEFAULT_WIDTH: usize = 64;
/// Default map height in cells.
pub const DEFAULT_HEIGHT: usize = 64;

/// Seed offsets separating the independent noise streams of one run.
pub const TEMPERATURE_SEED_OFFSET: i64 = 1111;
pub const MOISTURE_SEED_OFFSET: i64 = 2222;

/// Octaves used by the temperature and moisture noise fields.
const CLIMATE_OCTAVES: u32 = 3;

/// Largest accepted elevation octave count.
pub const MAX_OCTAVES: u32 = 16;
/// Largest lattice side any noise field of a run may need.
pub const MAX_LATTICE_SIDE: usize = 4096;
/// Frequency multiplier of the finest auxiliary field (archipelago detail:
/// 3 octaves at half scale).
const AUX_FREQUENCY_FACTOR: f64 = 8.0;

/// Full input of a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Seed of every stochastic step. `None` draws a random seed per run.
    pub seed: Option<i32>,
    /// Macro shape of the land.
    pub land_mass: LandMass,
    /// Fraction of the elevation range treated as below sea level (0-1).
    pub ocean_ratio: f32,
    /// Noise feature size in cells (> 0, typically 3-30).
    pub noise_scale: f32,
    /// Elevation noise octaves (≥ 1, typically 1-8).
    pub noise_octaves: u32,
    /// Number of land centers for the multi-center land masses (≥ 1).
    pub island_count: u32,
    /// Global temperature shift (-1 to 1).
    pub temperature_bias: f32,
    /// Global moisture shift (-1 to 1).
    pub moisture_bias: f32,
    /// Relative share of each land biome.
    pub biome_weights: BiomeWeights,
    /// Biome set and sea depth.
    pub richness: Richness,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            land_mass: LandMass::Continents,
            ocean_ratio: 0.4,
            noise_scale: 12.0,
            noise_octaves: 5,
            island_count: 3,
            temperature_bias: 0.0,
            moisture_bias: 0.0,
            biome_weights: BiomeWeights {
                snow: 12.0,
                tundra: 10.0,
                taiga: 10.0,
                grass: 38.0,
                plains: 12.0,
                desert: 18.0,
            },
            richness: Richness::Full,
        }
    }
}

impl GenerationConfig {
    /// Creates the default configuration for a `width × height` map.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Sets a fixed seed.
    pub fn with_seed(mut self, seed: i32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns a copy whose seed is fixed, drawing a random one if absent.
    pub fn with_resolved_seed(&self) -> Self {
        let mut resolved = self.clone();
        resolved.seed = Some(self.seed.unwrap_or_else(rand::random));
        resolved
    }

    /// Checks every field, failing on the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.noise_scale.is_finite() && self.noise_scale > 0.0) {
            return Err(ConfigError::InvalidNoiseScale(self.noise_scale));
        }
        if !(1..=MAX_OCTAVES).contains(&self.noise_octaves) {
            return Err(ConfigError::InvalidOctaves(self.noise_octaves));
        }
        let side = self.finest_lattice_side();
        if side > MAX_LATTICE_SIDE as f64 {
            return Err(ConfigError::NoiseTooFine {
                side,
                max: MAX_LATTICE_SIDE,
            });
        }
        if self.island_count < 1 {
            return Err(ConfigError::InvalidIslandCount(self.island_count));
        }
        if !(0.0..=1.0).contains(&self.ocean_ratio) {
            return Err(ConfigError::OceanRatioOutOfRange(self.ocean_ratio));
        }
        for (name, value) in [
            ("temperature", self.temperature_bias),
            ("moisture", self.moisture_bias),
        ] {
            if !(-1.0..=1.0).contains(&value) {
                return Err(ConfigError::BiasOutOfRange { name, value });
            }
        }
        for (tile, value) in self.biome_weights.iter() {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidBiomeWeight {
                    biome: tile.name(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Side of the largest value-noise lattice a run would draw.
    ///
    /// The top elevation octave samples at `2^(octaves-1) / scale`; the
    /// land-mass detail fields reach at most 8 / scale.
    pub fn finest_lattice_side(&self) -> f64 {
        let top_octave = 2f64.powi(self.noise_octaves.saturating_sub(1) as i32);
        let frequency = top_octave.max(AUX_FREQUENCY_FACTOR) / self.noise_scale as f64;
        (self.width.max(self.height) as f64 * frequency).ceil() + 2.0
    }

    /// Elevation noise recipe for `seed`.
    pub fn elevation_noise(&self, seed: i32) -> ValueNoiseConfig {
        ValueNoiseConfig::new(self.noise_scale, self.noise_octaves, seed as i64)
    }

    /// Temperature noise recipe for `seed`: broader features, fewer octaves.
    pub fn temperature_noise(&self, seed: i32) -> ValueNoiseConfig {
        ValueNoiseConfig::new(
            self.noise_scale * 1.8,
            CLIMATE_OCTAVES,
            seed as i64 + TEMPERATURE_SEED_OFFSET,
        )
    }

    /// Moisture noise recipe for `seed`.
    pub fn moisture_noise(&self, seed: i32) -> ValueNoiseConfig {
        ValueNoiseConfig::new(
            self.noise_scale * 1.4,
            CLIMATE_OCTAVES,
            seed as i64 + MOISTURE_SEED_OFFSET,
        )
    }

    /// Parses a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Serializes the config as pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GenerationConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_dimensions() {
        let cfg = GenerationConfig::new(0, 10);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ZeroDimension { width: 0, height: 10 })
        ));
    }

    #[test]
    fn rejects_non_positive_noise_scale() {
        for scale in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            let cfg = GenerationConfig {
                noise_scale: scale,
                ..Default::default()
            };
            assert!(matches!(cfg.validate(), Err(ConfigError::InvalidNoiseScale(_))));
        }
    }

    #[test]
    fn rejects_zero_octaves_and_islands() {
        let cfg = GenerationConfig {
            noise_octaves: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidOctaves(0))));

        let cfg = GenerationConfig {
            island_count: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidIslandCount(0))));
    }

    #[test]
    fn rejects_out_of_range_ratio_and_bias() {
        let cfg = GenerationConfig {
            ocean_ratio: 1.5,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::OceanRatioOutOfRange(_))));

        let cfg = GenerationConfig {
            moisture_bias: -1.2,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::BiasOutOfRange { name: "moisture", .. })
        ));
    }

    #[test]
    fn rejects_negative_biome_weight() {
        let mut cfg = GenerationConfig::default();
        cfg.biome_weights.plains = -1.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidBiomeWeight { biome: "plains", .. })
        ));
    }

    #[test]
    fn rejects_octaves_above_ceiling() {
        let cfg = GenerationConfig {
            noise_octaves: 64,
            ..GenerationConfig::new(8, 8).with_seed(1)
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidOctaves(64))));

        let cfg = GenerationConfig {
            noise_octaves: MAX_OCTAVES,
            noise_scale: 100.0,
            ..GenerationConfig::new(8, 8)
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_lattice_too_fine_to_allocate() {
        let cfg = GenerationConfig {
            noise_scale: 1e-30,
            ..GenerationConfig::new(8, 8)
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NoiseTooFine { max: MAX_LATTICE_SIDE, .. })
        ));

        let cfg = GenerationConfig {
            noise_octaves: 12,
            noise_scale: 3.0,
            ..GenerationConfig::new(1024, 512)
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::NoiseTooFine { .. })));
    }

    #[test]
    fn default_lattice_is_small() {
        let side = GenerationConfig::default().finest_lattice_side();
        // 64 cells * 16 / 12 -> 86, plus the two guard cells.
        assert_eq!(side, 88.0);
    }

    #[test]
    fn resolved_seed_keeps_explicit_seed() {
        let cfg = GenerationConfig::default().with_seed(-17);
        assert_eq!(cfg.with_resolved_seed().seed, Some(-17));
        assert!(GenerationConfig::default().with_resolved_seed().seed.is_some());
    }

    #[test]
    fn json_round_trip_with_partial_input() {
        let cfg = GenerationConfig::from_json_str(
            r#"{"width": 20, "height": 10, "seed": 5, "land_mass": "archipelago"}"#,
        )
        .unwrap();
        assert_eq!((cfg.width, cfg.height, cfg.seed), (20, 10, Some(5)));
        assert_eq!(cfg.land_mass, LandMass::Archipelago);
        assert_eq!(cfg.noise_octaves, GenerationConfig::default().noise_octaves);

        let json = cfg.to_json_string().unwrap();
        assert_eq!(GenerationConfig::from_json_str(&json).unwrap(), cfg);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            GenerationConfig::from_json_str("{ width: }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn unknown_biome_weight_is_a_parse_error() {
        assert!(matches!(
            GenerationConfig::from_json_str(r#"{"biome_weights": {"deserts": 5}}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn climate_noise_uses_offset_seeds() {
        let cfg = GenerationConfig::default();
        assert_eq!(cfg.temperature_noise(i32::MAX).seed, i32::MAX as i64 + 1111);
        assert_eq!(cfg.moisture_noise(-5).seed, 2217);
        assert_eq!(cfg.elevation_noise(9).octaves, cfg.noise_octaves);
    }
}
