//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building, loading or validating a [`GenerationConfig`].
///
/// [`GenerationConfig`]: super::GenerationConfig
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("map dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("noise scale must be a finite value > 0, got {0}")]
    InvalidNoiseScale(f32),
    #[error("noise octaves must be within 1..=16, got {0}")]
    InvalidOctaves(u32),
    #[error("noise is too fine for the map: lattice side {side} exceeds {max}; raise the noise scale or lower the octaves")]
    NoiseTooFine { side: f64, max: usize },
    #[error("island count must be at least 1, got {0}")]
    InvalidIslandCount(u32),
    #[error("ocean ratio must be within [0, 1], got {0}")]
    OceanRatioOutOfRange(f32),
    #[error("{name} bias must be within [-1, 1], got {value}")]
    BiasOutOfRange { name: &'static str, value: f32 },
    #[error("biome weight for '{biome}' must be finite and non-negative, got {value}")]
    InvalidBiomeWeight { biome: &'static str, value: f32 },
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
    #[error("unknown land mass '{0}'")]
    UnknownLandMass(String),
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
