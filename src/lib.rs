//! Deterministic biome tile map generator.
//!
//! This crate turns a seed and a small set of shaping parameters into a
//! rectangular grid of terrain tiles (ocean, sea, shallow water and six land
//! biomes) using layered value noise, land-mass shaping, a simple climate
//! model and rule-based smoothing.

pub mod biomes;
pub mod climate;
pub mod config;
pub mod export;
pub mod landmass;
pub mod noise;
pub mod pipeline;
pub mod stats;
pub mod terrain;
pub mod transitions;
pub mod water;

pub use biomes::{BiomeWeights, Richness};
pub use config::{ConfigError, GenerationConfig, Preset};
pub use landmass::LandMass;
pub use noise::{value_noise, LcgRng, ValueNoiseConfig};
pub use pipeline::{generate, GeneratedMap, GenerationStage, Pipeline, PipelineError, StageId};
pub use stats::TileStats;
pub use terrain::{ScalarField, Tile, TileGrid, World};
