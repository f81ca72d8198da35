//! Pipeline module for orchestrating map generation stages.
//!
//! Provides a trait-based architecture for modular generation stages
//! that can be composed into a complete generation pipeline, plus the
//! one-call [`generate`] entry point.

mod stage;

pub use stage::{
    BiomeStage, BorderStage, ClimateStage, GenerationStage, LandShapeStage, NoiseStage, Pipeline,
    PipelineError, StageId, TransitionStage, WaterZoneStage,
};

use serde::Serialize;
use tracing::info;

use crate::config::GenerationConfig;
use crate::stats::TileStats;
use crate::terrain::{ScalarField, TileGrid, World};

/// Result of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedMap {
    /// The config that produced the map, with its seed resolved.
    pub config: GenerationConfig,
    pub grid: TileGrid,
    /// Shaped elevation, kept for previews.
    #[serde(skip)]
    pub elevation: Option<ScalarField>,
}

impl GeneratedMap {
    pub fn seed(&self) -> i32 {
        self.config.seed.unwrap_or_default()
    }

    pub fn stats(&self) -> TileStats {
        TileStats::from_grid(&self.grid)
    }
}

/// Validates `config`, resolves its seed and runs the standard pipeline.
///
/// Equal configs with equal seeds produce identical grids.
pub fn generate(config: &GenerationConfig) -> Result<GeneratedMap, PipelineError> {
    config.validate()?;
    let resolved = config.with_resolved_seed();
    let seed = resolved.seed.unwrap_or_default();
    info!(
        seed,
        width = resolved.width,
        height = resolved.height,
        land_mass = %resolved.land_mass,
        "generating map"
    );

    let mut world = World::new(resolved.width, resolved.height, seed);
    Pipeline::standard(resolved.clone()).run(&mut world)?;

    let grid = world.tiles.take().ok_or_else(|| {
        PipelineError::StageFailed("pipeline".to_string(), "no tile grid produced".to_string())
    })?;
    Ok(GeneratedMap {
        config: resolved,
        grid,
        elevation: world.elevation.take(),
    })
}
