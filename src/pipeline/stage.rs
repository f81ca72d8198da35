//! Generation stage trait and pipeline orchestration.

use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use crate::biomes::classify;
use crate::climate::{derive_moisture, derive_temperature, ClimateConfig};
use crate::config::{ConfigError, GenerationConfig};
use crate::landmass::apply_land_mass;
use crate::noise::value_noise;
use crate::terrain::{ScalarField, TileGrid, World};
use crate::transitions::{apply_transitions, TRANSITION_PASSES};
use crate::water::{apply_water_zones, enforce_shallow_border};

/// Unique identifier for generation stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageId {
    /// Raw elevation, temperature and moisture noise.
    Noise,
    /// Land-mass shaping of the elevation field.
    LandShape,
    /// Temperature and moisture derivation.
    Climate,
    /// Initial biome classification.
    Biomes,
    /// Shallow/sea/ocean grading.
    WaterZones,
    /// Biome transition smoothing.
    Transitions,
    /// Final shallow-water border.
    Border,
}

impl StageId {
    /// Returns the name of the stage.
    pub fn name(&self) -> &'static str {
        match self {
            StageId::Noise => "noise",
            StageId::LandShape => "land_shape",
            StageId::Climate => "climate",
            StageId::Biomes => "biomes",
            StageId::WaterZones => "water_zones",
            StageId::Transitions => "transitions",
            StageId::Border => "border",
        }
    }
}

/// Errors that can occur during pipeline execution.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("Stage '{0}' failed: {1}")]
    StageFailed(String, String),
    #[error("Missing dependency: stage '{0}' requires '{1}'")]
    MissingDependency(String, String),
    #[error("Stage '{stage}' did not settle within {iterations} sweeps")]
    FixpointNotReached { stage: String, iterations: usize },
}

/// Trait for implementing generation stages.
///
/// Each stage reads the fields earlier stages left in the [`World`] and
/// writes its own output back.
pub trait GenerationStage: Send + Sync {
    /// Returns the unique identifier for this stage.
    fn id(&self) -> StageId;

    /// Returns a human-readable name for the stage.
    fn name(&self) -> &str;

    /// Returns the stage IDs that must be executed before this stage.
    fn dependencies(&self) -> &[StageId] {
        &[]
    }

    /// Executes the generation stage, modifying the world in place.
    fn execute(&self, world: &mut World, config: &GenerationConfig) -> Result<(), PipelineError>;
}

/// Orchestrates multiple generation stages into a complete pipeline.
pub struct Pipeline {
    stages: Vec<Box<dyn GenerationStage>>,
    config: GenerationConfig,
}

impl Pipeline {
    /// Creates a new empty pipeline with the given configuration.
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            stages: Vec::new(),
            config,
        }
    }

    /// The full generation sequence, noise to border.
    pub fn standard(config: GenerationConfig) -> Self {
        let mut pipeline = Self::new(config);
        pipeline
            .add_stage(NoiseStage)
            .add_stage(LandShapeStage)
            .add_stage(ClimateStage::new(ClimateConfig::default()))
            .add_stage(BiomeStage)
            .add_stage(WaterZoneStage)
            .add_stage(TransitionStage::new(TRANSITION_PASSES))
            .add_stage(BorderStage);
        pipeline
    }

    /// Adds a stage to the pipeline.
    pub fn add_stage<S: GenerationStage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Returns the number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Executes all stages in order on the given world.
    pub fn run(&self, world: &mut World) -> Result<(), PipelineError> {
        self.run_with_callbacks(world, |_, _, _| {}, |_, _, _| {})
    }

    /// Executes all stages with progress callbacks.
    ///
    /// The configuration is validated before the first stage starts.
    ///
    /// # Arguments
    /// * `world` - The world to generate into
    /// * `on_stage_start` - Called when each stage begins
    /// * `on_stage_complete` - Called when each stage finishes
    pub fn run_with_callbacks<F1, F2>(
        &self,
        world: &mut World,
        mut on_stage_start: F1,
        mut on_stage_complete: F2,
    ) -> Result<(), PipelineError>
    where
        F1: FnMut(&str, usize, usize),
        F2: FnMut(&str, usize, usize),
    {
        self.config.validate()?;

        let total = self.stages.len();
        let mut completed: Vec<StageId> = Vec::new();

        for (i, stage) in self.stages.iter().enumerate() {
            on_stage_start(stage.name(), i, total);

            for dep in stage.dependencies() {
                if !completed.contains(dep) {
                    return Err(PipelineError::MissingDependency(
                        stage.name().to_string(),
                        dep.name().to_string(),
                    ));
                }
            }

            let started = Instant::now();
            stage.execute(world, &self.config)?;
            debug!(
                stage = stage.id().name(),
                elapsed_us = started.elapsed().as_micros() as u64,
                "stage complete"
            );
            completed.push(stage.id());

            on_stage_complete(stage.name(), i, total);
        }

        Ok(())
    }
}

fn missing(stage: &dyn GenerationStage, what: &str) -> PipelineError {
    PipelineError::StageFailed(
        stage.name().to_string(),
        format!("{what} missing from world"),
    )
}

fn take_field(
    field: &mut Option<ScalarField>,
    stage: &dyn GenerationStage,
    what: &str,
) -> Result<ScalarField, PipelineError> {
    field.take().ok_or_else(|| missing(stage, what))
}

fn tiles_mut<'w>(
    world: &'w mut World,
    stage: &dyn GenerationStage,
) -> Result<&'w mut TileGrid, PipelineError> {
    world.tiles.as_mut().ok_or_else(|| missing(stage, "tile grid"))
}

/// Synthesizes the three raw noise fields.
pub struct NoiseStage;

impl GenerationStage for NoiseStage {
    fn id(&self) -> StageId {
        StageId::Noise
    }

    fn name(&self) -> &str {
        "Noise Synthesis"
    }

    fn execute(&self, world: &mut World, config: &GenerationConfig) -> Result<(), PipelineError> {
        let (w, h, seed) = (world.width, world.height, world.seed);
        world.elevation = Some(value_noise(w, h, &config.elevation_noise(seed)));
        world.temperature = Some(value_noise(w, h, &config.temperature_noise(seed)));
        world.moisture = Some(value_noise(w, h, &config.moisture_noise(seed)));
        Ok(())
    }
}

/// Applies the configured land mass to the elevation field.
pub struct LandShapeStage;

impl GenerationStage for LandShapeStage {
    fn id(&self) -> StageId {
        StageId::LandShape
    }

    fn name(&self) -> &str {
        "Land Shaping"
    }

    fn dependencies(&self) -> &[StageId] {
        &[StageId::Noise]
    }

    fn execute(&self, world: &mut World, config: &GenerationConfig) -> Result<(), PipelineError> {
        let elevation = take_field(&mut world.elevation, self, "elevation")?;
        world.elevation = Some(apply_land_mass(elevation, config, world.seed));
        Ok(())
    }
}

/// Turns raw climate noise into temperature and moisture.
pub struct ClimateStage {
    pub config: ClimateConfig,
}

impl ClimateStage {
    pub fn new(config: ClimateConfig) -> Self {
        Self { config }
    }
}

impl GenerationStage for ClimateStage {
    fn id(&self) -> StageId {
        StageId::Climate
    }

    fn name(&self) -> &str {
        "Climate Derivation"
    }

    fn dependencies(&self) -> &[StageId] {
        &[StageId::Noise]
    }

    fn execute(&self, world: &mut World, config: &GenerationConfig) -> Result<(), PipelineError> {
        let temperature = take_field(&mut world.temperature, self, "temperature noise")?;
        let moisture = take_field(&mut world.moisture, self, "moisture noise")?;
        world.temperature = Some(derive_temperature(
            temperature,
            config.temperature_bias,
            &self.config,
        ));
        world.moisture = Some(derive_moisture(moisture, config.moisture_bias, &self.config));
        Ok(())
    }
}

/// Classifies cells into the initial tile grid.
pub struct BiomeStage;

impl GenerationStage for BiomeStage {
    fn id(&self) -> StageId {
        StageId::Biomes
    }

    fn name(&self) -> &str {
        "Biome Classification"
    }

    fn dependencies(&self) -> &[StageId] {
        &[StageId::LandShape, StageId::Climate]
    }

    fn execute(&self, world: &mut World, config: &GenerationConfig) -> Result<(), PipelineError> {
        let (Some(elevation), Some(temperature), Some(moisture)) =
            (&world.elevation, &world.temperature, &world.moisture)
        else {
            return Err(missing(self, "elevation or climate field"));
        };
        let grid = classify(elevation, temperature, moisture, config);
        debug!(
            land = grid.tiles().iter().filter(|t| t.is_land()).count(),
            cells = grid.len(),
            "biomes classified"
        );
        world.tiles = Some(grid);
        Ok(())
    }
}

/// Grades water by distance from land.
pub struct WaterZoneStage;

impl GenerationStage for WaterZoneStage {
    fn id(&self) -> StageId {
        StageId::WaterZones
    }

    fn name(&self) -> &str {
        "Water Zoning"
    }

    fn dependencies(&self) -> &[StageId] {
        &[StageId::Biomes]
    }

    fn execute(&self, world: &mut World, config: &GenerationConfig) -> Result<(), PipelineError> {
        apply_water_zones(tiles_mut(world, self)?, config.richness)
    }
}

/// Runs a fixed number of transition passes.
pub struct TransitionStage {
    pub passes: usize,
}

impl TransitionStage {
    pub fn new(passes: usize) -> Self {
        Self { passes }
    }
}

impl GenerationStage for TransitionStage {
    fn id(&self) -> StageId {
        StageId::Transitions
    }

    fn name(&self) -> &str {
        "Transition Smoothing"
    }

    fn dependencies(&self) -> &[StageId] {
        &[StageId::WaterZones]
    }

    fn execute(&self, world: &mut World, config: &GenerationConfig) -> Result<(), PipelineError> {
        let grid = tiles_mut(world, self)?;
        for pass in 0..self.passes {
            let changed = apply_transitions(grid, config.richness);
            debug!(pass, changed, "transition pass");
        }
        Ok(())
    }
}

/// Restores the shallow border after smoothing.
pub struct BorderStage;

impl GenerationStage for BorderStage {
    fn id(&self) -> StageId {
        StageId::Border
    }

    fn name(&self) -> &str {
        "Border Enforcement"
    }

    fn dependencies(&self) -> &[StageId] {
        &[StageId::Transitions]
    }

    fn execute(&self, world: &mut World, _config: &GenerationConfig) -> Result<(), PipelineError> {
        enforce_shallow_border(tiles_mut(world, self)?)?;
        Ok(())
    }
}
