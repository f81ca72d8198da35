//! Biome classification.
//!
//! Consumes the shaped elevation field plus derived temperature and moisture
//! and produces the initial [`TileGrid`]:
//! - cells below the ocean ratio stay `Ocean` (resolved later by water zoning)
//! - land cells take the biome whose temperature band contains them, with
//!   bands sized by the configured [`BiomeWeights`]
//! - near the cold edge of an arid band, moisture decides between the two
//!   neighboring biomes

mod config;

pub use config::{BiomeWeights, Richness};

use rayon::prelude::*;

use crate::config::GenerationConfig;
use crate::terrain::{ScalarField, Tile, TileGrid};

/// Half-width of the temperature window around a moisture-sensitive boundary.
const BOUNDARY_MARGIN: f32 = 0.04;
/// Moisture above which a boundary cell takes the cooler biome.
const WET_THRESHOLD: f32 = 0.45;

/// Cumulative temperature bands, coldest first. Empty bands are dropped.
#[derive(Debug, Clone)]
pub struct BandTable {
    bands: Vec<(Tile, f32)>,
}

impl BandTable {
    /// Builds the bands from `weights`. Returns an empty table if the total is 0.
    pub fn new(weights: &BiomeWeights) -> Self {
        let total = weights.total();
        if total <= 0.0 {
            return Self { bands: Vec::new() };
        }

        let mut acc = 0.0;
        let mut bands: Vec<(Tile, f32)> = weights
            .iter()
            .filter(|&(_, w)| w > 0.0)
            .map(|(tile, w)| {
                acc += w;
                (tile, acc / total)
            })
            .collect();
        if let Some(last) = bands.last_mut() {
            last.1 = 1.0;
        }
        Self { bands }
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// `(tile, upper bound)` pairs in order.
    pub fn bands(&self) -> &[(Tile, f32)] {
        &self.bands
    }

    /// Biome for a land cell, or `None` when no band exists.
    pub fn classify(&self, temperature: f32, moisture: f32) -> Option<Tile> {
        let last = self.bands.len().checked_sub(1)?;
        let i = self
            .bands
            .iter()
            .position(|&(_, upper)| temperature < upper)
            .unwrap_or(last);

        let (tile, upper) = self.bands[i];
        let lower = if i == 0 { 0.0 } else { self.bands[i - 1].1 };
        let wet = moisture > WET_THRESHOLD;

        // Just below the boundary to a warmer arid band.
        if i < last && upper - temperature <= BOUNDARY_MARGIN {
            let warmer = self.bands[i + 1].0;
            if warmer.is_arid() {
                return Some(if wet { tile } else { warmer });
            }
        }
        // Just above the boundary from a cooler band into this arid one.
        if i > 0 && tile.is_arid() && temperature - lower < BOUNDARY_MARGIN {
            let cooler = self.bands[i - 1].0;
            return Some(if wet { cooler } else { tile });
        }
        Some(tile)
    }
}

/// Returns true if a cell with `elevation` lies above the sea.
///
/// An ocean ratio of 1 marks the whole map as water.
#[inline]
pub fn is_above_sea(elevation: f32, ocean_ratio: f32) -> bool {
    ocean_ratio < 1.0 && elevation >= ocean_ratio
}

/// Classifies every cell into its initial tile.
///
/// # Panics
/// Panics if the three fields do not share the same dimensions.
pub fn classify(
    elevation: &ScalarField,
    temperature: &ScalarField,
    moisture: &ScalarField,
    config: &GenerationConfig,
) -> TileGrid {
    let (width, height) = (elevation.width(), elevation.height());
    assert_eq!((temperature.width(), temperature.height()), (width, height));
    assert_eq!((moisture.width(), moisture.height()), (width, height));

    let table = BandTable::new(&config.biome_weights.effective(config.richness));
    let mut grid = TileGrid::new(width, height, Tile::Ocean);
    if table.is_empty() || width == 0 {
        return grid;
    }

    grid.tiles_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, tile) in row.iter_mut().enumerate() {
                if !is_above_sea(elevation.get(x, y), config.ocean_ratio) {
                    continue;
                }
                if let Some(biome) = table.classify(temperature.get(x, y), moisture.get(x, y)) {
                    *tile = biome;
                }
            }
        });

    grid
}
