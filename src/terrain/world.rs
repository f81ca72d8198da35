//! Working state threaded through the generation pipeline.

use super::field::ScalarField;
use super::grid::TileGrid;

/// Everything a single generation call owns while it runs.
///
/// Stages take fields out of the world (`Option::take`), transform them by
/// value and put the result back, so no two stages ever hold the same buffer.
#[derive(Debug, Clone)]
pub struct World {
    pub width: usize,
    pub height: usize,
    /// Resolved seed for this run.
    pub seed: i32,
    /// Elevation (populated by the noise stage, reshaped by the land-shape stage).
    pub elevation: Option<ScalarField>,
    /// Raw temperature noise, replaced by the derived temperature field.
    pub temperature: Option<ScalarField>,
    /// Raw moisture noise, replaced by the derived moisture field.
    pub moisture: Option<ScalarField>,
    /// Tile grid (populated by the biome stage).
    pub tiles: Option<TileGrid>,
}

impl World {
    pub fn new(width: usize, height: usize, seed: i32) -> Self {
        Self {
            width,
            height,
            seed,
            elevation: None,
            temperature: None,
            moisture: None,
            tiles: None,
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Returns true once the biome stage has produced a grid.
    pub fn has_tiles(&self) -> bool {
        self.tiles.is_some()
    }
}
