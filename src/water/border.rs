//! Shallow-water border between land and deep water.
//!
//! Transition passes only touch land, but they run after zoning, so the
//! border is checked once more at the end of generation.

use tracing::debug;

use super::{run_fixpoint, shallow_sweep};
use crate::pipeline::PipelineError;
use crate::terrain::{Tile, TileGrid};

/// Land cells push shallow water onto their deep-water neighbors.
fn land_sweep(grid: &mut TileGrid) -> usize {
    let mut changed = 0;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.get(x, y).is_land() {
                continue;
            }
            let deep: Vec<(usize, usize)> = grid
                .neighbors(x, y)
                .filter(|&(nx, ny)| grid.get(nx, ny).is_deep_water())
                .collect();
            for (nx, ny) in deep {
                grid.set(nx, ny, Tile::Shallow);
                changed += 1;
            }
        }
    }
    changed
}

/// Demotes any sea cell still touching land.
fn sea_sweep(grid: &mut TileGrid) -> usize {
    let mut changed = 0;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.get(x, y) == Tile::Sea && grid.any_neighbor(x, y, Tile::is_land) {
                grid.set(x, y, Tile::Shallow);
                changed += 1;
            }
        }
    }
    changed
}

/// Makes every water cell 8-adjacent to land shallow.
///
/// Returns the number of cells changed. Applying it to its own output
/// changes nothing.
pub fn enforce_shallow_border(grid: &mut TileGrid) -> Result<usize, PipelineError> {
    let swept = run_fixpoint(grid, "border", |g| shallow_sweep(g) + land_sweep(g))?;
    let demoted = sea_sweep(grid);
    debug!(swept, demoted, "shallow border enforced");
    Ok(swept + demoted)
}
