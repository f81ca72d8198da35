//! Water depth zoning and the shallow-water border.
//!
//! [`zones`] grades every non-land cell into shallow, sea or ocean by its
//! distance from land. [`border`] re-establishes the guarantee that deep
//! water never touches land after the transition passes.

pub mod border;
pub mod zones;

pub use border::enforce_shallow_border;
pub use zones::{apply_water_zones, land_distances};

use tracing::warn;

use crate::pipeline::PipelineError;
use crate::terrain::{Tile, TileGrid};

/// Maximum number of repair sweeps for a `width × height` grid.
///
/// Each changing sweep fixes at least one cell adjacent to land, and that
/// front cannot be longer than the grid perimeter.
pub fn fixpoint_cap(width: usize, height: usize) -> usize {
    2 * (width + height)
}

/// Repeats `sweep` until it reports no change.
///
/// Returns the total number of changed cells, or
/// [`PipelineError::FixpointNotReached`] once [`fixpoint_cap`] sweeps have all
/// changed something. Settling after more than one changing sweep is logged.
pub(crate) fn run_fixpoint<F>(grid: &mut TileGrid, stage: &str, sweep: F) -> Result<usize, PipelineError>
where
    F: FnMut(&mut TileGrid) -> usize,
{
    let (total, changing_sweeps) = settle(grid, stage, sweep)?;
    if changing_sweeps > 1 {
        warn!(stage, changing_sweeps, total, "fixpoint needed repeated sweeps");
    }
    Ok(total)
}

/// Changed cells and the number of sweeps that changed anything.
fn settle<F>(grid: &mut TileGrid, stage: &str, mut sweep: F) -> Result<(usize, usize), PipelineError>
where
    F: FnMut(&mut TileGrid) -> usize,
{
    let cap = fixpoint_cap(grid.width(), grid.height());
    let mut total = 0;

    for changing_sweeps in 0..cap {
        let changed = sweep(grid);
        if changed == 0 {
            return Ok((total, changing_sweeps));
        }
        total += changed;
    }

    Err(PipelineError::FixpointNotReached {
        stage: stage.to_string(),
        iterations: cap,
    })
}

/// One in-place sweep turning deep water next to land into shallow water.
pub(crate) fn shallow_sweep(grid: &mut TileGrid) -> usize {
    let mut changed = 0;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.get(x, y).is_deep_water() && grid.any_neighbor(x, y, |t| t.is_land()) {
                grid.set(x, y, Tile::Shallow);
                changed += 1;
            }
        }
    }
    changed
}
