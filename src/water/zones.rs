//! Distance-graded water zones.

use std::collections::VecDeque;

use tracing::debug;

use super::{run_fixpoint, shallow_sweep};
use crate::biomes::Richness;
use crate::pipeline::PipelineError;
use crate::terrain::{Tile, TileGrid};

/// Distance marker for cells no land can reach.
pub const UNREACHABLE: u32 = u32::MAX;

/// 8-directional step distance from every cell to the nearest land cell.
///
/// Land cells have distance 0. On a grid without land every entry is
/// [`UNREACHABLE`].
pub fn land_distances(grid: &TileGrid) -> Vec<u32> {
    let (width, height) = (grid.width(), grid.height());
    let mut dist = vec![UNREACHABLE; grid.len()];
    let mut q: VecDeque<(usize, usize)> = VecDeque::new();

    for y in 0..height {
        for x in 0..width {
            if grid.get(x, y).is_land() {
                dist[y * width + x] = 0;
                q.push_back((x, y));
            }
        }
    }

    while let Some((x, y)) = q.pop_front() {
        let next = dist[y * width + x] + 1;
        for (nx, ny) in grid.neighbors(x, y) {
            let ni = ny * width + nx;
            if dist[ni] == UNREACHABLE {
                dist[ni] = next;
                q.push_back((nx, ny));
            }
        }
    }

    dist
}

/// Water tile for a cell `distance` steps from land.
pub fn zone_for_distance(distance: u32, richness: Richness) -> Tile {
    if distance <= 1 {
        Tile::Shallow
    } else if distance <= richness.sea_depth() {
        Tile::Sea
    } else {
        Tile::Ocean
    }
}

/// Replaces every non-land cell with shallow, sea or ocean by land distance.
///
/// Land cells are left untouched. A final repair pass guarantees that no
/// deep water touches land.
pub fn apply_water_zones(grid: &mut TileGrid, richness: Richness) -> Result<(), PipelineError> {
    let dist = land_distances(grid);
    for (tile, &d) in grid.tiles_mut().iter_mut().zip(&dist) {
        if !tile.is_land() {
            *tile = zone_for_distance(d, richness);
        }
    }

    let repaired = run_fixpoint(grid, "water zones", shallow_sweep)?;
    debug!(
        shallow = grid.count(Tile::Shallow),
        sea = grid.count(Tile::Sea),
        ocean = grid.count(Tile::Ocean),
        repaired,
        "water zones assigned"
    );
    Ok(())
}
