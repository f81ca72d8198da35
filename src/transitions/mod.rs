//! Biome transition smoothing.
//!
//! Softens hard contacts between incompatible biomes (grass against desert,
//! snow against grass, ...) by rewriting the cell into an intermediate biome.
//! Every pass reads neighbors from a frozen snapshot so the outcome does not
//! depend on scan order.

mod rules;

pub use rules::{rules_for, TransitionRule, BASIC_RULES, FULL_RULES};

use crate::biomes::Richness;
use crate::terrain::{Tile, TileGrid};

/// Number of passes the pipeline runs.
pub const TRANSITION_PASSES: usize = 3;

/// Target tile for a land cell, or `None` if no rule matches.
///
/// When several rules match, the one listed last wins.
fn rewrite(rules: &[TransitionRule], snapshot: &TileGrid, x: usize, y: usize) -> Option<Tile> {
    let from = snapshot.get(x, y);
    rules
        .iter()
        .rev()
        .filter(|rule| rule.from == from)
        .find(|rule| snapshot.any_neighbor(x, y, |n| rule.touches.contains(&n)))
        .map(|rule| rule.to)
}

/// Runs one smoothing pass and returns the number of rewritten cells.
///
/// Only land cells are rewritten; water is never read as a source biome.
pub fn apply_transitions(grid: &mut TileGrid, richness: Richness) -> usize {
    let rules = rules_for(richness);
    let snapshot = grid.clone();
    let mut changed = 0;

    for y in 0..snapshot.height() {
        for x in 0..snapshot.width() {
            if !snapshot.get(x, y).is_land() {
                continue;
            }
            if let Some(to) = rewrite(rules, &snapshot, x, y) {
                if to != snapshot.get(x, y) {
                    grid.set(x, y, to);
                    changed += 1;
                }
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(tiles: &[Tile]) -> TileGrid {
        TileGrid::from_tiles(tiles.len(), 1, tiles.to_vec())
    }

    #[test]
    fn grass_desert_contact_becomes_plains() {
        let mut grid = strip(&[Tile::Grass, Tile::Desert]);
        assert_eq!(apply_transitions(&mut grid, Richness::Full), 2);
        assert_eq!(grid.tiles(), &[Tile::Plains, Tile::Plains]);
    }

    #[test]
    fn reads_snapshot_not_live_grid() {
        // The middle desert turns to plains because of its grass neighbor;
        // the right desert must not see that plains in the same pass.
        let mut grid = strip(&[Tile::Grass, Tile::Desert, Tile::Desert]);
        apply_transitions(&mut grid, Richness::Full);
        assert_eq!(grid.tiles(), &[Tile::Plains, Tile::Plains, Tile::Desert]);
    }

    #[test]
    fn later_rule_wins() {
        // Grass touches desert (plains) and snow (taiga); the snow rule is listed later.
        let mut grid = strip(&[Tile::Desert, Tile::Grass, Tile::Snow]);
        apply_transitions(&mut grid, Richness::Full);
        assert_eq!(grid.tiles(), &[Tile::Plains, Tile::Taiga, Tile::Tundra]);
    }

    #[test]
    fn water_is_never_rewritten() {
        let mut grid = strip(&[Tile::Shallow, Tile::Desert, Tile::Ocean]);
        assert_eq!(apply_transitions(&mut grid, Richness::Full), 0);
        assert_eq!(grid.tiles(), &[Tile::Shallow, Tile::Desert, Tile::Ocean]);
    }

    #[test]
    fn basic_table_never_creates_taiga_or_tundra() {
        let mut grid = TileGrid::from_tiles(
            3,
            2,
            vec![Tile::Snow, Tile::Grass, Tile::Desert, Tile::Plains, Tile::Snow, Tile::Grass],
        );
        for _ in 0..TRANSITION_PASSES {
            apply_transitions(&mut grid, Richness::Basic);
        }
        assert_eq!(grid.count(Tile::Taiga), 0);
        assert_eq!(grid.count(Tile::Tundra), 0);
    }

    #[test]
    fn uniform_land_is_stable() {
        let mut grid = TileGrid::new(4, 4, Tile::Grass);
        assert_eq!(apply_transitions(&mut grid, Richness::Full), 0);
    }
}
