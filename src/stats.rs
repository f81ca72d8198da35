//! Tile composition statistics.

use serde::Serialize;

use crate::terrain::{Tile, TileGrid};

/// Count and share of one tile category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileCount {
    pub tile: Tile,
    pub count: usize,
    pub percent: f32,
}

/// Per-tile counts of a grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileStats {
    total: usize,
    counts: Vec<TileCount>,
}

impl TileStats {
    pub fn from_grid(grid: &TileGrid) -> Self {
        let mut raw = [0usize; Tile::ALL.len()];
        for &tile in grid.tiles() {
            raw[tile.as_u8() as usize] += 1;
        }

        let total = grid.len();
        let counts = Tile::ALL
            .iter()
            .map(|&tile| {
                let count = raw[tile.as_u8() as usize];
                TileCount {
                    tile,
                    count,
                    percent: share(count, total),
                }
            })
            .collect();
        Self { total, counts }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.counts[tile.as_u8() as usize].count
    }

    /// Share of `tile` in percent (0 on an empty grid).
    pub fn percent(&self, tile: Tile) -> f32 {
        self.counts[tile.as_u8() as usize].percent
    }

    /// Every category, in tile id order.
    pub fn counts(&self) -> &[TileCount] {
        &self.counts
    }

    /// Present tiles with whole-number percentages, largest first.
    ///
    /// Ties keep tile id order. Rounded values need not sum to exactly 100.
    pub fn rounded_percentages(&self) -> Vec<(Tile, u32)> {
        let mut out: Vec<(Tile, u32)> = self
            .counts
            .iter()
            .filter(|c| c.count > 0)
            .map(|c| (c.tile, c.percent.round() as u32))
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    /// Fraction of cells that are land, in [0, 1].
    pub fn land_fraction(&self) -> f32 {
        let land: usize = self
            .counts
            .iter()
            .filter(|c| c.tile.is_land())
            .map(|c| c.count)
            .sum();
        share(land, self.total) / 100.0
    }
}

fn share(count: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        count as f32 / total as f32 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TileGrid {
        let mut tiles = vec![Tile::Ocean; 6];
        tiles.extend([Tile::Shallow, Tile::Shallow, Tile::Grass, Tile::Desert]);
        TileGrid::from_tiles(5, 2, tiles)
    }

    #[test]
    fn counts_and_percentages() {
        let stats = TileStats::from_grid(&sample());
        assert_eq!(stats.total(), 10);
        assert_eq!(stats.count(Tile::Ocean), 6);
        assert_eq!(stats.count(Tile::Snow), 0);
        assert!((stats.percent(Tile::Shallow) - 20.0).abs() < 1e-4);
        assert!((stats.land_fraction() - 0.2).abs() < 1e-6);

        let sum: f32 = stats.counts().iter().map(|c| c.percent).sum();
        assert!((sum - 100.0).abs() < 1e-3);
    }

    #[test]
    fn rounded_percentages_are_sorted_and_skip_absent_tiles() {
        let stats = TileStats::from_grid(&sample());
        assert_eq!(
            stats.rounded_percentages(),
            vec![
                (Tile::Ocean, 60),
                (Tile::Shallow, 20),
                (Tile::Grass, 10),
                (Tile::Desert, 10),
            ]
        );
    }

    #[test]
    fn empty_grid_has_zero_shares() {
        let stats = TileStats::from_grid(&TileGrid::new(0, 0, Tile::Ocean));
        assert_eq!(stats.percent(Tile::Ocean), 0.0);
        assert!(stats.rounded_percentages().is_empty());
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_string(&TileStats::from_grid(&sample())).unwrap();
        assert!(json.contains("\"total\":10"));
        assert!(json.contains("\"tile\":\"ocean\""));
    }
}
