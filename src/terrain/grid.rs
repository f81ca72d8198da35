//! Categorical tile grid, the artifact handed to renderers.

use serde::{Deserialize, Serialize};

use super::neighbors::neighbors_8;
use super::tile::Tile;

/// A `width × height` grid of [`Tile`]s in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Creates a grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: Tile) -> Self {
        Self {
            width,
            height,
            tiles: vec![fill; width * height],
        }
    }

    /// Wraps existing row-major tiles.
    ///
    /// # Panics
    /// Panics if `tiles.len() != width * height`.
    pub fn from_tiles(width: usize, height: usize, tiles: Vec<Tile>) -> Self {
        assert_eq!(tiles.len(), width * height, "grid size mismatch");
        Self { width, height, tiles }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Tile {
        self.tiles[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) {
        self.tiles[y * self.width + x] = tile;
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width.max(1))
    }

    /// Number of cells holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// In-bounds 8-neighbors of `(x, y)`.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        neighbors_8(self.width, self.height, x, y)
    }

    /// Returns true if any 8-neighbor of `(x, y)` satisfies `pred`.
    pub fn any_neighbor(&self, x: usize, y: usize, pred: impl Fn(Tile) -> bool) -> bool {
        self.neighbors(x, y).any(|(nx, ny)| pred(self.get(nx, ny)))
    }

    /// Returns true if no deep-water cell touches land in any of the 8 directions.
    pub fn has_shallow_border(&self) -> bool {
        (0..self.height).all(|y| {
            (0..self.width).all(|x| {
                let t = self.get(x, y);
                !(t.is_land() && self.any_neighbor(x, y, Tile::is_deep_water))
            })
        })
    }

    /// Renders the grid with one glyph per cell and one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.extend(row.iter().map(|t| t.glyph()));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_uniform() {
        let g = TileGrid::new(5, 4, Tile::Ocean);
        assert_eq!(g.len(), 20);
        assert_eq!(g.count(Tile::Ocean), 20);
        assert_eq!(g.rows().count(), 4);
    }

    #[test]
    fn shallow_border_detects_violation() {
        let mut g = TileGrid::new(3, 3, Tile::Shallow);
        g.set(1, 1, Tile::Grass);
        assert!(g.has_shallow_border());
        g.set(2, 2, Tile::Sea);
        assert!(!g.has_shallow_border());
    }

    #[test]
    fn ascii_has_one_line_per_row() {
        let g = TileGrid::new(3, 2, Tile::Grass);
        assert_eq!(g.to_ascii(), "ggg\nggg\n");
    }
}
