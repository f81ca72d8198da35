//! Terrain data structures.
//!
//! Provides the scalar fields, tile categories and tile grid that every
//! generation stage reads and writes, plus the per-call [`World`] state.

mod field;
mod grid;
pub mod neighbors;
mod tile;
mod world;

pub use field::ScalarField;
pub use grid::TileGrid;
pub use neighbors::{neighbors_8, DIRS_8};
pub use tile::Tile;
pub use world::World;
