//! Biome share configuration.

use serde::{Deserialize, Serialize};

use crate::terrain::Tile;

/// How many land biomes a map uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Richness {
    /// Snow, grass, plains and desert; sea extends 3 cells from shore.
    Basic,
    /// Adds taiga and tundra; sea extends 4 cells from shore.
    #[default]
    Full,
}

impl Richness {
    /// Largest land distance still classified as sea rather than ocean.
    pub fn sea_depth(self) -> u32 {
        match self {
            Richness::Basic => 3,
            Richness::Full => 4,
        }
    }
}

/// Relative shares of the temperature axis given to each land biome.
///
/// Only the ratios matter. Missing entries in a config file default to 0;
/// unknown biome names are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BiomeWeights {
    pub snow: f32,
    pub tundra: f32,
    pub taiga: f32,
    pub grass: f32,
    pub plains: f32,
    pub desert: f32,
}

impl BiomeWeights {
    /// Land biomes from coldest to hottest; band order of the classifier.
    pub const ORDER: [Tile; 6] = [
        Tile::Snow,
        Tile::Tundra,
        Tile::Taiga,
        Tile::Grass,
        Tile::Plains,
        Tile::Desert,
    ];

    /// Four-biome weights (tundra and taiga zero).
    pub fn basic(snow: f32, grass: f32, plains: f32, desert: f32) -> Self {
        Self {
            snow,
            grass,
            plains,
            desert,
            ..Default::default()
        }
    }

    /// Weight of one biome; water tiles have none.
    pub fn get(&self, tile: Tile) -> f32 {
        match tile {
            Tile::Snow => self.snow,
            Tile::Tundra => self.tundra,
            Tile::Taiga => self.taiga,
            Tile::Grass => self.grass,
            Tile::Plains => self.plains,
            Tile::Desert => self.desert,
            Tile::Ocean | Tile::Sea | Tile::Shallow => 0.0,
        }
    }

    /// Sets the weight of a land biome. Water tiles are ignored.
    pub fn set(&mut self, tile: Tile, weight: f32) -> &mut Self {
        match tile {
            Tile::Snow => self.snow = weight,
            Tile::Tundra => self.tundra = weight,
            Tile::Taiga => self.taiga = weight,
            Tile::Grass => self.grass = weight,
            Tile::Plains => self.plains = weight,
            Tile::Desert => self.desert = weight,
            Tile::Ocean | Tile::Sea | Tile::Shallow => {}
        }
        self
    }

    /// Weights actually used for `richness`: `Basic` drops tundra and taiga.
    pub fn effective(&self, richness: Richness) -> Self {
        match richness {
            Richness::Full => *self,
            Richness::Basic => Self {
                tundra: 0.0,
                taiga: 0.0,
                ..*self
            },
        }
    }

    pub fn total(&self) -> f32 {
        Self::ORDER.iter().map(|&t| self.get(t)).sum()
    }

    /// `(tile, weight)` pairs in band order.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, f32)> + '_ {
        Self::ORDER.iter().map(move |&t| (t, self.get(t)))
    }
}
