//! Tile categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Terrain category of a single map cell. `as_u8()` is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    Ocean = 0,
    Sea = 1,
    Shallow = 2,
    Grass = 3,
    Plains = 4,
    Desert = 5,
    Taiga = 6,
    Tundra = 7,
    Snow = 8,
}

impl Tile {
    pub const ALL: [Tile; 9] = [
        Tile::Ocean,
        Tile::Sea,
        Tile::Shallow,
        Tile::Grass,
        Tile::Plains,
        Tile::Desert,
        Tile::Taiga,
        Tile::Tundra,
        Tile::Snow,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Tile::Ocean => "ocean",
            Tile::Sea => "sea",
            Tile::Shallow => "shallow",
            Tile::Grass => "grass",
            Tile::Plains => "plains",
            Tile::Desert => "desert",
            Tile::Taiga => "taiga",
            Tile::Tundra => "tundra",
            Tile::Snow => "snow",
        }
    }

    pub fn is_land(self) -> bool {
        matches!(
            self,
            Tile::Grass | Tile::Plains | Tile::Desert | Tile::Taiga | Tile::Tundra | Tile::Snow
        )
    }

    pub fn is_water(self) -> bool {
        !self.is_land()
    }

    /// Sea or ocean. Only shallow water may border land.
    pub fn is_deep_water(self) -> bool {
        matches!(self, Tile::Ocean | Tile::Sea)
    }

    /// Dry biomes whose cold-side boundary is resolved by moisture.
    pub fn is_arid(self) -> bool {
        matches!(self, Tile::Plains | Tile::Desert)
    }

    /// RGB preview color.
    pub fn preview_rgb(self) -> [u8; 3] {
        match self {
            Tile::Ocean => [0x0d, 0x47, 0xa1],
            Tile::Sea => [0x15, 0x65, 0xc0],
            Tile::Shallow => [0x42, 0xa5, 0xf5],
            Tile::Grass => [0x4c, 0xaf, 0x50],
            Tile::Plains => [0xc0, 0xca, 0x33],
            Tile::Desert => [0xff, 0xb7, 0x4d],
            Tile::Taiga => [0x2e, 0x7d, 0x32],
            Tile::Tundra => [0x78, 0x90, 0x9c],
            Tile::Snow => [0xe8, 0xea, 0xf6],
        }
    }

    /// One-character glyph for terminal previews.
    pub fn glyph(self) -> char {
        match self {
            Tile::Ocean => '~',
            Tile::Sea => '-',
            Tile::Shallow => '.',
            Tile::Grass => 'g',
            Tile::Plains => 'p',
            Tile::Desert => 'd',
            Tile::Taiga => 't',
            Tile::Tundra => 'u',
            Tile::Snow => '*',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tile::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tile '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable() {
        for (i, tile) in Tile::ALL.iter().enumerate() {
            assert_eq!(tile.as_u8() as usize, i);
            assert_eq!(Tile::from_u8(i as u8), Some(*tile));
        }
        assert_eq!(Tile::from_u8(9), None);
    }

    #[test]
    fn water_classes_are_disjoint_from_land() {
        for tile in Tile::ALL {
            assert_ne!(tile.is_land(), tile.is_water());
            if tile.is_deep_water() {
                assert!(tile.is_water());
            }
        }
        assert!(!Tile::Shallow.is_deep_water());
    }

    #[test]
    fn parses_names() {
        assert_eq!("Desert".parse::<Tile>().unwrap(), Tile::Desert);
        assert!("lava".parse::<Tile>().is_err());
    }
}
