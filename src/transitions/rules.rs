//! Ordered transition rule tables.

use crate::biomes::Richness;
use crate::terrain::Tile;

/// A `from` cell touching any of `touches` becomes `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRule {
    pub from: Tile,
    pub touches: &'static [Tile],
    pub to: Tile,
}

const fn rule(from: Tile, touches: &'static [Tile], to: Tile) -> TransitionRule {
    TransitionRule { from, touches, to }
}

/// Six-biome table. Later rules take precedence.
pub const FULL_RULES: &[TransitionRule] = &[
    rule(Tile::Grass, &[Tile::Desert], Tile::Plains),
    rule(Tile::Desert, &[Tile::Grass], Tile::Plains),
    rule(Tile::Grass, &[Tile::Tundra], Tile::Taiga),
    rule(Tile::Tundra, &[Tile::Grass], Tile::Taiga),
    rule(Tile::Grass, &[Tile::Snow], Tile::Taiga),
    rule(Tile::Snow, &[Tile::Grass], Tile::Tundra),
    rule(Tile::Snow, &[Tile::Taiga], Tile::Tundra),
    rule(Tile::Snow, &[Tile::Plains], Tile::Tundra),
    rule(Tile::Desert, &[Tile::Taiga, Tile::Tundra, Tile::Snow], Tile::Plains),
    rule(Tile::Plains, &[Tile::Tundra, Tile::Snow], Tile::Grass),
    rule(Tile::Taiga, &[Tile::Desert], Tile::Grass),
];

/// Four-biome table; only ever produces plains.
pub const BASIC_RULES: &[TransitionRule] = &[
    rule(Tile::Grass, &[Tile::Desert], Tile::Plains),
    rule(Tile::Desert, &[Tile::Grass], Tile::Plains),
    rule(Tile::Grass, &[Tile::Snow], Tile::Plains),
    rule(Tile::Snow, &[Tile::Grass, Tile::Plains, Tile::Desert], Tile::Plains),
    rule(Tile::Desert, &[Tile::Snow], Tile::Plains),
];

pub fn rules_for(richness: Richness) -> &'static [TransitionRule] {
    match richness {
        Richness::Basic => BASIC_RULES,
        Richness::Full => FULL_RULES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_only_map_land_to_land() {
        for rule in FULL_RULES.iter().chain(BASIC_RULES) {
            assert!(rule.from.is_land());
            assert!(rule.to.is_land());
            assert!(rule.touches.iter().all(|t| t.is_land()));
            assert_ne!(rule.from, rule.to);
        }
    }

    #[test]
    fn basic_rules_stay_in_basic_biomes() {
        let cold_forest = |t: &Tile| matches!(t, Tile::Taiga | Tile::Tundra);
        for rule in BASIC_RULES {
            assert!(!cold_forest(&rule.from));
            assert!(!cold_forest(&rule.to));
            assert!(!rule.touches.iter().any(cold_forest));
        }
    }
}
