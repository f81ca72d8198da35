//! Named bundles of shaping parameters.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::{ConfigError, GenerationConfig};
use crate::biomes::{BiomeWeights, Richness};
use crate::landmass::LandMass;

/// A named configuration bundle.
///
/// Applying a preset sets every shaping field, keeps the map dimensions and
/// always re-rolls the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Default,
    Pangaea,
    Archipelago,
    DesertWorld,
    IceAge,
    Lakes,
    Tropical,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Default,
        Preset::Pangaea,
        Preset::Archipelago,
        Preset::DesertWorld,
        Preset::IceAge,
        Preset::Lakes,
        Preset::Tropical,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Pangaea => "pangaea",
            Preset::Archipelago => "archipelago",
            Preset::DesertWorld => "desert_world",
            Preset::IceAge => "ice_age",
            Preset::Lakes => "lakes",
            Preset::Tropical => "tropical",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::Default => "a few mid-sized continents with every climate band",
            Preset::Pangaea => "one large central continent",
            Preset::Archipelago => "many small islands in a wide ocean",
            Preset::DesertWorld => "hot, dry continents dominated by desert",
            Preset::IceAge => "cold continents under snow and tundra",
            Preset::Lakes => "mostly land broken up by inland lakes",
            Preset::Tropical => "warm, wet islands with no polar biomes",
        }
    }

    /// Shaping fields of this preset on a `width × height` map, without a seed.
    pub fn config(self, width: usize, height: usize) -> GenerationConfig {
        let base = GenerationConfig::new(width, height);
        match self {
            Preset::Default => base,
            Preset::Pangaea => GenerationConfig {
                land_mass: LandMass::Pangaea,
                ocean_ratio: 0.35,
                noise_scale: 14.0,
                noise_octaves: 5,
                island_count: 1,
                ..base
            },
            Preset::Archipelago => GenerationConfig {
                land_mass: LandMass::Archipelago,
                ocean_ratio: 0.55,
                noise_scale: 6.0,
                noise_octaves: 6,
                island_count: 8,
                moisture_bias: 0.2,
                ..base
            },
            Preset::DesertWorld => GenerationConfig {
                land_mass: LandMass::Continents,
                ocean_ratio: 0.25,
                noise_scale: 14.0,
                island_count: 2,
                temperature_bias: 0.6,
                moisture_bias: -0.6,
                biome_weights: BiomeWeights {
                    snow: 2.0,
                    tundra: 0.0,
                    taiga: 0.0,
                    grass: 10.0,
                    plains: 25.0,
                    desert: 63.0,
                },
                ..base
            },
            Preset::IceAge => GenerationConfig {
                land_mass: LandMass::Continents,
                ocean_ratio: 0.4,
                island_count: 3,
                temperature_bias: -0.6,
                biome_weights: BiomeWeights {
                    snow: 40.0,
                    tundra: 25.0,
                    taiga: 20.0,
                    grass: 10.0,
                    plains: 5.0,
                    desert: 0.0,
                },
                ..base
            },
            Preset::Lakes => GenerationConfig {
                land_mass: LandMass::Lakes,
                ocean_ratio: 0.3,
                noise_scale: 10.0,
                noise_octaves: 4,
                island_count: 1,
                moisture_bias: 0.3,
                ..base
            },
            Preset::Tropical => GenerationConfig {
                land_mass: LandMass::Archipelago,
                ocean_ratio: 0.5,
                noise_scale: 8.0,
                island_count: 5,
                temperature_bias: 0.4,
                moisture_bias: 0.5,
                biome_weights: BiomeWeights::basic(0.0, 55.0, 30.0, 15.0),
                richness: Richness::Basic,
                ..base
            },
        }
    }

    /// Applies the preset to `base`, drawing the new seed from `rng`.
    pub fn apply_with_rng<R: Rng>(self, base: &GenerationConfig, rng: &mut R) -> GenerationConfig {
        let mut cfg = self.config(base.width, base.height);
        cfg.seed = Some(rng.random_range(0..1_000_000));
        cfg
    }

    /// Applies the preset to `base` with a fresh random seed.
    pub fn apply(self, base: &GenerationConfig) -> GenerationConfig {
        self.apply_with_rng(base, &mut rand::rng())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == key)
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}
