//! Land-shape modulation of the elevation field.
//!
//! Each [`LandMass`] variant reshapes a normalized elevation field into a
//! macro topology (one continent, several continents, islands, lakes) and
//! hands back a field that is again normalized to [0, 1].

mod centers;
mod radial;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use centers::{generate_centers, Center};

use crate::config::{ConfigError, GenerationConfig};
use crate::terrain::ScalarField;

/// Macro shape strategy applied to the elevation field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandMass {
    /// A single central continent.
    #[serde(alias = "single-continent")]
    Pangaea,
    /// Several continents around seeded centers.
    #[default]
    #[serde(alias = "multi-continent")]
    Continents,
    /// Many small islands.
    Archipelago,
    /// Mostly land with inland lakes.
    Lakes,
    /// Plain noise under a fixed radial falloff.
    #[serde(alias = "generic")]
    Fractal,
}

impl LandMass {
    pub const ALL: [LandMass; 5] = [
        LandMass::Pangaea,
        LandMass::Continents,
        LandMass::Archipelago,
        LandMass::Lakes,
        LandMass::Fractal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LandMass::Pangaea => "pangaea",
            LandMass::Continents => "continents",
            LandMass::Archipelago => "archipelago",
            LandMass::Lakes => "lakes",
            LandMass::Fractal => "fractal",
        }
    }
}

impl fmt::Display for LandMass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LandMass {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pangaea" | "single-continent" => Ok(LandMass::Pangaea),
            "continents" | "multi-continent" => Ok(LandMass::Continents),
            "archipelago" => Ok(LandMass::Archipelago),
            "lakes" => Ok(LandMass::Lakes),
            "fractal" | "generic" => Ok(LandMass::Fractal),
            _ => Err(ConfigError::UnknownLandMass(s.to_string())),
        }
    }
}

/// Reshapes `elevation` according to `config.land_mass`.
///
/// Consumes the field and returns the reshaped one, normalized to [0, 1].
pub fn apply_land_mass(elevation: ScalarField, config: &GenerationConfig, seed: i32) -> ScalarField {
    match config.land_mass {
        LandMass::Pangaea => radial::pangaea(elevation),
        LandMass::Continents => centers::continents(elevation, config.island_count, seed),
        LandMass::Archipelago => {
            centers::archipelago(elevation, config.island_count, config.noise_scale, seed)
        }
        LandMass::Lakes => radial::lakes(elevation, config.noise_scale, seed),
        LandMass::Fractal => radial::fractal(elevation),
    }
}
