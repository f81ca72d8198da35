//! Multi-octave value noise on a bounded grid.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::rng::LcgRng;
use crate::terrain::ScalarField;

/// Configuration for a single value-noise field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueNoiseConfig {
    /// Feature size in cells; larger values give smoother fields.
    pub scale: f32,
    /// Number of octaves (≥ 1). Each octave doubles frequency and halves amplitude.
    pub octaves: u32,
    /// Seed of the lattice stream.
    pub seed: i64,
}

impl Default for ValueNoiseConfig {
    fn default() -> Self {
        Self {
            scale: 12.0,
            octaves: 5,
            seed: 42,
        }
    }
}

impl ValueNoiseConfig {
    pub fn new(scale: f32, octaves: u32, seed: i64) -> Self {
        Self { scale, octaves, seed }
    }

    /// Creates the default configuration with the given seed.
    pub fn with_seed(seed: i64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }
}

#[inline]
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Square lattice of random values for one octave.
struct Lattice {
    side: usize,
    values: Vec<f32>,
}

impl Lattice {
    fn draw(side: usize, rng: &mut LcgRng) -> Self {
        let values = (0..side * side).map(|_| rng.next_f32()).collect();
        Self { side, values }
    }

    #[inline]
    fn at(&self, gx: usize, gy: usize) -> f32 {
        self.values[(gy % self.side) * self.side + gx % self.side]
    }

    /// Smoothstep-eased bilinear sample at lattice coordinates `(fx, fy)`.
    fn sample(&self, fx: f32, fy: f32) -> f32 {
        let ix = fx.floor();
        let iy = fy.floor();
        let sx = smoothstep(fx - ix);
        let sy = smoothstep(fy - iy);
        let (ix, iy) = (ix as usize, iy as usize);

        let top = self.at(ix, iy) + sx * (self.at(ix + 1, iy) - self.at(ix, iy));
        let bottom = self.at(ix, iy + 1) + sx * (self.at(ix + 1, iy + 1) - self.at(ix, iy + 1));
        top + sy * (bottom - top)
    }
}

/// Generates a `width × height` value-noise field normalized to [0, 1].
///
/// Lattices are drawn sequentially from one [`LcgRng`] stream; rows are then
/// evaluated in parallel, so the result does not depend on the thread count.
pub fn value_noise(width: usize, height: usize, config: &ValueNoiseConfig) -> ScalarField {
    let mut rng = LcgRng::new(config.seed);
    let mut field = ScalarField::new(width, height);
    if field.is_empty() {
        return field;
    }

    let longest = width.max(height) as f32;

    for octave in 0..config.octaves {
        let frequency = 2f32.powi(octave as i32) / config.scale;
        let amplitude = 0.5f32.powi(octave as i32);
        let side = (longest * frequency).ceil() as usize + 2;
        let lattice = Lattice::draw(side, &mut rng);

        field
            .values_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                let fy = y as f32 * frequency;
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell += lattice.sample(x as f32 * frequency, fy) * amplitude;
                }
            });
    }

    field.normalized()
}
