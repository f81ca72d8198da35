//! Single-focus falloffs around the map center.

use glam::Vec2;
use rayon::prelude::*;

use crate::noise::{value_noise, ValueNoiseConfig};
use crate::terrain::ScalarField;

/// Strength of the pangaea falloff applied to `d^1.5`.
const PANGAEA_STRENGTH: f32 = 0.8;
/// Strength of the linear fallback falloff.
const FRACTAL_STRENGTH: f32 = 0.55;
/// Strength of the gentle falloff under the lakes variant.
const LAKES_STRENGTH: f32 = 0.3;
/// Lake noise below this value carves a depression.
const LAKE_THRESHOLD: f32 = 0.3;
pub(super) const LAKE_SEED_OFFSET: i64 = 4444;

/// Distance from the map center, scaled so the edge midpoints sit at 1.
#[inline]
pub(super) fn radial_distance(x: usize, y: usize, half: Vec2) -> f32 {
    ((Vec2::new(x as f32, y as f32) - half) / half).length()
}

fn half_extent(field: &ScalarField) -> Vec2 {
    Vec2::new(field.width() as f32, field.height() as f32) * 0.5
}

/// Subtracts `falloff(d)` from every cell and floors the result at 0.
fn apply_radial(field: &mut ScalarField, falloff: impl Fn(f32) -> f32 + Sync) {
    let width = field.width();
    let half = half_extent(field);
    field.values_mut().par_iter_mut().enumerate().for_each(|(i, e)| {
        let d = radial_distance(i % width, i / width, half);
        *e = (*e - falloff(d)).max(0.0);
    });
}

/// One central continent: `e − 0.8·d^1.5`.
pub fn pangaea(mut elevation: ScalarField) -> ScalarField {
    apply_radial(&mut elevation, |d| d.powf(1.5) * PANGAEA_STRENGTH);
    elevation.normalized()
}

/// Fixed-strength linear falloff used when no specific shape is requested.
pub fn fractal(mut elevation: ScalarField) -> ScalarField {
    apply_radial(&mut elevation, |d| d * FRACTAL_STRENGTH);
    elevation.normalized()
}

/// Gentle falloff with depressions carved where a second noise field is low.
pub fn lakes(mut elevation: ScalarField, noise_scale: f32, seed: i32) -> ScalarField {
    apply_radial(&mut elevation, |d| d * LAKES_STRENGTH);

    let lake_cfg = ValueNoiseConfig::new(noise_scale * 0.6, 3, seed as i64 + LAKE_SEED_OFFSET);
    let lake = value_noise(elevation.width(), elevation.height(), &lake_cfg);

    for (e, &l) in elevation.values_mut().iter_mut().zip(lake.values()) {
        if l < LAKE_THRESHOLD {
            *e *= l / LAKE_THRESHOLD;
        }
    }
    elevation.normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radial_distance_is_one_at_edge_midpoints() {
        let half = Vec2::new(8.0, 8.0);
        assert_eq!(radial_distance(8, 8, half), 0.0);
        assert_eq!(radial_distance(0, 8, half), 1.0);
        assert_eq!(radial_distance(8, 0, half), 1.0);
    }

    #[test]
    fn pangaea_lowers_corners_below_center() {
        let flat = ScalarField::filled(16, 16, 1.0);
        let shaped = pangaea(flat);
        assert!(shaped.is_unit_range());
        assert_eq!(shaped.get(0, 0), 0.0);
        assert_eq!(shaped.get(8, 8), 1.0);
        assert!(shaped.get(4, 8) > shaped.get(1, 8));
    }

    #[test]
    fn fractal_is_monotone_in_distance_on_flat_input() {
        let shaped = fractal(ScalarField::filled(20, 20, 1.0));
        assert!(shaped.get(10, 10) > shaped.get(15, 10));
        assert!(shaped.get(15, 10) > shaped.get(19, 10));
    }

    #[test]
    fn lakes_output_is_normalized_and_deterministic() {
        let a = lakes(ScalarField::filled(24, 24, 0.8), 10.0, 3);
        let b = lakes(ScalarField::filled(24, 24, 0.8), 10.0, 3);
        assert!(a.is_unit_range());
        assert_eq!(a, b);
    }
}
