//! Multi-center land shaping for continents and archipelagos.

use glam::Vec2;
use rayon::prelude::*;

use crate::noise::{value_noise, LcgRng, ValueNoiseConfig};
use crate::terrain::ScalarField;

pub(super) const CENTER_SEED_OFFSET: i64 = 7777;
pub(super) const DETAIL_SEED_OFFSET: i64 = 3333;

/// Fraction of each axis kept free of centers on either side.
const CENTER_MARGIN: f32 = 0.15;
/// Width of the border fade, as a fraction of the shorter axis.
const EDGE_FADE: f32 = 0.15;
/// Distance ratios beyond this stop increasing the penalty.
const MAX_CENTER_RATIO: f32 = 2.0;

/// A transient falloff focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Center {
    pub position: Vec2,
    pub radius: f32,
}

/// Penalty weights of one multi-center variant.
#[derive(Debug, Clone, Copy)]
pub(super) struct CenterFalloff {
    /// Weight of the distance-to-nearest-center term.
    pub center_strength: f32,
    /// Weight of the border fade term.
    pub edge_strength: f32,
}

pub(super) const CONTINENTS: CenterFalloff = CenterFalloff {
    center_strength: 0.6,
    edge_strength: 0.5,
};

pub(super) const ARCHIPELAGO: CenterFalloff = CenterFalloff {
    center_strength: 0.35,
    edge_strength: 0.35,
};

/// Draws `count` centers for a `width × height` map from `seed + 7777`.
///
/// Positions are uniform inside a 15% inset; radii are uniform in
/// `[0.2, 0.5] × min(width, height)`.
pub fn generate_centers(width: usize, height: usize, count: u32, seed: i32) -> Vec<Center> {
    let mut rng = LcgRng::new(seed as i64 + CENTER_SEED_OFFSET);
    let (w, h) = (width as f32, height as f32);
    let span = 1.0 - 2.0 * CENTER_MARGIN;

    (0..count)
        .map(|_| {
            let x = w * (CENTER_MARGIN + span * rng.next_f32());
            let y = h * (CENTER_MARGIN + span * rng.next_f32());
            let radius = w.min(h) * rng.range(0.2, 0.5);
            Center {
                position: Vec2::new(x, y),
                radius,
            }
        })
        .collect()
}

/// Smallest `distance / radius` over all centers.
fn nearest_ratio(p: Vec2, centers: &[Center]) -> f32 {
    centers
        .iter()
        .map(|c| p.distance(c.position) / c.radius.max(f32::EPSILON))
        .fold(f32::INFINITY, f32::min)
}

/// 0 on the border, rising to 1 at `EDGE_FADE` of the shorter axis inward.
fn edge_factor(x: usize, y: usize, width: usize, height: usize) -> f32 {
    let inset = width.min(height) as f32 * EDGE_FADE;
    let to_edge = x.min(width - 1 - x).min(y).min(height - 1 - y) as f32;
    (to_edge / inset.max(f32::EPSILON)).clamp(0.0, 1.0)
}

/// Lowers elevation away from every center and near the map border.
pub(super) fn apply_centers(field: &mut ScalarField, centers: &[Center], falloff: CenterFalloff) {
    let (width, height) = (field.width(), field.height());
    field.values_mut().par_iter_mut().enumerate().for_each(|(i, e)| {
        let (x, y) = (i % width, i / width);
        let ratio = nearest_ratio(Vec2::new(x as f32, y as f32), centers).min(MAX_CENTER_RATIO);
        let edge = edge_factor(x, y, width, height);
        let penalty = ratio * falloff.center_strength + (1.0 - edge) * falloff.edge_strength;
        *e = (*e - penalty).max(0.0);
    });
}

/// Several continents around seeded centers.
pub fn continents(mut elevation: ScalarField, island_count: u32, seed: i32) -> ScalarField {
    let centers = generate_centers(elevation.width(), elevation.height(), island_count, seed);
    apply_centers(&mut elevation, &centers, CONTINENTS);
    elevation.normalized()
}

/// Weaker center falloff broken up by a detail noise field.
pub fn archipelago(
    mut elevation: ScalarField,
    island_count: u32,
    noise_scale: f32,
    seed: i32,
) -> ScalarField {
    let centers = generate_centers(elevation.width(), elevation.height(), island_count, seed);
    apply_centers(&mut elevation, &centers, ARCHIPELAGO);

    let detail_cfg = ValueNoiseConfig::new(noise_scale * 0.5, 3, seed as i64 + DETAIL_SEED_OFFSET);
    let detail = value_noise(elevation.width(), elevation.height(), &detail_cfg);
    for (e, &d) in elevation.values_mut().iter_mut().zip(detail.values()) {
        *e *= 0.5 + d;
    }
    elevation.normalized()
}
