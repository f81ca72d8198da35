//! Noise generation module for terrain synthesis.
//!
//! A Park–Miller stream feeds multi-octave value noise, which gives bit-exact
//! fields for a given seed on every platform.

mod rng;
mod value;

pub use rng::LcgRng;
pub use value::{value_noise, ValueNoiseConfig};
