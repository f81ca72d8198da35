//! Climate derivation.
//!
//! Turns raw noise into bounded temperature and moisture fields using a
//! latitude gradient and the user biases.

mod config;
mod moisture;
mod temperature;

pub use config::ClimateConfig;
pub use moisture::derive_moisture;
pub use temperature::derive_temperature;
