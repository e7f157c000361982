//! Astrophysics helpers: cosmological distances and ages, Kepler's equation,
//! few-body dynamics, stellar populations, and the numerical primitives
//! (adaptive quadrature, bracketed root finding) underneath them.
//!
//! The free functions below take the density parameters explicitly and use
//! the default physical constants; build a [`Cosmology`] to change them.

pub mod constants;
pub mod cosmology;
pub mod dynamics;
pub mod error;
pub mod orbits;
pub mod population;
pub mod quadrature;
pub mod roots;
pub mod stats;

pub use crate::cosmology::{Constants, Cosmology, Curvature, CONCORDANCE, CONCORDANCE_AGE};
pub use crate::error::{Error, Result};
pub use crate::orbits::eccentric_anomaly;

/// Comoving coordinate in Mpc. Defaults: [`CONCORDANCE`].
pub fn comoving_coordinate(z: f64, omega_m: f64, omega_l: f64, omega_r: f64, omega_k: f64) -> Result<f64> {
    Cosmology::new(omega_m, omega_l, omega_r, omega_k).comoving_coordinate(z)
}

/// Luminosity distance in Mpc. Defaults: [`CONCORDANCE`].
pub fn luminosity_distance(z: f64, omega_m: f64, omega_l: f64, omega_r: f64, omega_k: f64) -> Result<f64> {
    Cosmology::new(omega_m, omega_l, omega_r, omega_k).luminosity_distance(z)
}

/// Angular-diameter distance in Mpc. Defaults: [`CONCORDANCE`].
pub fn angular_diameter_distance(z: f64, omega_m: f64, omega_l: f64, omega_r: f64, omega_k: f64) -> Result<f64> {
    Cosmology::new(omega_m, omega_l, omega_r, omega_k).angular_diameter_distance(z)
}

/// Age of the universe at redshift `z` in Myr. Defaults: [`CONCORDANCE_AGE`].
pub fn universe_age(z: f64, omega_m: f64, omega_l: f64, omega_r: f64, omega_k: f64) -> Result<f64> {
    Cosmology::new(omega_m, omega_l, omega_r, omega_k).universe_age(z)
}
