//! Distances and ages in an FLRW cosmology, following Carroll & Ostlie
//! (2007), section 29.4.
//!
//! `omega_k` is the total density parameter in the convention used there:
//! a flat universe has `omega_k = 1` and the curvature density is
//! `1 - omega_k`. Distances are in Mpc, ages in Myr.

use crate::constants::{HUBBLE_CONSTANT, HUBBLE_TO_INV_MYR, SPEED_OF_LIGHT_KM_S};
use crate::error::{Error, Result};
use crate::quadrature::{integrate, QuadOptions};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    pub speed_of_light_km_s: f64,
    /// km / s / Mpc
    pub hubble_constant: f64
}

impl Constants {
    pub const DEFAULT: Constants = Constants {
        speed_of_light_km_s: SPEED_OF_LIGHT_KM_S,
        hubble_constant: HUBBLE_CONSTANT
    };

    /// c / H0 in Mpc.
    pub fn hubble_distance(&self) -> f64 {
        self.speed_of_light_km_s / self.hubble_constant
    }

    /// 1 / H0 in Myr.
    pub fn hubble_time(&self) -> f64 {
        1.0 / (self.hubble_constant * HUBBLE_TO_INV_MYR)
    }
}

impl Default for Constants {
    fn default() -> Self {
        Constants::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cosmology {
    pub omega_m: f64,
    pub omega_l: f64,
    pub omega_r: f64,
    pub omega_k: f64,
    pub constants: Constants
}

/// Concordance cosmology used for distances; radiation is neglected.
pub const CONCORDANCE: Cosmology = Cosmology {
    omega_m: 0.27,
    omega_l: 0.73,
    omega_r: 0.0,
    omega_k: 1.0,
    constants: Constants::DEFAULT
};

/// Concordance cosmology used for ages, where the radiation era matters.
pub const CONCORDANCE_AGE: Cosmology = Cosmology {
    omega_r: 8.24e-5,
    ..CONCORDANCE
};

impl Default for Cosmology {
    fn default() -> Self {
        CONCORDANCE
    }
}

/// Sign of the spatial curvature. `k` is `omega_k - 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curvature {
    Flat,
    Open { k: f64 },
    Closed { k: f64 }
}

// Below this value of |k| I^2 the closure is summed as a series.
const SERIES_THRESHOLD: f64 = 1e-2;

impl Curvature {
    pub fn from_omega_k(omega_k: f64) -> Curvature {
        let k = omega_k - 1.0;
        if k == 0.0 {
            Curvature::Flat
        } else if k < 0.0 {
            Curvature::Open { k }
        } else {
            Curvature::Closed { k }
        }
    }

    /// Maps the comoving integral `i` onto the transverse comoving distance
    /// in units of c / H0: `sinh(i√|k|)/√|k|` for open, `sin(i√k)/√k` for
    /// closed, `i` for flat.
    pub fn closure(&self, i: f64) -> f64 {
        let k = match *self {
            Curvature::Flat => return i,
            Curvature::Open { k } | Curvature::Closed { k } => k
        };

        // sin(i√k)/√k = i Σ (-k i²)ⁿ / (2n+1)!, the same series covers sinh
        let x = k * i * i;
        if x.abs() < SERIES_THRESHOLD {
            let mut term = 1.0;
            let mut sum = 1.0;
            for n in 1..6 {
                term *= -x / ((2 * n) as f64 * (2 * n + 1) as f64);
                sum += term;
            }
            return i * sum;
        }

        let q = k.abs().sqrt();
        match *self {
            Curvature::Open { .. } => (i * q).sinh() / q,
            _ => (i * q).sin() / q
        }
    }
}

fn check_redshift(z: f64) -> Result<()> {
    if z.is_finite() && z > -1.0 {
        Ok(())
    } else {
        debug!(z, "rejected redshift");
        Err(Error::domain(format!("redshift {} must be finite and greater than -1", z)))
    }
}

impl Cosmology {
    pub fn new(omega_m: f64, omega_l: f64, omega_r: f64, omega_k: f64) -> Self {
        Cosmology { omega_m, omega_l, omega_r, omega_k, constants: Constants::DEFAULT }
    }

    pub fn with_constants(self, constants: Constants) -> Self {
        Cosmology { constants, ..self }
    }

    pub fn curvature(&self) -> Curvature {
        Curvature::from_omega_k(self.omega_k)
    }

    /// Squared dimensionless Hubble parameter, E(z)².
    fn friedmann_eqn(&self, z: f64) -> f64 {
        let a = 1.0 + z;
        self.omega_m * a.powi(3) + self.omega_r * a.powi(4) + self.omega_l
            + (1.0 - self.omega_k) * a.powi(2)
    }

    /// 1 / E(z). Fails where E(z)² is not positive.
    pub fn expansion_integrand(&self, z: f64) -> Result<f64> {
        let e2 = self.friedmann_eqn(z);
        if e2 > 0.0 && e2.is_finite() {
            Ok(1.0 / e2.sqrt())
        } else {
            Err(Error::domain(format!(
                "E(z)^2 = {} is not positive at z = {} for {:?}", e2, z, self)))
        }
    }

    /// 1 / ((1 + z) E(z)), the integrand of the lookback time.
    pub fn age_integrand(&self, z: f64) -> Result<f64> {
        Ok(self.expansion_integrand(z)? / (1.0 + z))
    }

    /// ∫₀ᶻ dz' / E(z')
    pub fn i_integral(&self, z: f64) -> Result<f64> {
        check_redshift(z)?;
        let q = integrate(|x| self.expansion_integrand(x), 0.0, z, &QuadOptions::default())?;
        Ok(q.value)
    }

    pub fn s_func(&self, z: f64) -> Result<f64> {
        Ok(self.curvature().closure(self.i_integral(z)?))
    }

    pub fn comoving_coordinate(&self, z: f64) -> Result<f64> {
        Ok(self.constants.hubble_distance() * self.s_func(z)?)
    }

    pub fn luminosity_distance(&self, z: f64) -> Result<f64> {
        Ok(self.comoving_coordinate(z)? * (1.0 + z))
    }

    pub fn angular_diameter_distance(&self, z: f64) -> Result<f64> {
        Ok(self.luminosity_distance(z)? / (1.0 + z).powi(2))
    }

    /// Age of the universe at redshift `z`, integrating out to z = ∞.
    pub fn universe_age(&self, z: f64) -> Result<f64> {
        check_redshift(z)?;
        let q = integrate(|x| self.age_integrand(x), z, f64::INFINITY, &QuadOptions::default())?;
        Ok(self.constants.hubble_time() * q.value)
    }
}
