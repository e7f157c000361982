//! Few-body scattering thresholds and hierarchical triple stability.
//!
//! Critical velocities are the relative velocities at infinity at which the
//! total energy of the system is zero (Fregeau et al. 2004, MNRAS 352, 1).
//! Masses in kg, separations in m, velocities in m/s.

use crate::constants::G;
use crate::error::Result;
use crate::roots::{brentq, RootOptions};

/// Single star `m[2]` scattering off the binary `(m[0], m[1])` with
/// semi-major axis `a`.
pub fn vcrit_binsing(m: [f64; 3], a: f64) -> f64 {
    let [m1, m2, m3] = m;
    let mu = (m1 + m2) * m3 / (m1 + m2 + m3);
    (G / mu * m1 * m2 / a).sqrt()
}

/// Binary `(m[0], m[1])` on `a[0]` scattering off binary `(m[2], m[3])` on
/// `a[1]`. Eq. 2 of Fregeau et al.
pub fn vcrit_binbin(m: [f64; 4], a: [f64; 2]) -> f64 {
    let [m1, m2, m3, m4] = m;
    let [a1, a2] = a;
    let mu = (m1 + m2) * (m3 + m4) / (m1 + m2 + m3 + m4);
    (G / mu * (m1 * m2 / a1 + m3 * m4 / a2)).sqrt()
}

/// Single star `m[3]` scattering off a hierarchical triple with inner
/// binary `(m[0], m[1])`, tertiary `m[2]`, and semi-major axes
/// `[inner, outer]`.
pub fn vcrit_tripsing(m: [f64; 4], a: [f64; 2]) -> f64 {
    let [m1, m2, m3, m4] = m;
    let [a_in, a_out] = a;
    ((G * (a_out * m1 * m2 + a_in * (m1 + m2) * m3) * (m1 + m2 + m3 + m4))
        / (a_out * a_in * (m1 + m2 + m3) * m4)).sqrt()
}

/// Binary `(m[3], m[4])` scattering off a hierarchical triple
/// `((m[0], m[1]), m[2])`. Semi-major axes are
/// `[inner, outer, interloper]`.
pub fn vcrit_tripbin(m: [f64; 5], a: [f64; 3]) -> f64 {
    let [m000, m001, m01, m10, m11] = m;
    let [a00, a0, a1] = a;
    ((G * (m000 + m001 + m01 + m10 + m11)
        * (a00 * a1 * (m000 + m001) * m01 + a0 * (a1 * m000 * m001 + a00 * m10 * m11)))
        / (a0 * a00 * a1 * (m000 + m001 + m01) * (m10 + m11))).sqrt()
}

/// Critical ratio of outer periapsis to inner semi-major axis above which a
/// hierarchical triple is stable (Mardling & Aarseth 2001, eq. 90), with
/// the inclination correction of p. 414.
///
/// `q_out` is `m3 / (m1 + m2)`, `inc` the mutual inclination in degrees.
pub fn mardling(q_out: f64, e_out: f64, inc: f64) -> f64 {
    const C: f64 = 2.8;
    let ratio = C * ((1.0 + q_out) * (1.0 + e_out) / (1.0 - e_out).sqrt()).powf(2.0 / 5.0);
    ratio * (1.0 - 0.3 * inc / 180.0)
}

/// Outer eccentricity at which a triple with semi-major axis ratio
/// `alpha = a_out / a_in` becomes Mardling unstable.
pub fn mardling_ecc(alpha: f64, q_out: f64, inc: f64) -> Result<f64> {
    let f = |ecc: f64| mardling(q_out, ecc, inc) - (1.0 - ecc) * alpha;
    Ok(brentq(f, 0.0, 1.0 - f64::EPSILON, &RootOptions::default())?.root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{AU, SOLAR_MASS};
    use crate::error::Error;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_binsing_energy_balance() {
        let m = [SOLAR_MASS, 0.5 * SOLAR_MASS, 0.8 * SOLAR_MASS];
        let a = 10.0 * AU;
        let v = vcrit_binsing(m, a);
        let mu = (m[0] + m[1]) * m[2] / (m[0] + m[1] + m[2]);
        // kinetic energy at infinity equals the binary binding energy
        assert_approx_eq!(0.5 * mu * v * v / (G * m[0] * m[1] / (2.0 * a)), 1.0, 1e-12);
    }

    #[test]
    fn test_triple_reduces_to_binary() {
        let (a_in, a_out) = (AU, 20.0 * AU);
        let v3 = vcrit_tripsing([1e30, 2e30, 0.0, 1.5e30], [a_in, a_out]);
        assert_approx_eq!(v3 / vcrit_binsing([1e30, 2e30, 1.5e30], a_in), 1.0, 1e-12);

        let v4 = vcrit_tripbin([1e30, 2e30, 0.0, 1.2e30, 0.7e30], [a_in, a_out, 3.0 * AU]);
        let v2 = vcrit_binbin([1e30, 2e30, 1.2e30, 0.7e30], [a_in, 3.0 * AU]);
        assert_approx_eq!(v4 / v2, 1.0, 1e-12);
    }

    #[test]
    fn test_mardling() {
        // equal masses, circular, coplanar
        assert_approx_eq!(mardling(0.5, 0.0, 0.0), 2.8 * 1.5f64.powf(0.4), 1e-12);
        assert_approx_eq!(mardling(0.5, 0.0, 180.0), 0.7 * mardling(0.5, 0.0, 0.0), 1e-12);
        assert!(mardling(0.5, 0.5, 0.0) > mardling(0.5, 0.1, 0.0));
    }

    #[test]
    fn test_mardling_ecc() {
        let (alpha, q) = (5.0, 1.0);
        let e = mardling_ecc(alpha, q, 0.0).unwrap();
        assert!(e > 0.0 && e < 1.0);
        assert_approx_eq!(mardling(q, e, 0.0), (1.0 - e) * alpha, 1e-9);
        // wider triples tolerate more eccentric outer orbits
        assert!(mardling_ecc(10.0, q, 0.0).unwrap() > e);
    }

    #[test]
    fn test_mardling_ecc_unstable_when_circular() {
        assert!(matches!(mardling_ecc(2.0, 1.0, 0.0), Err(Error::Precondition(_))));
    }
}
