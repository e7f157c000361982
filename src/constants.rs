// Physical constants
pub const G: f64 = 6.67384e-11;
pub const SPEED_OF_LIGHT: f64 = 299792458.0;
pub const SPEED_OF_LIGHT_KM_S: f64 = 299792.458;
pub const HUBBLE_CONSTANT: f64 = 70.4; // km / s / Mpc

/// Converts H0 in km/s/Mpc to 1/Myr.
pub const HUBBLE_TO_INV_MYR: f64 = 1.022e-6;

// Masses
pub const SOLAR_MASS: f64 = 1.989e30;

// Distances
pub const PARSEC: f64 = 3.0857e16;
pub const AU: f64 = 1.496e11;
pub const SOLAR_RADIUS: f64 = 6.9599e8;
pub const MPC: f64 = 3.0857e22;
pub const KPC: f64 = 3.0857e19;

// Times
pub const YEAR: f64 = 3.155693e7;

// Angles
pub const ARCSEC_PER_RADIAN: f64 = 206265.0;
pub const ARCMIN_PER_RADIAN: f64 = 3437.75;

pub fn mpc_to_meter(dist: f64) -> f64 {
    dist * MPC
}

pub fn kpc_to_meter(dist: f64) -> f64 {
    dist * KPC
}

pub fn meter_to_mpc(dist: f64) -> f64 {
    dist / MPC
}

pub fn meter_to_kpc(dist: f64) -> f64 {
    dist / KPC
}

pub fn radian_to_arcsec(ang: f64) -> f64 {
    ang * ARCSEC_PER_RADIAN
}

pub fn arcsec_to_radian(ang: f64) -> f64 {
    ang / ARCSEC_PER_RADIAN
}

pub fn radian_to_arcmin(ang: f64) -> f64 {
    ang * ARCMIN_PER_RADIAN
}

pub fn arcmin_to_radian(ang: f64) -> f64 {
    ang / ARCMIN_PER_RADIAN
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_distance_conversions() {
        assert_approx_eq!(meter_to_mpc(mpc_to_meter(2.5)), 2.5, 1e-12);
        assert_approx_eq!(kpc_to_meter(1.0) / mpc_to_meter(1.0), 1e-3, 1e-12);
        assert_approx_eq!(meter_to_kpc(PARSEC * 1000.0), 1.0, 1e-12);
    }

    #[test]
    fn test_angle_conversions() {
        assert_approx_eq!(radian_to_arcsec(arcsec_to_radian(1.0)), 1.0, 1e-12);
        // 60 arcsec to the arcminute, up to rounding in the tabulated factors
        assert_approx_eq!(radian_to_arcsec(1.0) / radian_to_arcmin(1.0), 60.0, 1e-3);
        assert_approx_eq!(arcmin_to_radian(ARCMIN_PER_RADIAN), 1.0, 1e-12);
    }
}
