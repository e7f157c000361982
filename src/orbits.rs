use crate::error::{Error, Result};
use crate::roots::{brentq, RootOptions};

use std::f64::consts::PI;
use tracing::debug;

/// Kepler's equation, `M = E - e sin E`.
pub fn mean_anomaly(e: f64, ecc_anomaly: f64) -> f64 {
    ecc_anomaly - e * ecc_anomaly.sin()
}

/// Eccentric anomaly from the mean anomaly `m` of an elliptic orbit with
/// eccentricity `e`. Both angles are in radians on `[0, 2π]`.
pub fn eccentric_anomaly(e: f64, m: f64) -> Result<f64> {
    if !(m >= 0.0 && m <= 2.0 * PI) {
        debug!(m, "rejected mean anomaly");
        return Err(Error::domain("mean anomaly must be an angle between 0 and 2π"));
    }
    if !(e >= 0.0 && e < 1.0) {
        return Err(Error::domain(format!("eccentricity {} is not that of a bound orbit", e)));
    }

    // monotonic in E for e < 1, so [0, 2π] holds exactly one root
    let r = brentq(|x| mean_anomaly(e, x) - m, 0.0, 2.0 * PI, &RootOptions::default())?;
    Ok(r.root)
}

/// True anomaly from the eccentric anomaly, on the same half-plane.
pub fn true_anomaly(e: f64, ecc_anomaly: f64) -> Result<f64> {
    if !(e >= 0.0 && e < 1.0) {
        return Err(Error::domain(format!("eccentricity {} is not that of a bound orbit", e)));
    }
    let half = ecc_anomaly / 2.0;
    let nu = 2.0 * ((1.0 + e).sqrt() * half.sin()).atan2((1.0 - e).sqrt() * half.cos());
    Ok(if nu < 0.0 { nu + 2.0 * PI } else { nu })
}
