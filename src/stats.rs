use crate::error::{Error, Result};

/// Wilson score interval for a binomial proportion `p` estimated from `n`
/// trials, at `z` standard deviations. Returns `(lower, upper)`.
pub fn wilson_score(p: f64, n: u64, z: f64) -> Result<(f64, f64)> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::domain(format!("wilson_score: p = {} must be between 0 and 1", p)));
    }
    if n == 0 {
        return Err(Error::domain("wilson_score: n must be positive"));
    }
    if !(z >= 0.0 && z.is_finite()) {
        return Err(Error::domain(format!("wilson_score: z = {} must be non-negative", z)));
    }

    let n = n as f64;
    let z2 = z * z;
    let scale = 1.0 / (1.0 + z2 / n);
    let center = p + z2 / (2.0 * n);
    let spread = z * (p * (1.0 - p) / n + z2 / (4.0 * n * n)).sqrt();

    Ok((scale * (center - spread), scale * (center + spread)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_wilson_score() {
        let (lo, hi) = wilson_score(0.5, 100, 1.96).unwrap();
        assert_approx_eq!(lo, 0.40383, 1e-4);
        assert_approx_eq!(hi, 0.59617, 1e-4);

        let (lo, hi) = wilson_score(0.0, 10, 1.0).unwrap();
        assert_approx_eq!(lo, 0.0, 1e-15);
        assert!(hi > 0.0);

        assert_eq!(wilson_score(0.3, 50, 0.0).unwrap(), (0.3, 0.3));
    }

    #[test]
    fn test_wilson_score_invalid() {
        assert!(matches!(wilson_score(1.2, 10, 1.0), Err(Error::Domain(_))));
        assert!(matches!(wilson_score(0.5, 0, 1.0), Err(Error::Domain(_))));
        assert!(matches!(wilson_score(0.5, 10, -1.0), Err(Error::Domain(_))));
    }
}
