//! Adaptive Gauss-Kronrod quadrature over finite and semi-infinite intervals.
//!
//! The interval with the largest error estimate is bisected until the summed
//! estimate drops below `max(atol, rtol * |value|)`. An infinite upper bound
//! is mapped onto `(0, 1]` by `x = lower + (1 - t) / t`.

use crate::error::{Error, Result};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct QuadOptions {
    pub atol: f64,
    pub rtol: f64,
    /// Maximum number of bisections.
    pub limit: usize
}

impl Default for QuadOptions {
    fn default() -> Self {
        QuadOptions { atol: 1e-12, rtol: 1e-10, limit: 500 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrature {
    pub value: f64,
    /// Estimated absolute error.
    pub error: f64,
    pub evaluations: usize,
    pub subdivisions: usize
}

impl Quadrature {
    fn zero() -> Self {
        Quadrature { value: 0.0, error: 0.0, evaluations: 0, subdivisions: 0 }
    }
}

/// Integrate `f` from `lower` to `upper`. `upper` may be `f64::INFINITY`.
///
/// The integrand is fallible so that domain errors raised while evaluating it
/// reach the caller unchanged.
pub fn integrate<F>(f: F, lower: f64, upper: f64, opts: &QuadOptions) -> Result<Quadrature>
    where F: Fn(f64) -> Result<f64>
{
    if !lower.is_finite() || upper.is_nan() || upper == f64::NEG_INFINITY {
        return Err(Error::domain(format!(
            "integrate: unsupported bounds [{}, {}]", lower, upper)));
    }
    if opts.limit == 0 {
        return Err(Error::domain("integrate: subdivision limit must be at least 1"));
    }
    if lower == upper {
        return Ok(Quadrature::zero());
    }

    if upper == f64::INFINITY {
        let g = |t: f64| -> Result<f64> {
            let x = lower + (1.0 - t) / t;
            Ok(f(x)? / (t * t))
        };
        return adaptive(&g, 0.0, 1.0, opts);
    }

    if upper < lower {
        let q = adaptive(&f, upper, lower, opts)?;
        return Ok(Quadrature { value: -q.value, ..q });
    }
    adaptive(&f, lower, upper, opts)
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64
}

fn adaptive<F>(f: &F, a: f64, b: f64, opts: &QuadOptions) -> Result<Quadrature>
    where F: Fn(f64) -> Result<f64>
{
    let mut segments = vec![gauss_kronrod_15(f, a, b, opts)?];
    let mut evaluations = 15;

    for subdivisions in 0..=opts.limit {
        let value: f64 = segments.iter().map(|s| s.value).sum();
        let error: f64 = segments.iter().map(|s| s.error).sum();

        if error <= opts.atol.max(opts.rtol * value.abs()) {
            debug!(a, b, value, error, subdivisions, "quadrature converged");
            return Ok(Quadrature { value, error, evaluations, subdivisions });
        }
        if subdivisions == opts.limit {
            break;
        }

        let mut worst = 0;
        for (i, s) in segments.iter().enumerate() {
            if s.error > segments[worst].error { worst = i; }
        }
        let Segment { a: sa, b: sb, .. } = segments.swap_remove(worst);
        let mid = 0.5 * (sa + sb);
        if !(sa < mid && mid < sb) {
            warn!(a = sa, b = sb, error, "quadrature interval too narrow to bisect");
            return Err(Error::convergence(
                format!("integrate: cannot bisect [{:e}, {:e}] further", sa, sb),
                subdivisions, opts.rtol));
        }

        segments.push(gauss_kronrod_15(f, sa, mid, opts)?);
        segments.push(gauss_kronrod_15(f, mid, sb, opts)?);
        evaluations += 30;
    }

    warn!(a, b, limit = opts.limit, "quadrature subdivision limit reached");
    Err(Error::convergence("integrate", opts.limit, opts.rtol))
}

// Kronrod abscissae on [0, 1]; odd indices are the 7-point Gauss nodes.
const XGK: [f64; 8] = [
    0.991455371120812639206854697526329,
    0.949107912342758524526189684047851,
    0.864864423359769072789712788640926,
    0.741531185599394439863864773280788,
    0.586087235467691130294144845693013,
    0.405845151377397166906606412076961,
    0.207784955007898467600689403773245,
    0.000000000000000000000000000000000
];

const WGK: [f64; 8] = [
    0.022935322010529224963732008058970,
    0.063092092629978553290700663189204,
    0.104790010322250183839876322541518,
    0.140653259715525918745189590510238,
    0.169004726639267902826583426598550,
    0.190350578064785409913256402421014,
    0.204432940075298892414161999234649,
    0.209482141084727828012999174891714
];

const WG: [f64; 4] = [
    0.129484966168869693270611432679082,
    0.279705391489276667901467771423780,
    0.381830050505118944950369775488975,
    0.417959183673469387755102040816327
];

fn gauss_kronrod_15<F>(f: &F, a: f64, b: f64, opts: &QuadOptions) -> Result<Segment>
    where F: Fn(f64) -> Result<f64>
{
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let eval = |x: f64| -> Result<f64> {
        let y = f(x)?;
        if y.is_finite() {
            Ok(y)
        } else {
            Err(Error::convergence(
                format!("integrate: singular integrand at x = {:e}", x), 0, opts.rtol))
        }
    };

    let fc = eval(center)?;
    let mut kronrod = WGK[7] * fc;
    let mut gauss = WG[3] * fc;
    for j in 0..7 {
        let dx = half * XGK[j];
        let pair = eval(center - dx)? + eval(center + dx)?;
        kronrod += WGK[j] * pair;
        if j % 2 == 1 {
            gauss += WG[j / 2] * pair;
        }
    }

    Ok(Segment {
        a, b,
        value: kronrod * half,
        error: ((kronrod - gauss) * half).abs()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::PI;

    fn quad<F: Fn(f64) -> f64>(f: F, a: f64, b: f64) -> Result<Quadrature> {
        integrate(|x| Ok(f(x)), a, b, &QuadOptions::default())
    }

    #[test]
    fn test_polynomial() {
        let q = quad(|x| 3.0 * x * x + 1.0, 0.0, 2.0).unwrap();
        assert_approx_eq!(q.value, 10.0, 1e-12);
        assert_eq!(q.subdivisions, 0);
    }

    #[test]
    fn test_sine() {
        let q = quad(|x| x.sin(), 0.0, PI).unwrap();
        assert_approx_eq!(q.value, 2.0, 1e-10);
        assert!(q.error < 1e-9);
    }

    #[test]
    fn test_reversed_and_empty() {
        let q = quad(|x| x.exp(), 1.0, 0.0).unwrap();
        assert_approx_eq!(q.value, 1.0 - std::f64::consts::E, 1e-10);

        let q = quad(|_| panic!("integrand must not be evaluated"), 3.0, 3.0).unwrap();
        assert_eq!(q.value, 0.0);
        assert_eq!(q.error, 0.0);
    }

    #[test]
    fn test_semi_infinite() {
        let q = quad(|x| (-x).exp(), 0.0, f64::INFINITY).unwrap();
        assert_approx_eq!(q.value, 1.0, 1e-9);

        let q = quad(|x| 1.0 / (1.0 + x * x), 0.0, f64::INFINITY).unwrap();
        assert_approx_eq!(q.value, PI / 2.0, 1e-9);

        // slowly decaying tail, x^-3/2
        let q = quad(|x| x.powf(-1.5), 1.0, f64::INFINITY).unwrap();
        assert_approx_eq!(q.value, 2.0, 1e-8);
    }

    #[test]
    fn test_nonconvergent() {
        match quad(|x| 1.0 / x, 0.0, 1.0) {
            Err(Error::Convergence { .. }) => (),
            other => panic!("expected convergence failure, got {:?}", other)
        }
        match quad(|x| (x - 2.0).sqrt(), 0.0, 1.0) {
            Err(Error::Convergence { context, .. }) => assert!(context.contains("singular")),
            other => panic!("expected convergence failure, got {:?}", other)
        }
    }

    #[test]
    fn test_integrand_error_propagates() {
        let r = integrate(|x| if x > 0.5 { Err(Error::domain("too big")) } else { Ok(x) },
                          0.0, 1.0, &QuadOptions::default());
        assert_eq!(r, Err(Error::domain("too big")));
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(matches!(quad(|x| x, f64::NEG_INFINITY, 0.0), Err(Error::Domain(_))));
        assert!(matches!(quad(|x| x, 0.0, f64::NAN), Err(Error::Domain(_))));
        let opts = QuadOptions { limit: 0, ..QuadOptions::default() };
        assert!(matches!(integrate(|x| Ok(x), 0.0, 1.0, &opts), Err(Error::Domain(_))));
    }
}
