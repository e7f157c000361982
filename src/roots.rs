//! Bracketed root finding with Brent's method.

use crate::error::{Error, Result};
use tracing::{trace, warn};

#[derive(Debug, Clone)]
pub struct RootOptions {
    /// Absolute tolerance on the root.
    pub xtol: f64,
    /// Relative tolerance on the root.
    pub rtol: f64,
    pub max_iter: usize
}

impl Default for RootOptions {
    fn default() -> Self {
        RootOptions { xtol: 2e-12, rtol: 4.0 * f64::EPSILON, max_iter: 100 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    pub root: f64,
    pub function_value: f64,
    pub iterations: usize
}

#[inline]
fn same_sign(a: f64, b: f64) -> bool {
    (a > 0.0 && b > 0.0) || (a < 0.0 && b < 0.0)
}

/// Find a root of `f` in `[a, b]` to absolute accuracy `tolerance`.
pub fn find_root<F>(f: F, a: f64, b: f64, tolerance: f64) -> Result<f64>
    where F: Fn(f64) -> f64
{
    let opts = RootOptions { xtol: tolerance, ..RootOptions::default() };
    brentq(f, a, b, &opts).map(|r| r.root)
}

/// Brent's method: bisection, accelerated by secant or inverse quadratic
/// interpolation steps whenever they stay well inside the bracket.
///
/// `f(a)` and `f(b)` must differ in sign, or one of them must be exactly
/// zero, in which case that endpoint is returned.
pub fn brentq<F>(f: F, a: f64, b: f64, opts: &RootOptions) -> Result<Root>
    where F: Fn(f64) -> f64
{
    if !a.is_finite() || !b.is_finite() {
        return Err(Error::domain(format!("brentq: bracket [{}, {}] is not finite", a, b)));
    }
    if !(opts.xtol > 0.0) || opts.rtol < 0.0 {
        return Err(Error::domain(format!(
            "brentq: tolerances must be positive (xtol {}, rtol {})", opts.xtol, opts.rtol)));
    }

    let (mut xpre, mut xcur) = (a, b);
    let (mut fpre, mut fcur) = (f(xpre), f(xcur));

    if fpre.is_nan() || fcur.is_nan() {
        return Err(Error::precondition(format!(
            "brentq: f is not defined on the bracket ends (f({}) = {}, f({}) = {})", a, fpre, b, fcur)));
    }
    if fpre == 0.0 {
        return Ok(Root { root: xpre, function_value: fpre, iterations: 0 });
    }
    if fcur == 0.0 {
        return Ok(Root { root: xcur, function_value: fcur, iterations: 0 });
    }
    if same_sign(fpre, fcur) {
        return Err(Error::precondition(format!(
            "brentq: f({}) = {} and f({}) = {} do not bracket a root", a, fpre, b, fcur)));
    }

    // `blk` is the contrapoint: f(xblk) and f(xcur) always differ in sign.
    let (mut xblk, mut fblk) = (0.0, 0.0);
    let (mut spre, mut scur) = (0.0, 0.0);

    for iter in 0..opts.max_iter {
        if fpre != 0.0 && fcur != 0.0 && !same_sign(fpre, fcur) {
            xblk = xpre;
            fblk = fpre;
            spre = xcur - xpre;
            scur = spre;
        }
        if fblk.abs() < fcur.abs() {
            xpre = xcur; xcur = xblk; xblk = xpre;
            fpre = fcur; fcur = fblk; fblk = fpre;
        }

        let delta = 0.5 * (opts.xtol + opts.rtol * xcur.abs());
        let sbis = 0.5 * (xblk - xcur);
        if fcur == 0.0 || sbis.abs() < delta {
            trace!(root = xcur, iterations = iter, "brentq converged");
            return Ok(Root { root: xcur, function_value: fcur, iterations: iter });
        }

        if spre.abs() > delta && fcur.abs() < fpre.abs() {
            let stry = if xpre == xblk {
                // secant
                -fcur * (xcur - xpre) / (fcur - fpre)
            } else {
                // inverse quadratic interpolation
                let dpre = (fpre - fcur) / (xpre - xcur);
                let dblk = (fblk - fcur) / (xblk - xcur);
                -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
            };
            if 2.0 * stry.abs() < spre.abs().min(3.0 * sbis.abs() - delta) {
                spre = scur;
                scur = stry;
            } else {
                spre = sbis;
                scur = sbis;
            }
        } else {
            spre = sbis;
            scur = sbis;
        }

        xpre = xcur;
        fpre = fcur;
        if scur.abs() > delta {
            xcur += scur;
        } else {
            xcur += if sbis > 0.0 { delta } else { -delta };
        }
        fcur = f(xcur);
        if fcur.is_nan() {
            return Err(Error::convergence(
                format!("brentq: f({}) is NaN", xcur), iter + 1, opts.xtol));
        }
    }

    warn!(a, b, max_iter = opts.max_iter, "brentq iteration budget exhausted");
    Err(Error::convergence("brentq", opts.max_iter, opts.xtol))
}
