// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — Root Finding
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
//! Bracketed scalar root finding (Brent's method).
//!
//! Same iteration and stopping rule as `scipy.optimize.brentq`:
//! inverse quadratic / secant steps with a bisection fallback, terminating
//! when the bracket half-width drops below `(xtol + rtol·|x|)/2`.

use edl_types::error::{EdlError, EdlResult};

/// Tolerances for [`brentq`]. Defaults match scipy.
#[derive(Debug, Clone, Copy)]
pub struct BrentOptions {
    pub xtol: f64,
    pub rtol: f64,
    pub max_iter: usize,
}

impl Default for BrentOptions {
    fn default() -> Self {
        BrentOptions {
            xtol: 2e-12,
            rtol: 4.0 * f64::EPSILON,
            max_iter: 100,
        }
    }
}

/// Converged root and iteration count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    pub root: f64,
    pub iterations: usize,
}

/// Find a zero of `f` in `[a, b]`.
///
/// Requires `f(a)` and `f(b)` finite with opposite signs; an exact zero at
/// either end is returned without iterating.
pub fn brentq<F>(mut f: F, a: f64, b: f64, opts: BrentOptions) -> EdlResult<RootResult>
where
    F: FnMut(f64) -> f64,
{
    let mut xpre = a;
    let mut xcur = b;
    let mut fpre = f(xpre);
    let mut fcur = f(xcur);

    if !fpre.is_finite() || !fcur.is_finite() {
        return Err(EdlError::RootNotBracketed {
            a,
            b,
            fa: fpre,
            fb: fcur,
        });
    }
    if fpre == 0.0 {
        return Ok(RootResult { root: xpre, iterations: 0 });
    }
    if fcur == 0.0 {
        return Ok(RootResult { root: xcur, iterations: 0 });
    }
    if fpre.is_sign_negative() == fcur.is_sign_negative() {
        return Err(EdlError::RootNotBracketed {
            a,
            b,
            fa: fpre,
            fb: fcur,
        });
    }

    let mut xblk = 0.0;
    let mut fblk = 0.0;
    let mut spre = 0.0;
    let mut scur = 0.0;

    for iteration in 0..opts.max_iter {
        if fpre != 0.0 && fcur != 0.0 && fpre.is_sign_negative() != fcur.is_sign_negative() {
            xblk = xpre;
            fblk = fpre;
            spre = xcur - xpre;
            scur = spre;
        }
        if fblk.abs() < fcur.abs() {
            xpre = xcur;
            xcur = xblk;
            xblk = xpre;
            fpre = fcur;
            fcur = fblk;
            fblk = fpre;
        }

        let delta = (opts.xtol + opts.rtol * xcur.abs()) / 2.0;
        let sbis = (xblk - xcur) / 2.0;
        if fcur == 0.0 || sbis.abs() < delta {
            return Ok(RootResult {
                root: xcur,
                iterations: iteration,
            });
        }

        if spre.abs() > delta && fcur.abs() < fpre.abs() {
            let stry = if xpre == xblk {
                // secant
                -fcur * (xcur - xpre) / (fcur - fpre)
            } else {
                // inverse quadratic
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
            return Err(EdlError::RootNotConverged {
                iterations: iteration + 1,
                x: xcur,
            });
        }
    }

    Err(EdlError::RootNotConverged {
        iterations: opts.max_iter,
        x: xcur,
    })
}
