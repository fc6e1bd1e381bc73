// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — Grids
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
//! 1D sample grids. Conventions follow numpy: endpoints included,
//! a single point sits at the start.

use ndarray::Array1;

/// `n` evenly spaced values from `start` to `stop` inclusive.
pub fn linspace(start: f64, stop: f64, n: usize) -> Array1<f64> {
    let step = if n > 1 {
        (stop - start) / (n - 1) as f64
    } else {
        0.0
    };
    Array1::from_shape_fn(n, |i| {
        if n > 1 && i == n - 1 {
            stop
        } else {
            start + step * i as f64
        }
    })
}

/// `n` points from `10^start_exp` to `10^stop_exp`, evenly spaced in log10.
/// Matches `np.logspace(start_exp, stop_exp, num=n)`.
pub fn logspace(start_exp: f64, stop_exp: f64, n: usize) -> Array1<f64> {
    linspace(start_exp, stop_exp, n).mapv(|e| 10f64.powf(e))
}

/// `n` points geometrically spaced from `start` to `stop` (same sign, non-zero).
pub fn geomspace(start: f64, stop: f64, n: usize) -> Array1<f64> {
    let sign = start.signum();
    let lo = start.abs().log10();
    let hi = stop.abs().log10();
    let mut out = logspace(lo, hi, n).mapv(|v| sign * v);
    // Pin endpoints exactly
    if n > 0 {
        out[0] = start;
    }
    if n > 1 {
        out[n - 1] = stop;
    }
    out
}
