// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — Property-Based Tests (proptest) for edl-math
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for edl-math using proptest.
//!
//! Covers: Brent root finder, log-spaced grids, Fermi-Dirac ratio and
//! artanh helpers.

use edl_math::grid::{linspace, logspace};
use edl_math::roots::{brentq, BrentOptions};
use edl_math::special::{atanh_exp_neg, fermi, ln_fd_ratio};
use proptest::prelude::*;

// ── Brent Properties ─────────────────────────────────────────────────

proptest! {
    /// A cubic with a single real root in the bracket is solved to xtol.
    #[test]
    fn brentq_finds_cubic_root(root in -50.0f64..50.0, scale in 0.1f64..10.0) {
        let f = |x: f64| scale * (x - root).powi(3) + (x - root);
        let r = brentq(f, -100.0, 100.0, BrentOptions::default()).unwrap();
        prop_assert!((r.root - root).abs() < 1e-9,
            "root = {}, expected {}", r.root, root);
    }

    /// The returned root always lies inside the bracket.
    #[test]
    fn brentq_root_inside_bracket(a in -10.0f64..-0.1, b in 0.1f64..10.0, shift in -0.09f64..0.09) {
        let r = brentq(|x| (x - shift).tanh(), a, b, BrentOptions::default()).unwrap();
        prop_assert!(r.root >= a && r.root <= b);
        prop_assert!((r.root - shift).abs() < 1e-10);
    }

    /// Same-sign endpoints are always rejected.
    #[test]
    fn brentq_rejects_unbracketed(a in -10.0f64..0.0, width in 0.1f64..10.0, c in 0.1f64..5.0) {
        let res = brentq(|x| x * x + c, a, a + width, BrentOptions::default());
        prop_assert!(res.is_err());
    }
}

// ── Grid Properties ──────────────────────────────────────────────────

proptest! {
    /// linspace has n points, exact endpoints and is monotone.
    #[test]
    fn linspace_monotone(start in -100.0f64..100.0, span in 0.01f64..100.0, n in 2usize..500) {
        let x = linspace(start, start + span, n);
        prop_assert_eq!(x.len(), n);
        prop_assert_eq!(x[0], start);
        prop_assert_eq!(x[n - 1], start + span);
        for i in 1..n {
            prop_assert!(x[i] > x[i - 1]);
        }
    }

    /// logspace values are positive and strictly increasing.
    #[test]
    fn logspace_positive_increasing(lo in -5.0f64..0.0, hi in 1.0f64..10.0, n in 2usize..300) {
        let x = logspace(lo, hi, n);
        for i in 0..n {
            prop_assert!(x[i] > 0.0);
            if i > 0 {
                prop_assert!(x[i] > x[i - 1]);
            }
        }
    }
}

// ── Special Function Properties ──────────────────────────────────────

proptest! {
    /// ln((e^f + B)/(1 + B)) has the sign of f and is bounded by |f|.
    #[test]
    fn fd_ratio_sign_and_bound(f in -40.0f64..40.0, log_b in -5.0f64..40.0) {
        let b = 10f64.powf(log_b);
        let v = ln_fd_ratio(f, b);
        prop_assert!(v.is_finite());
        prop_assert!(v * f >= 0.0, "sign mismatch: f = {}, v = {}", f, v);
        prop_assert!(v.abs() <= f.abs() * (1.0 + 1e-12) + 1e-300);
    }

    /// U(f) = -ln_fd_ratio(f) - ln_fd_ratio(-f) is never positive.
    #[test]
    fn potential_energy_nonpositive(f in -60.0f64..60.0, log_b in -3.0f64..30.0) {
        let b = 10f64.powf(log_b);
        let u = -ln_fd_ratio(f, b) - ln_fd_ratio(-f, b);
        prop_assert!(u <= 1e-15, "U = {} for f = {}, B = {}", u, f, b);
    }

    /// artanh(e^-z) decreases monotonically in z.
    #[test]
    fn atanh_exp_neg_decreasing(z in 1e-6f64..50.0, dz in 1e-3f64..5.0) {
        prop_assert!(atanh_exp_neg(z) > atanh_exp_neg(z + dz));
        prop_assert!(atanh_exp_neg(z) > 0.0);
    }

    /// Occupancies stay in [0, 1].
    #[test]
    fn fermi_bounded(t in -1000.0f64..1000.0) {
        let p = fermi(t);
        prop_assert!((0.0..=1.0).contains(&p));
    }
}
