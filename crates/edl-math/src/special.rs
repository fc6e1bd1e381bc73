// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — Special Functions
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
//! Numerically stable forms of the expressions in the Fermi-Dirac
//! double-layer solution. B = alpha·exp(Ef0/kT) routinely reaches 1e10
//! and beyond, where the textbook forms cancel or overflow.

/// ln(e^a + e^b) without overflow.
pub fn log_add_exp(a: f64, b: f64) -> f64 {
    if a == f64::NEG_INFINITY {
        return b;
    }
    if b == f64::NEG_INFINITY {
        return a;
    }
    let hi = a.max(b);
    let lo = a.min(b);
    hi + (lo - hi).exp().ln_1p()
}

/// ln((e^f + b) / (1 + b)) for b >= 0.
pub fn ln_fd_ratio(f: f64, b: f64) -> f64 {
    debug_assert!(b >= 0.0, "ln_fd_ratio requires b >= 0, got {b}");
    let ln_1pb = b.ln_1p();
    if f > ln_1pb {
        // e^f dominates
        return f - ln_1pb + (b * (-f).exp()).ln_1p();
    }
    let ratio = f.exp_m1() / (1.0 + b);
    if ratio > -0.5 {
        ratio.ln_1p()
    } else {
        // both e^f and b small compared with 1
        log_add_exp(f, b.ln()) - ln_1pb
    }
}

/// artanh(e^(-z)). Infinite at z = 0, NaN for z < 0.
pub fn atanh_exp_neg(z: f64) -> f64 {
    if z.is_nan() || z < 0.0 {
        return f64::NAN;
    }
    if z == 0.0 {
        return f64::INFINITY;
    }
    let y = (-z).exp();
    if y < 0.5 {
        0.5 * (y.ln_1p() - (-y).ln_1p())
    } else {
        0.5 * (y.ln_1p() - (-(-z).exp_m1()).ln())
    }
}

/// Fermi-Dirac site occupancy 1 / (1 + e^t), evaluated without overflow.
pub fn fermi(t: f64) -> f64 {
    if t > 0.0 {
        let e = (-t).exp();
        e / (1.0 + e)
    } else {
        1.0 / (1.0 + t.exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_ratio(f: f64, b: f64) -> f64 {
        ((f.exp() + b) / (1.0 + b)).ln()
    }

    #[test]
    fn test_ln_fd_ratio_moderate_matches_naive() {
        for &b in &[0.0, 0.1, 1.0, 10.0, 1e3] {
            for &f in &[-5.0, -1.0, -0.1, 0.0, 0.3, 2.0, 8.0] {
                let got = ln_fd_ratio(f, b);
                let want = naive_ratio(f, b);
                assert!((got - want).abs() < 1e-12, "f={f} b={b}: {got} vs {want}");
            }
        }
    }

    #[test]
    fn test_ln_fd_ratio_zero_at_zero() {
        for &b in &[0.0, 1.0, 1e12, 1e200] {
            assert_eq!(ln_fd_ratio(0.0, b), 0.0);
        }
    }

    #[test]
    fn test_ln_fd_ratio_large_b_small_f() {
        // ln(1 + (e^f - 1)/(1+b)) ≈ (e^f - 1)/b for huge b
        let b = 1e15;
        let f = 0.5;
        let got = ln_fd_ratio(f, b);
        let want = f64::exp_m1(f) / (1.0 + b);
        assert!(((got - want) / want).abs() < 1e-12, "{got} vs {want}");
    }

    #[test]
    fn test_ln_fd_ratio_no_overflow() {
        let v = ln_fd_ratio(1000.0, 1e10);
        assert!(v.is_finite());
        assert!((v - (1000.0 - (1e10f64).ln_1p())).abs() < 1e-9);
    }

    #[test]
    fn test_ln_fd_ratio_b_zero_negative_f() {
        assert!((ln_fd_ratio(-50.0, 0.0) + 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_atanh_exp_neg_matches_direct() {
        for &z in &[0.05, 0.3, 1.0, 2.5, 10.0] {
            let direct = (-z as f64).exp().atanh();
            let got = atanh_exp_neg(z);
            assert!((got - direct).abs() < 1e-12 * direct.max(1.0), "z={z}");
        }
    }

    #[test]
    fn test_atanh_exp_neg_limits() {
        assert_eq!(atanh_exp_neg(0.0), f64::INFINITY);
        assert!(atanh_exp_neg(-1.0).is_nan());
        // z -> 0+: artanh(e^-z) ~ -ln(z/2)/2
        let z = 1e-12;
        assert!((atanh_exp_neg(z) + 0.5 * (z / 2.0).ln()).abs() < 1e-9);
        // z -> inf: artanh(y) ~ y
        let z = 60.0;
        let y = (-z as f64).exp();
        assert!(((atanh_exp_neg(z) - y) / y).abs() < 1e-14);
    }

    #[test]
    fn test_fermi_symmetry_and_range() {
        for &t in &[-800.0, -5.0, 0.0, 3.0, 800.0] {
            let p = fermi(t);
            assert!((0.0..=1.0).contains(&p));
            assert!((p + fermi(-t) - 1.0).abs() < 1e-15);
        }
        assert_eq!(fermi(0.0), 0.5);
    }
}
