// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — Property-Based Tests (proptest) for edl-core
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for edl-core using proptest.
//!
//! Covers: boundary values of the connected potential, signs of the
//! derived quantities, x* consistency, occupancy bounds.

use edl_core::profile::{default_grid, sample};
use edl_core::solution::PfdSolution;
use edl_types::config::MaterialParams;
use proptest::prelude::*;

prop_compose! {
    fn material()(
        phi0 in 0.05f64..1.5,
        log_n in 19.0f64..23.0,
        ef0 in 0.0f64..1.2,
        epsilon in 2.0f64..60.0,
        alpha in 0.05f64..1.0,
        temperature in 200.0f64..1200.0,
        target_frac in 0.05f64..0.95,
    ) -> MaterialParams {
        MaterialParams {
            name: None,
            phi0,
            n_sites: 10f64.powf(log_n),
            ef0,
            epsilon,
            alpha,
            temperature,
            phi_target: phi0 * target_frac,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// U <= 0, f'0 <= 0, x1 >= 0 and σ <= 0 for every admissible set.
    #[test]
    fn derived_signs(p in material()) {
        let s = PfdSolution::new(&p).unwrap();
        let d = s.derived();
        prop_assert!(d.u0 <= 0.0, "U = {}", d.u0);
        prop_assert!(d.fp0 <= 0.0);
        prop_assert!(s.x1() >= 0.0);
        prop_assert!(s.x2() > 0.0);
        prop_assert!(s.surface_charge() <= 0.0);
        prop_assert!(s.capacitance() >= 0.0 && s.capacitance().is_finite());
    }

    /// φ(0) = 0 at the electrode and φ -> φ0 deep in the bulk.
    #[test]
    fn boundary_values(p in material()) {
        let s = PfdSolution::new(&p).unwrap();
        prop_assert!(s.phi(0.0).abs() < 1e-10, "phi(0) = {}", s.phi(0.0));
        let far = 1e6 * s.x2().max(s.derived().debye_length);
        prop_assert!((s.phi(far) - p.phi0).abs() < 1e-6, "phi(far) = {}", s.phi(far));
    }

    /// A located x* satisfies φ(x*) = target unless it sits on the branch junction.
    #[test]
    fn xstar_consistent(p in material()) {
        let s = PfdSolution::new(&p).unwrap();
        if let Some(x) = s.find_xstar(p.phi_target) {
            prop_assert!(x >= 0.0);
            let on_junction = (x - s.x1()).abs() <= 1e-9 * s.x1().max(1.0);
            if !on_junction {
                prop_assert!((s.phi(x) - p.phi_target).abs() < 1e-6,
                    "phi(x*) = {}, target = {}", s.phi(x), p.phi_target);
            }
        }
    }

    /// Sampled occupancies are fractions and the profile is finite.
    #[test]
    fn profile_finite_and_bounded(p in material()) {
        let s = PfdSolution::new(&p).unwrap();
        let prof = sample(&s, &default_grid());
        for i in 0..prof.len() {
            prop_assert!(prof.phi[i].is_finite());
            prop_assert!((0.0..=1.0).contains(&prof.theta_plus[i]));
            prop_assert!((0.0..=1.0).contains(&prof.theta_minus[i]));
        }
    }
}
