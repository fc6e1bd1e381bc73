// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — Profiles
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
//! Sampled potential and defect occupancy profiles.
//!
//! Occupancies follow from the same Fermi-Dirac energy as Eq. 8:
//! θ+(f) = 1/(1 + B·e^(-f)), θ-(f) = 1/(1 + B·e^f), so that the net
//! dimensionless charge θ+ - θ- equals -dU/df = f''.

use crate::solution::PfdSolution;
use edl_math::grid::logspace;
use edl_math::special::fermi;
use edl_types::state::{Marker, PotentialProfile};
use ndarray::Array1;

/// Plot grid: 10^-1 .. 10^8 Å.
pub const PLOT_X_MIN_EXP: f64 = -1.0;
pub const PLOT_X_MAX_EXP: f64 = 8.0;
pub const PLOT_POINTS: usize = 200;

pub fn default_grid() -> Array1<f64> {
    logspace(PLOT_X_MIN_EXP, PLOT_X_MAX_EXP, PLOT_POINTS)
}

/// (θ+, θ-) at reduced potential `f`.
pub fn occupancies(solution: &PfdSolution, f: f64) -> (f64, f64) {
    let ln_b = solution.ln_b();
    (fermi(ln_b - f), fermi(ln_b + f))
}

/// Evaluate the connected solution on `xs` [Å].
pub fn sample(solution: &PfdSolution, xs: &Array1<f64>) -> PotentialProfile {
    let f = xs.mapv(|x| solution.reduced(x));
    let phi0 = solution.params().phi0;
    let kt = solution.derived().thermal_voltage;
    let phi = f.mapv(|fi| phi0 - fi * kt);
    let theta_plus = f.mapv(|fi| occupancies(solution, fi).0);
    let theta_minus = f.mapv(|fi| occupancies(solution, fi).1);
    PotentialProfile {
        x: xs.clone(),
        phi,
        f,
        theta_plus,
        theta_minus,
    }
}

/// Profile on the default plot grid.
pub fn sample_default(solution: &PfdSolution) -> PotentialProfile {
    sample(solution, &default_grid())
}

/// x1, x* (when found) and x2 with their potentials.
pub fn markers(solution: &PfdSolution, xstar: Option<f64>) -> Vec<Marker> {
    let mut out = vec![Marker {
        label: "x1",
        x: solution.x1(),
        phi: solution.phi(solution.x1()),
    }];
    if let Some(x) = xstar {
        out.push(Marker {
            label: "x*",
            x,
            phi: solution.phi(x),
        });
    }
    out.push(Marker {
        label: "x2",
        x: solution.x2(),
        phi: solution.phi(solution.x2()),
    });
    out
}
