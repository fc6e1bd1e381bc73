// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — Analytical Solution
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
//! Analytical approximation to the Poisson-Fermi-Dirac equation.
//!
//! Distances are in Å, potentials in V. With ξ = x/λ and the reduced
//! potential f = (φ0 - φ)/kT the solution is stitched from two branches:
//!
//! - near the electrode (Eq. 12): f1(ξ) = f0 + f'0·ξ + ξ²/2, valid up to
//!   ξ1 = -f'0 where the parabola reaches its minimum;
//! - far field (Eq. 14): f2(ξ) = 4·artanh(exp(-√(2/B)·(ξ - c))), c = ξ1 - √2.
//!
//! f'0 comes from the first integral (f')²/2 = -U(f) with the Fermi-Dirac
//! energy U of Eq. 8.

use edl_math::roots::{brentq, BrentOptions};
use edl_math::special::{atanh_exp_neg, ln_fd_ratio};
use edl_types::config::MaterialParams;
use edl_types::constants::{
    DEBYE_PREFACTOR_ANGSTROM, E_PER_NM2_PER_V_TO_UF_PER_CM2, K_B_EV, SURFACE_CHARGE_PREFACTOR,
};
use edl_types::error::{EdlError, EdlResult};
use edl_types::state::{DerivedQuantities, DoubleLayerSummary};
use std::f64::consts::SQRT_2;

/// Lower bound of the x* search [Å].
pub const XSTAR_X_MIN: f64 = 0.0;

/// The x* search extends at least this far [Å].
pub const XSTAR_MIN_EXTENT: f64 = 1000.0;

/// Search interval for x* given the far-field length x2.
pub fn xstar_bracket(x2: f64) -> (f64, f64) {
    (XSTAR_X_MIN, x2.max(XSTAR_MIN_EXTENT))
}

/// Solved double layer for one parameter set.
#[derive(Debug, Clone)]
pub struct PfdSolution {
    params: MaterialParams,
    derived: DerivedQuantities,
    ln_b: f64,
    x1: f64,
    x2: f64,
}

impl PfdSolution {
    pub fn new(params: &MaterialParams) -> EdlResult<Self> {
        params.validate()?;

        let kt = K_B_EV * params.temperature;
        let ln_b = params.alpha.ln() + params.ef0 / kt;
        let b = ln_b.exp();
        if !b.is_finite() || b <= 0.0 {
            return Err(EdlError::invalid(
                "Ef0",
                params.ef0,
                &format!("B = alpha*exp(Ef0/kT) = exp({ln_b:.1}) is outside f64 range"),
            ));
        }

        let debye_length = DEBYE_PREFACTOR_ANGSTROM
            * (params.epsilon * params.temperature / (params.alpha * params.n_sites)).sqrt();
        let f0 = params.phi0 / kt;

        // Eq. 8
        let u0 = -ln_fd_ratio(f0, b) - ln_fd_ratio(-f0, b);
        // Eq. 9; rounding can leave U a hair above zero
        let fp0 = -(-2.0 * u0).max(0.0).sqrt();
        let xi1 = -fp0;
        // Eq. 15
        let c = xi1 - SQRT_2;

        let derived = DerivedQuantities {
            thermal_voltage: kt,
            b,
            debye_length,
            f0,
            u0,
            fp0,
            c,
        };
        let x1 = xi1 * debye_length;
        let x2 = (b / 2.0).sqrt() * debye_length;

        if params.phi0 < 0.0 {
            tracing::warn!(
                system = params.label(),
                phi0 = params.phi0,
                "negative phi0: branch construction assumes phi0 > 0"
            );
        }
        tracing::debug!(
            system = params.label(),
            kt,
            b,
            debye_length,
            f0,
            u0,
            fp0,
            x1,
            x2,
            "derived double-layer quantities"
        );

        Ok(PfdSolution {
            params: params.clone(),
            derived,
            ln_b,
            x1,
            x2,
        })
    }

    pub fn params(&self) -> &MaterialParams {
        &self.params
    }

    pub fn derived(&self) -> &DerivedQuantities {
        &self.derived
    }

    /// ln B, kept separately so occupancies never overflow.
    pub fn ln_b(&self) -> f64 {
        self.ln_b
    }

    /// End of the parabolic branch [Å].
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// √(B/2)·λ [Å].
    pub fn x2(&self) -> f64 {
        self.x2
    }

    fn xi(&self, x: f64) -> f64 {
        x / self.derived.debye_length
    }

    fn to_phi(&self, f: f64) -> f64 {
        self.params.phi0 - f * self.derived.thermal_voltage
    }

    /// Eq. 12 in reduced units.
    pub fn reduced_near(&self, x: f64) -> f64 {
        let xi = self.xi(x);
        self.derived.f0 + self.derived.fp0 * xi + 0.5 * xi * xi
    }

    /// Eq. 14 in reduced units. NaN for ξ < c.
    pub fn reduced_far(&self, x: f64) -> f64 {
        let xi = self.xi(x);
        4.0 * atanh_exp_neg((2.0 / self.derived.b).sqrt() * (xi - self.derived.c))
    }

    /// Reduced potential of the connected solution.
    pub fn reduced(&self, x: f64) -> f64 {
        if x <= self.x1 {
            self.reduced_near(x)
        } else {
            self.reduced_far(x)
        }
    }

    pub fn phi_near(&self, x: f64) -> f64 {
        self.to_phi(self.reduced_near(x))
    }

    pub fn phi_far(&self, x: f64) -> f64 {
        self.to_phi(self.reduced_far(x))
    }

    /// φ(x): parabolic branch up to x1, far-field branch beyond.
    pub fn phi(&self, x: f64) -> f64 {
        self.to_phi(self.reduced(x))
    }

    /// Potential step where the branches meet, φ2(x1) - φ1(x1) [V].
    pub fn branch_gap(&self) -> f64 {
        self.phi_far(self.x1) - self.phi_near(self.x1)
    }

    /// Eq. 11, surface charge [e/nm^2]. Carries the sign of f'0.
    pub fn surface_charge(&self) -> f64 {
        let p = &self.params;
        SURFACE_CHARGE_PREFACTOR
            * self.derived.fp0
            * (p.alpha * p.n_sites * p.temperature / p.epsilon).sqrt()
    }

    /// Areal capacitance |σ/φ0| [µF/cm^2].
    pub fn capacitance(&self) -> f64 {
        E_PER_NM2_PER_V_TO_UF_PER_CM2 * (self.surface_charge() / self.params.phi0).abs()
    }

    /// Position where φ(x) = target inside [0, max(x2, 1000 Å)].
    pub fn try_find_xstar(&self, target: f64) -> EdlResult<f64> {
        let (lo, hi) = xstar_bracket(self.x2);
        let result = brentq(|x| self.phi(x) - target, lo, hi, BrentOptions::default())?;
        tracing::debug!(
            system = self.params.label(),
            target,
            xstar = result.root,
            iterations = result.iterations,
            "located xstar"
        );
        Ok(result.root)
    }

    /// As [`try_find_xstar`](Self::try_find_xstar), `None` when φ - target
    /// does not change sign on the search interval.
    pub fn find_xstar(&self, target: f64) -> Option<f64> {
        match self.try_find_xstar(target) {
            Ok(x) => Some(x),
            Err(e) => {
                tracing::info!(system = self.params.label(), target, error = %e, "xstar not found");
                None
            }
        }
    }

    pub fn summary(&self) -> DoubleLayerSummary {
        let xstar = self.find_xstar(self.params.phi_target);
        DoubleLayerSummary {
            system: self.params.label().to_string(),
            x1: self.x1,
            phi_x1: self.phi(self.x1),
            x2: self.x2,
            phi_x2: self.phi(self.x2),
            phi_inf: self.params.phi0,
            sigma: self.surface_charge(),
            capacitance: self.capacitance(),
            xstar,
            phi_target: self.params.phi_target,
            branch_gap: self.branch_gap(),
            debye_length: self.derived.debye_length,
            b: self.derived.b,
        }
    }
}
