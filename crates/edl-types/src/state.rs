// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — State
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Quantities derived once from a parameter set.
/// Reduced potential f is measured from the bulk: φ = φ0 - f·kT.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedQuantities {
    pub thermal_voltage: f64, // kT/e [V]
    pub b: f64,               // alpha * exp(Ef0 / kT)
    pub debye_length: f64,    // λ [Å]
    pub f0: f64,              // φ0 / kT
    pub u0: f64,              // Eq. 8, U(f0) <= 0
    pub fp0: f64,             // Eq. 9, f'(0) <= 0
    pub c: f64,               // Eq. 15, far-field offset
}

/// Printed summary of one solved interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoubleLayerSummary {
    pub system: String,
    /// End of the parabolic branch [Å]
    pub x1: f64,
    pub phi_x1: f64,
    /// Far-field length √(B/2)·λ [Å]
    pub x2: f64,
    pub phi_x2: f64,
    pub phi_inf: f64,
    /// Surface charge [e/nm^2]
    pub sigma: f64,
    /// Areal capacitance [µF/cm^2]
    pub capacitance: f64,
    /// Position where φ = phi_target [Å], if bracketed
    pub xstar: Option<f64>,
    pub phi_target: f64,
    /// φ2(x1) - φ1(x1) [V]
    pub branch_gap: f64,
    pub debye_length: f64,
    pub b: f64,
}

/// Sampled potential and defect occupancy profiles.
#[derive(Debug, Clone)]
pub struct PotentialProfile {
    pub x: Array1<f64>,           // Distance from electrode [Å]
    pub phi: Array1<f64>,         // Potential [V]
    pub f: Array1<f64>,           // Reduced potential (φ0 - φ)/kT
    pub theta_plus: Array1<f64>,  // Site fraction of positive defects
    pub theta_minus: Array1<f64>, // Site fraction of negative defects
}

impl PotentialProfile {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Concentrations N·θ± [cm^-3].
    pub fn concentrations(&self, n_sites: f64) -> (Array1<f64>, Array1<f64>) {
        (&self.theta_plus * n_sites, &self.theta_minus * n_sites)
    }
}

/// Labelled point drawn on top of the profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub label: &'static str,
    pub x: f64,
    pub phi: f64,
}
