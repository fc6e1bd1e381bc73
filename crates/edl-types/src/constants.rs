// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — Constants
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
/// Boltzmann constant (eV/K), as used for the published results.
pub const K_B_EV: f64 = 0.0000861733;

/// λ = DEBYE_PREFACTOR_ANGSTROM * sqrt(epsilon * T / (alpha * N)), N in cm^-3, λ in Å.
pub const DEBYE_PREFACTOR_ANGSTROM: f64 = 6.90089807e8;

/// σ = SURFACE_CHARGE_PREFACTOR * f'(0) * sqrt(alpha * N * T / epsilon), σ in e/nm^2.
pub const SURFACE_CHARGE_PREFACTOR: f64 = 6.90089807e-14;

/// (e/nm^2) per V  →  µF/cm^2
pub const E_PER_NM2_PER_V_TO_UF_PER_CM2: f64 = 16.0218;

/// Elementary charge (C)
pub const Q_ELECTRON: f64 = 1.602176634e-19;

/// Boltzmann constant (J/K)
pub const K_BOLTZMANN: f64 = 1.380649e-23;

/// Vacuum permittivity (F/m)
pub const EPSILON_0: f64 = 8.8541878128e-12;
