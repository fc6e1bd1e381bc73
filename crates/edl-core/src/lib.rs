//! Analytical Poisson-Fermi-Dirac double-layer model.
//!
//! solution: closed-form branches, surface charge, capacitance, x*
//! profile: sampled φ(x) and defect occupancies
//! report / sweep: printed summaries and one-parameter scans

pub mod profile;
pub mod report;
pub mod solution;
pub mod sweep;
