// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — Parameter Sweeps
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
//! One-parameter scans of the analytical solution.

use crate::solution::PfdSolution;
use edl_math::grid::{geomspace, linspace};
use edl_types::config::MaterialParams;
use edl_types::error::{EdlError, EdlResult};
use edl_types::state::DoubleLayerSummary;

/// Result for one swept value. Invalid points keep their error.
#[derive(Debug)]
pub struct SweepPoint {
    pub value: f64,
    pub outcome: EdlResult<DoubleLayerSummary>,
}

/// Sweep values from `from` to `to`, geometric when `log` is set.
pub fn sweep_values(from: f64, to: f64, steps: usize, log: bool) -> EdlResult<Vec<f64>> {
    if steps == 0 {
        return Err(EdlError::ConfigError("sweep needs at least one step".to_string()));
    }
    if !from.is_finite() || !to.is_finite() {
        return Err(EdlError::ConfigError("sweep bounds must be finite".to_string()));
    }
    if log {
        if from == 0.0 || to == 0.0 || from.signum() != to.signum() {
            return Err(EdlError::ConfigError(
                "log sweep bounds must be non-zero and share a sign".to_string(),
            ));
        }
        Ok(geomspace(from, to, steps).to_vec())
    } else {
        Ok(linspace(from, to, steps).to_vec())
    }
}

/// Solve `base` once per value with `key` overridden.
///
/// Fails only for an unknown key; per-point failures land in the
/// returned rows.
pub fn sweep(base: &MaterialParams, key: &str, values: &[f64]) -> EdlResult<Vec<SweepPoint>> {
    base.get(key)?;
    let mut points = Vec::with_capacity(values.len());
    for &value in values {
        let mut params = base.clone();
        params.set(key, value)?;
        let outcome = PfdSolution::new(&params).map(|s| s.summary());
        if let Err(e) = &outcome {
            tracing::warn!(system = base.label(), key, value, error = %e, "sweep point failed");
        }
        points.push(SweepPoint { value, outcome });
    }
    tracing::info!(
        system = base.label(),
        key,
        points = points.len(),
        failed = points.iter().filter(|p| p.outcome.is_err()).count(),
        "sweep finished"
    );
    Ok(points)
}
