// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — Export
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
//! CSV and JSON exports.

use edl_core::sweep::SweepPoint;
use edl_types::error::EdlResult;
use edl_types::state::{DoubleLayerSummary, PotentialProfile};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ProfileRow {
    x_angstrom: f64,
    phi_volt: f64,
    f_reduced: f64,
    theta_plus: f64,
    theta_minus: f64,
}

fn ensure_parent(path: &Path) -> EdlResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// One row per grid point.
pub fn write_profile_csv(profile: &PotentialProfile, path: &Path) -> EdlResult<()> {
    ensure_parent(path)?;
    let mut wtr = csv::Writer::from_path(path)?;
    for i in 0..profile.len() {
        wtr.serialize(ProfileRow {
            x_angstrom: profile.x[i],
            phi_volt: profile.phi[i],
            f_reduced: profile.f[i],
            theta_plus: profile.theta_plus[i],
            theta_minus: profile.theta_minus[i],
        })?;
    }
    wtr.flush()?;
    tracing::info!(path = %path.display(), rows = profile.len(), "wrote profile CSV");
    Ok(())
}

/// Pretty-printed JSON array of summaries.
pub fn write_summary_json(summaries: &[DoubleLayerSummary], path: &Path) -> EdlResult<()> {
    ensure_parent(path)?;
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, summaries)?;
    tracing::info!(path = %path.display(), systems = summaries.len(), "wrote summary JSON");
    Ok(())
}

/// Sweep table; the first column is named after the swept key.
pub fn write_sweep_csv(key: &str, points: &[SweepPoint], path: &Path) -> EdlResult<()> {
    ensure_parent(path)?;
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record([
        key,
        "x1_angstrom",
        "x2_angstrom",
        "sigma_e_per_nm2",
        "capacitance_uf_per_cm2",
        "xstar_angstrom",
        "error",
    ])?;
    for point in points {
        let record = match &point.outcome {
            Ok(s) => vec![
                point.value.to_string(),
                s.x1.to_string(),
                s.x2.to_string(),
                s.sigma.to_string(),
                s.capacitance.to_string(),
                s.xstar.map(|x| x.to_string()).unwrap_or_default(),
                String::new(),
            ],
            Err(e) => {
                let mut row = vec![point.value.to_string()];
                row.extend(std::iter::repeat(String::new()).take(5));
                row.push(e.to_string());
                row
            }
        };
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    tracing::info!(path = %path.display(), rows = points.len(), "wrote sweep CSV");
    Ok(())
}
