// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — Potential Plot
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
//! φ(x) on a logarithmic distance axis, written as SVG.

use edl_types::error::{EdlError, EdlResult};
use edl_types::state::{Marker, PotentialProfile};
use plotters::prelude::*;
use std::path::Path;

pub const PLOT_SIZE: (u32, u32) = (800, 600);

/// Fractional headroom above and below the data on the φ axis.
const Y_PAD: f64 = 0.05;

fn plot_err<E: std::fmt::Display>(e: E) -> EdlError {
    EdlError::Plot(e.to_string())
}

/// Padded (min, max) of the finite values; a flat series gets ±0.1 V.
fn y_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        return None;
    }
    let span = hi - lo;
    if span < 1e-12 {
        return Some((lo - 0.1, hi + 0.1));
    }
    Some((lo - Y_PAD * span, hi + Y_PAD * span))
}

/// Draw the profile and markers. The x axis spans the profile's own
/// positive range, so the plotting grid sets the axis limits.
pub fn plot_potential(
    profile: &PotentialProfile,
    markers: &[Marker],
    title: &str,
    path: &Path,
) -> EdlResult<()> {
    let points: Vec<(f64, f64)> = profile
        .x
        .iter()
        .zip(profile.phi.iter())
        .filter(|(x, phi)| **x > 0.0 && x.is_finite() && phi.is_finite())
        .map(|(&x, &phi)| (x, phi))
        .collect();
    let (first, last) = match (points.first(), points.last()) {
        (Some(a), Some(b)) if b.0 > a.0 => (a.0, b.0),
        _ => {
            return Err(EdlError::Plot(
                "profile needs at least two distinct positive x values".to_string(),
            ))
        }
    };
    let visible: Vec<&Marker> = markers
        .iter()
        .filter(|m| m.x >= first && m.x <= last && m.phi.is_finite())
        .collect();
    let (y_lo, y_hi) = y_range(
        points
            .iter()
            .map(|p| p.1)
            .chain(visible.iter().map(|m| m.phi)),
    )
    .ok_or_else(|| EdlError::Plot("no finite potential values".to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d((first..last).log_scale(), y_lo..y_hi)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("x (Å)")
        .y_desc("φ (V)")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(points, &BLUE))
        .map_err(plot_err)?;

    chart
        .draw_series(
            visible
                .iter()
                .map(|m| Cross::new((m.x, m.phi), 6, RED.stroke_width(2))),
        )
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    tracing::info!(path = %path.display(), markers = visible.len(), "wrote potential plot");
    Ok(())
}
