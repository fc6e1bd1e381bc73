//! Diagnostic outputs for solved double layers.
//!
//! SVG potential plots and CSV / JSON exports of profiles, summaries
//! and sweeps.

pub mod export;
pub mod plot;
