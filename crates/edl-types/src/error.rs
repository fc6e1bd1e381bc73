// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — Errors
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdlError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    #[error("Root not bracketed on [{a}, {b}]: f(a) = {fa}, f(b) = {fb}")]
    RootNotBracketed { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("Root finder did not converge after {iterations} iterations (last x = {x})")]
    RootNotConverged { iterations: usize, x: f64 },

    #[error("Plot error: {0}")]
    Plot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type EdlResult<T> = Result<T, EdlError>;

impl EdlError {
    pub fn invalid(name: &str, value: f64, reason: &str) -> Self {
        EdlError::InvalidParameter {
            name: name.to_string(),
            value,
            reason: reason.to_string(),
        }
    }
}
