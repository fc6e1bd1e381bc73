#![forbid(unsafe_code)]

//! pfd-edl
//!
//! Evaluates the analytical Poisson-Fermi-Dirac double-layer solution for
//! YAML parameter sets, prints the summary and writes φ(x) plots.

use anyhow::Result;
use clap::Parser;
use edl_cli::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing on stderr so stdout carries only the report
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    edl_cli::run::run(cli, &mut out)
}
