// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — CLI Arguments
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Analytical Poisson-Fermi-Dirac double-layer profiles
#[derive(Parser, Debug)]
#[command(name = "pfd-edl", author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve every parameter set in the given files, print and plot
    Solve(SolveArgs),
    /// Re-solve one system while scanning a single parameter
    Sweep(SweepArgs),
    /// List the systems defined in a parameter file
    List {
        /// YAML parameter file
        file: PathBuf,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SolveArgs {
    /// YAML parameter files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only solve this system of a multi-system file
    #[arg(long)]
    pub system: Option<String>,

    /// Override a parameter, e.g. --set T=400
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Plot path (single system only); defaults to <stem>.svg beside the input
    #[arg(long, conflicts_with = "no_plot")]
    pub plot: Option<PathBuf>,

    /// Skip the plot
    #[arg(long)]
    pub no_plot: bool,

    /// Also write the sampled profile as <stem>.csv
    #[arg(long)]
    pub csv: bool,

    /// Write all summaries to this JSON file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Directory for generated files instead of the input's directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print only the x* failure notice
    #[arg(short, long)]
    pub quiet: bool,

    /// Also print λ, B and the branch gap at x1
    #[arg(long)]
    pub details: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    /// YAML parameter file
    pub file: PathBuf,

    /// System to sweep when the file defines several
    #[arg(long)]
    pub system: Option<String>,

    /// Parameter key to scan (phi0, NSites, Ef0, epsilon, alpha, T, phi_target)
    #[arg(long)]
    pub param: String,

    /// First value
    #[arg(long, allow_hyphen_values = true)]
    pub from: f64,

    /// Last value
    #[arg(long, allow_hyphen_values = true)]
    pub to: f64,

    /// Number of values
    #[arg(long, default_value_t = 10)]
    pub steps: usize,

    /// Space values geometrically
    #[arg(long)]
    pub log: bool,

    /// Override other parameters first, e.g. --set Ef0=0.5
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Write the table as CSV
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solve() {
        let cli = Cli::try_parse_from([
            "pfd-edl", "solve", "a.yaml", "b.yaml", "--set", "T=400", "--set", "phi0=0.3",
            "--no-plot", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Solve(args) => {
                assert_eq!(args.files.len(), 2);
                assert_eq!(args.overrides, vec!["T=400", "phi0=0.3"]);
                assert!(args.no_plot);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_solve_requires_file() {
        assert!(Cli::try_parse_from(["pfd-edl", "solve"]).is_err());
    }

    #[test]
    fn test_plot_conflicts_with_no_plot() {
        assert!(
            Cli::try_parse_from(["pfd-edl", "solve", "a.yaml", "--plot", "x.svg", "--no-plot"])
                .is_err()
        );
    }

    #[test]
    fn test_parse_sweep_negative_bounds() {
        let cli = Cli::try_parse_from([
            "pfd-edl", "sweep", "a.yaml", "--param", "phi0", "--from", "-1.0", "--to", "-0.1",
            "--steps", "5",
        ])
        .unwrap();
        match cli.command {
            Command::Sweep(args) => {
                assert_eq!(args.from, -1.0);
                assert_eq!(args.to, -0.1);
                assert_eq!(args.steps, 5);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
