// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — CLI Commands
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
//! Command implementations. Reports go to `out`; logs go through tracing.

use crate::cli::{Cli, Command, SolveArgs, SweepArgs};
use anyhow::{bail, Context, Result};
use edl_core::profile::{markers, sample_default};
use edl_core::report::{detail_lines, summary_lines, sweep_table, xstar_line};
use edl_core::solution::PfdSolution;
use edl_core::sweep::{sweep, sweep_values, SweepPoint};
use edl_diagnostics::export::{write_profile_csv, write_summary_json, write_sweep_csv};
use edl_diagnostics::plot::plot_potential;
use edl_types::config::{parse_override, MaterialParams, ParameterLibrary};
use edl_types::state::DoubleLayerSummary;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Command::Solve(args) => solve(&args, out).map(|_| ()),
        Command::Sweep(args) => run_sweep(&args, out).map(|_| ()),
        Command::List { file } => list(&file, out),
    }
}

fn apply_overrides(params: &mut MaterialParams, overrides: &[String]) -> Result<()> {
    for spec in overrides {
        let (key, value) = parse_override(spec)?;
        params.set(&key, value)?;
        tracing::debug!(system = params.label(), key = %key, value, "parameter override");
    }
    Ok(())
}

/// `<dir>/<stem>[_<system>].<ext>`; the system suffix is added for
/// multi-system files only.
fn output_path(input: &Path, system: &str, multi: bool, out_dir: Option<&Path>, ext: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pfd".to_string());
    let base = if multi {
        format!("{stem}_{system}")
    } else {
        stem
    };
    let dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    dir.join(format!("{base}.{ext}"))
}

struct Job {
    file: PathBuf,
    params: MaterialParams,
    plot: Option<PathBuf>,
    csv: Option<PathBuf>,
}

/// Resolve every selected system and its output files. Two jobs writing the
/// same file is an error.
fn collect_jobs(args: &SolveArgs) -> Result<Vec<Job>> {
    let mut jobs = Vec::new();
    for file in &args.files {
        let lib = ParameterLibrary::from_file(file)
            .with_context(|| format!("reading parameters from {}", file.display()))?;
        let multi = lib.len() > 1;
        let selected = lib
            .select(args.system.as_deref())
            .with_context(|| format!("selecting system in {}", file.display()))?;
        for params in selected {
            let mut params = params.clone();
            apply_overrides(&mut params, &args.overrides)?;
            let out_dir = args.out_dir.as_deref();
            let plot = (!args.no_plot).then(|| match &args.plot {
                Some(path) => path.clone(),
                None => output_path(file, params.label(), multi, out_dir, "svg"),
            });
            let csv = args
                .csv
                .then(|| output_path(file, params.label(), multi, out_dir, "csv"));
            jobs.push(Job {
                file: file.clone(),
                params,
                plot,
                csv,
            });
        }
    }
    if args.plot.is_some() && jobs.len() != 1 {
        bail!(
            "--plot names a single file but {} systems were selected; use --out-dir",
            jobs.len()
        );
    }

    let mut claimed: HashMap<&Path, (&Path, &str)> = HashMap::new();
    for job in &jobs {
        for path in job.plot.iter().chain(job.csv.iter()) {
            let owner = (job.file.as_path(), job.params.label());
            if let Some((file, system)) = claimed.insert(path.as_path(), owner) {
                bail!(
                    "'{}' from {} and '{}' from {} would both write {}; \
                     rename an input or use separate --out-dir runs",
                    system,
                    file.display(),
                    job.params.label(),
                    job.file.display(),
                    path.display()
                );
            }
        }
    }
    Ok(jobs)
}

/// Solve every selected system, print its report and write outputs.
pub fn solve(args: &SolveArgs, out: &mut impl Write) -> Result<Vec<DoubleLayerSummary>> {
    let jobs = collect_jobs(args)?;
    let many = jobs.len() > 1;
    let mut summaries = Vec::with_capacity(jobs.len());

    for job in jobs {
        let label = job.params.label().to_string();
        let solution = PfdSolution::new(&job.params)
            .with_context(|| format!("solving '{label}' from {}", job.file.display()))?;
        let summary = solution.summary();

        if args.quiet {
            if summary.xstar.is_none() {
                writeln!(out, "{}", xstar_line(&summary))?;
            }
        } else {
            if many {
                writeln!(out, "== {label} ==")?;
            }
            for line in summary_lines(&summary) {
                writeln!(out, "{line}")?;
            }
            if args.details {
                for line in detail_lines(&summary) {
                    writeln!(out, "{line}")?;
                }
            }
        }

        if job.plot.is_some() || job.csv.is_some() {
            let profile = sample_default(&solution);
            if let Some(path) = &job.plot {
                plot_potential(&profile, &markers(&solution, summary.xstar), &label, path)?;
            }
            if let Some(path) = &job.csv {
                write_profile_csv(&profile, path)?;
            }
        }
        summaries.push(summary);
    }

    if let Some(path) = &args.json {
        write_summary_json(&summaries, path)?;
    }
    Ok(summaries)
}

/// Scan one parameter of a single system.
pub fn run_sweep(args: &SweepArgs, out: &mut impl Write) -> Result<Vec<SweepPoint>> {
    let lib = ParameterLibrary::from_file(&args.file)
        .with_context(|| format!("reading parameters from {}", args.file.display()))?;
    let selected = lib.select(args.system.as_deref())?;
    let mut base = match selected.as_slice() {
        [one] => (*one).clone(),
        _ => bail!(
            "{} defines {} systems ({}); pick one with --system",
            args.file.display(),
            lib.len(),
            lib.names().join(", ")
        ),
    };
    apply_overrides(&mut base, &args.overrides)?;

    let values = sweep_values(args.from, args.to, args.steps, args.log)?;
    let points = sweep(&base, &args.param, &values)?;
    for line in sweep_table(&args.param, &points) {
        writeln!(out, "{line}")?;
    }
    if let Some(path) = &args.out {
        write_sweep_csv(&args.param, &points, path)?;
    }
    Ok(points)
}

pub fn list(file: &Path, out: &mut impl Write) -> Result<()> {
    let lib = ParameterLibrary::from_file(file)
        .with_context(|| format!("reading parameters from {}", file.display()))?;
    for p in lib.iter() {
        writeln!(
            out,
            "{:<20} phi0 = {:7.3} V  T = {:6.1} K  Ef0 = {:6.3} eV  NSites = {:9.3e}",
            p.label(),
            p.phi0,
            p.temperature,
            p.ef0,
            p.n_sites
        )?;
    }
    Ok(())
}
