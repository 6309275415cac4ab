//! percolation: estimate the site-percolation threshold of an `n × n` grid
//! from independent trials.
//!
//! ```bash
//! # 100 trials on a 200 × 200 grid
//! percolation -n 200 -t 100 --seed 1
//!
//! # Small grid, thresholds exported, JSON report
//! percolation -n 20 -t 5000 --samples-csv thresholds.csv --json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sp_core::PercolationParams;
use sp_montecarlo::{Histogram, LogProgress, MonteCarlo, MonteCarloResult};
use sp_output::{Samples, write_table_file};
use sp_percolation::{SQUARE_SITE_THRESHOLD, sample_threshold};

/// Percolation threshold estimate.
///
/// Each trial opens random sites of a blocked grid until the top row
/// connects to the bottom row, and records the fraction of open sites.
#[derive(Parser, Debug)]
#[command(name = "percolation")]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid side length (n)
    #[arg(short = 'n', long, default_value_t = 200)]
    grid_size: u32,

    /// JSON file holding the grid parameters. Overrides `--grid-size`.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Number of independent trials
    #[arg(short = 't', long, default_value_t = 100)]
    trials: usize,

    /// Random seed for reproducible results. When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Histogram bins for the threshold distribution
    #[arg(long, default_value_t = 20)]
    bins: usize,

    /// Write the per-trial thresholds to this CSV file (Sample)
    #[arg(long)]
    samples_csv: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    params:            &'a PercolationParams,
    lattice_threshold: f64,
    relative_error:    f64,
    monte_carlo:       MonteCarloResult,
    thresholds:        Histogram,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let params = load_params(&args)?;
    info!(n = params.grid_size, trials = args.trials, seed = ?args.seed, "parameters");

    let mut batch = MonteCarlo::new(args.trials);
    if let Some(seed) = args.seed {
        batch = batch.seed(seed);
    }
    let samples = batch.collect(
        |rng| sample_threshold(&params, rng),
        &LogProgress::new("percolation"),
    )?;

    let monte_carlo = MonteCarloResult::from_sample_set(&samples)?;
    let report = Report {
        params:            &params,
        lattice_threshold: SQUARE_SITE_THRESHOLD,
        relative_error:    monte_carlo.relative_error(SQUARE_SITE_THRESHOLD),
        monte_carlo,
        thresholds:        Histogram::from_samples(&samples.values, args.bins)?,
    };

    if let Some(file) = &args.samples_csv {
        write_table_file(&Samples(&samples.values), file)
            .with_context(|| format!("writing thresholds to {}", file.display()))?;
        info!(path = %file.display(), samples = samples.values.len(), "thresholds written");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn load_params(args: &Args) -> Result<PercolationParams> {
    match &args.params {
        Some(file) => read_params(file),
        None => Ok(PercolationParams::new(args.grid_size)?),
    }
}

fn read_params(file: &Path) -> Result<PercolationParams> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let params: PercolationParams = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", file.display()))?;
    params.validate()?;
    Ok(params)
}

fn print_report(report: &Report<'_>) {
    let mc = &report.monte_carlo;
    println!("── Percolation threshold ({n} × {n}, {t} trials) ──", n = report.params.grid_size, t = mc.sample_count);
    println!("Mean                    = {:.6}", mc.empirical_mean);
    println!("Standard deviation      = {:.6}", mc.empirical_std);
    println!("95% CI                  = [{:.6}, {:.6}]", mc.confidence_interval.0, mc.confidence_interval.1);
    println!("Infinite-lattice p*     = {:.6}", report.lattice_threshold);
    println!("Relative error vs p*    = {:.6}", report.relative_error);
    println!();
    println!("── Histogram of thresholds ──");
    let h = &report.thresholds;
    let peak = h.counts.iter().copied().max().unwrap_or(0).max(1);
    for (left, right, count) in h.bins() {
        let bar = "#".repeat(count * 50 / peak);
        println!("[{left:>9.4}, {right:>9.4})  {count:>6}  {bar}");
    }
}
