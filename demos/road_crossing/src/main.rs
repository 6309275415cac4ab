//! road-crossing: Poisson traffic, gaps between vehicles, and the first
//! moment a pedestrian can cross safely.
//!
//! ```bash
//! # One stream plus 1 000 first-crossing times
//! road-crossing --rate 1 --min-gap 2 --horizon 60 --seed 7
//!
//! # Reproduce the "gaps between vehicles only" variant and fail on misses
//! road-crossing --lead-in after-first-arrival --missing fail
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sp_core::{CrossingParams, EventRng};
use sp_crossing::{LeadIn, expected_first_crossing, first_crossing, simulate};
use sp_montecarlo::{Histogram, LogProgress, MissingPolicy, MonteCarlo, MonteCarloResult};
use sp_output::{Samples, write_table_file};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LeadInArg {
    /// The wait before the first vehicle counts as a gap
    FromOrigin,
    /// Only gaps between two vehicles count
    AfterFirstArrival,
}

impl From<LeadInArg> for LeadIn {
    fn from(arg: LeadInArg) -> Self {
        match arg {
            LeadInArg::FromOrigin => LeadIn::FromOrigin,
            LeadInArg::AfterFirstArrival => LeadIn::AfterFirstArrival,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum MissingArg {
    /// Leave runs without a crossing out of the statistics
    Exclude,
    /// Abort when any run has no crossing
    Fail,
}

impl From<MissingArg> for MissingPolicy {
    fn from(arg: MissingArg) -> Self {
        match arg {
            MissingArg::Exclude => MissingPolicy::Exclude,
            MissingArg::Fail => MissingPolicy::Fail,
        }
    }
}

/// Crossing the road safely.
///
/// Vehicles arrive as a Poisson stream; the pedestrian waits for a gap of at
/// least the minimum size.
#[derive(Parser, Debug)]
#[command(name = "road-crossing")]
#[command(version, about, long_about = None)]
struct Args {
    /// Vehicles per second (λ)
    #[arg(long, default_value_t = 1.0)]
    rate: f64,

    /// Minimum gap required to cross (S), in seconds
    #[arg(long, default_value_t = 2.0)]
    min_gap: f64,

    /// Total observed time, in seconds
    #[arg(long, default_value_t = 60.0)]
    horizon: f64,

    /// JSON file holding the three model parameters. Overrides the flags above.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Number of simulations for the first-crossing estimate
    #[arg(short = 's', long, default_value_t = 1000)]
    simulations: usize,

    /// Random seed for reproducible results. When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Whether the wait before the first vehicle counts as a gap
    #[arg(long, value_enum, default_value_t = LeadInArg::FromOrigin)]
    lead_in: LeadInArg,

    /// What to do with runs that see no safe gap before the horizon
    #[arg(long, value_enum, default_value_t = MissingArg::Exclude)]
    missing: MissingArg,

    /// Histogram bins for the gap distribution
    #[arg(long, default_value_t = 20)]
    bins: usize,

    /// Write the gaps of the single stream to this CSV file (Gap)
    #[arg(long)]
    gaps_csv: Option<PathBuf>,

    /// Write the Monte-Carlo first-crossing times to this CSV file (Sample)
    #[arg(long)]
    samples_csv: Option<PathBuf>,

    /// Print the Monte-Carlo report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    params:           &'a CrossingParams,
    theoretical_mean: f64,
    relative_error:   f64,
    monte_carlo:      MonteCarloResult,
    covers_theory:    bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let params = load_params(&args)?;
    let lead_in = LeadIn::from(args.lead_in);
    info!(
        rate = params.arrival_rate,
        min_gap = params.min_gap,
        horizon = params.horizon,
        ?lead_in,
        seed = ?args.seed,
        "parameters"
    );

    // ── Single stream ─────────────────────────────────────────────────────
    let mut rng = args.seed.map_or_else(EventRng::from_entropy, EventRng::new);
    let run = simulate(&params, &mut rng);

    println!("── Simulation results ──");
    println!(
        "Number of safe crossings: {} out of {} seconds",
        run.safe_crossings, params.horizon
    );
    match run.gaps.mean() {
        Some(mean) => println!("Average gap size: {mean:.2} seconds"),
        None => println!("Average gap size: n/a (fewer than two vehicles)"),
    }
    match run.first_safe_crossing(params.min_gap, lead_in) {
        Some(t) => println!("First safe crossing completes at {t:.2} seconds"),
        None => println!("No safe crossing in this stream"),
    }
    if !run.gaps.is_empty() {
        println!();
        println!("── Histogram of gap sizes ──");
        print_histogram(&Histogram::from_samples(run.gaps.as_slice(), args.bins)?);
    }

    if let Some(file) = &args.gaps_csv {
        write_table_file(&run.gaps, file)
            .with_context(|| format!("writing gaps to {}", file.display()))?;
        info!(path = %file.display(), gaps = run.gaps.len(), "gaps written");
    }

    // ── Multiple simulations ──────────────────────────────────────────────
    let mut batch = MonteCarlo::new(args.simulations).missing(args.missing.into());
    if let Some(seed) = args.seed {
        batch = batch.seed(seed);
    }
    let samples = batch.collect(
        |rng| first_crossing(&params, lead_in, rng),
        &LogProgress::new("road-crossing"),
    )?;

    let monte_carlo = MonteCarloResult::from_sample_set(&samples)?;
    let theoretical_mean = expected_first_crossing(params.arrival_rate, params.min_gap)?;
    let report = Report {
        params:           &params,
        theoretical_mean,
        relative_error:   monte_carlo.relative_error(theoretical_mean),
        monte_carlo,
        covers_theory:    monte_carlo.contains(theoretical_mean),
    };

    if let Some(file) = &args.samples_csv {
        write_table_file(&Samples(&samples.values), file)
            .with_context(|| format!("writing samples to {}", file.display()))?;
        info!(path = %file.display(), samples = samples.values.len(), "samples written");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn load_params(args: &Args) -> Result<CrossingParams> {
    match &args.params {
        Some(file) => read_params(file),
        None => Ok(CrossingParams::new(args.rate, args.min_gap, args.horizon)?),
    }
}

fn read_params(file: &Path) -> Result<CrossingParams> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let params: CrossingParams = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", file.display()))?;
    params.validate()?;
    Ok(params)
}

fn print_report(report: &Report<'_>) {
    let mc = &report.monte_carlo;
    println!();
    println!("── First crossing time ──");
    println!("Runs with a crossing: {} of {}", mc.sample_count, mc.requested);
    println!("Empirical mean:       {:.6}", mc.empirical_mean);
    println!("95% CI:               [{:.6}, {:.6}]", mc.confidence_interval.0, mc.confidence_interval.1);
    println!("Theoretical value:    {:.6}", report.theoretical_mean);
    println!("Relative error:       {:.6}", report.relative_error);
    println!("Theory inside CI:     {}", if report.covers_theory { "yes" } else { "no" });
}

fn print_histogram(h: &Histogram) {
    let peak = h.counts.iter().copied().max().unwrap_or(0).max(1);
    for (left, right, count) in h.bins() {
        let bar = "#".repeat(count * 50 / peak);
        println!("[{left:>9.3}, {right:>9.3})  {count:>6}  {bar}");
    }
}
