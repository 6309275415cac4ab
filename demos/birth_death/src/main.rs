//! birth-death: sample the bounded linear birth-death chain and compare the
//! Monte-Carlo mean of the final state with the closed form.
//!
//! ```bash
//! # One path plus 1 000 runs, reproducible
//! birth-death -n 15 --lambda 2 --mu 1 -x 5 -t 100 --seed 42
//!
//! # Parameters from a file, path exported for plotting
//! birth-death --params bd.json --csv birth_death_simulation.csv
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sp_birth_death::{expected_final_state, simulate, stationary_mean};
use sp_core::{BirthDeathParams, EventRng};
use sp_montecarlo::{Histogram, LogProgress, MonteCarlo, MonteCarloResult};
use sp_output::{Samples, write_table_file};

/// Birth-death process simulation.
///
/// Birth rate at state n is (N - n)·λ, death rate is n·μ.
#[derive(Parser, Debug)]
#[command(name = "birth-death")]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum population size (N). No births occur at N.
    #[arg(short = 'n', long, default_value_t = 15)]
    max_population: u32,

    /// Base birth rate (λ)
    #[arg(long = "lambda", default_value_t = 2.0)]
    birth_rate: f64,

    /// Base death rate (μ)
    #[arg(long = "mu", default_value_t = 1.0)]
    death_rate: f64,

    /// Initial number of individuals
    #[arg(short = 'x', long, default_value_t = 5)]
    initial_state: u32,

    /// Simulation end time (T)
    #[arg(short = 't', long, default_value_t = 100.0)]
    horizon: f64,

    /// JSON file holding the five model parameters. Overrides the flags above.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Number of simulations used to estimate the expected final state
    #[arg(short = 's', long, default_value_t = 1000)]
    simulations: usize,

    /// Random seed for reproducible results. When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Histogram bins for the final-state distribution
    #[arg(long, default_value_t = 20)]
    bins: usize,

    /// Write the single sample path to this CSV file (Time,State)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the Monte-Carlo final states to this CSV file (Sample)
    #[arg(long)]
    samples_csv: Option<PathBuf>,

    /// Print the Monte-Carlo report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    params:            &'a BirthDeathParams,
    /// `None` when the closed form is undefined (`λ = μ = 0`).
    theoretical_mean:  Option<f64>,
    stationary_mean:   Option<f64>,
    monte_carlo:       MonteCarloResult,
    covers_theory:     Option<bool>,
    final_states:      Histogram,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let params = load_params(&args)?;
    info!(
        n = params.max_population,
        lambda = params.birth_rate,
        mu = params.death_rate,
        x0 = params.initial_state,
        horizon = params.horizon,
        seed = ?args.seed,
        "parameters"
    );

    // Closed forms first, so a degenerate chain is reported before any work.
    let theoretical_mean = match expected_final_state(&params) {
        Ok(mean) => Some(mean),
        Err(err) => {
            warn!(%err, "no closed form for these parameters; reporting simulation only");
            None
        }
    };
    let stationary = stationary_mean(params.max_population, params.birth_rate, params.death_rate).ok();

    // ── Single path ───────────────────────────────────────────────────────
    let mut rng = args.seed.map_or_else(EventRng::from_entropy, EventRng::new);
    let path = simulate(&params, &mut rng);

    println!("── Simulation results ──");
    println!("Total events: {}", path.event_count());
    println!("Final state:  {}", path.final_state());

    if let Some(file) = &args.csv {
        write_table_file(&path, file)
            .with_context(|| format!("writing trajectory to {}", file.display()))?;
        info!(path = %file.display(), points = path.point_count(), "trajectory written");
    }

    // ── Multiple simulations ──────────────────────────────────────────────
    let mut batch = MonteCarlo::new(args.simulations);
    if let Some(seed) = args.seed {
        batch = batch.seed(seed);
    }
    let samples = batch.collect(
        |rng| f64::from(simulate(&params, rng).final_state()),
        &LogProgress::new("birth-death"),
    )?;

    let monte_carlo = MonteCarloResult::from_sample_set(&samples)?;
    let report = Report {
        params:           &params,
        theoretical_mean,
        stationary_mean:  stationary,
        monte_carlo,
        covers_theory:    theoretical_mean.map(|mean| monte_carlo.contains(mean)),
        final_states:     Histogram::from_samples(&samples.values, args.bins)?,
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

fn load_params(args: &Args) -> Result<BirthDeathParams> {
    match &args.params {
        Some(file) => read_params(file),
        None => Ok(BirthDeathParams::new(
            args.max_population,
            args.birth_rate,
            args.death_rate,
            args.initial_state,
            args.horizon,
        )?),
    }
}

fn read_params(file: &Path) -> Result<BirthDeathParams> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let params: BirthDeathParams = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", file.display()))?;
    params.validate()?;
    Ok(params)
}

fn print_report(report: &Report<'_>) {
    let mc = &report.monte_carlo;
    let p = report.params;
    println!();
    println!("── Expected number of individuals at time T ──");
    println!("Expected state at T = {} starting from state {}", p.horizon, p.initial_state);
    println!("Theoretical value:   {}", fmt_value(report.theoretical_mean));
    println!("Stationary mean:     {}", fmt_value(report.stationary_mean));
    println!();
    println!("Monte Carlo estimator with a 95% asymptotic confidence interval ({} runs)", mc.sample_count);
    println!("CI = [{:.10}, {:.10}]", mc.confidence_interval.0, mc.confidence_interval.1);
    println!("Empirical mean:      {:.10}", mc.empirical_mean);
    println!("Empirical std:       {:.6}", mc.empirical_std);
    let covered = match report.covers_theory {
        Some(true) => "yes",
        Some(false) => "no",
        None => "n/a",
    };
    println!("Theory inside CI:    {covered}");
    println!();
    println!("── Histogram of final states ──");
    print_histogram(&report.final_states);
}

fn fmt_value(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a (λ = μ = 0)".to_owned(), |v| format!("{v:.10}"))
}

fn print_histogram(h: &Histogram) {
    let peak = h.counts.iter().copied().max().unwrap_or(0).max(1);
    for (left, right, count) in h.bins() {
        let bar = "#".repeat(count * 50 / peak);
        println!("[{left:>9.3}, {right:>9.3})  {count:>6}  {bar}");
    }
}
