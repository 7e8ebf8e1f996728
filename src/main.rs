use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use tracing::info;

use correa_dca::{DcaConfig, ThresholdGrid};
use correa_io::{CohortName, CohortReader, TableWriter};

#[derive(Parser)]
#[command(name = "correa")]
#[command(about = "Decision-curve analysis for the Correa cascade classifier")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Number of threads for parallel computation (defaults to all cores)
    #[arg(long, global = true)]
    threads: Option<usize>,
}

/// Threshold grid swept by the decision curve.
#[derive(Args, Debug, Clone)]
struct GridArgs {
    /// First threshold (must be > 0)
    #[arg(long, default_value_t = 0.01)]
    grid_start: f64,

    /// Last threshold (must be < 1)
    #[arg(long, default_value_t = 0.99)]
    grid_end: f64,

    /// Spacing between thresholds
    #[arg(long, default_value_t = 0.01)]
    grid_step: f64,
}

#[derive(Subcommand)]
enum Command {
    /// Compute decision-curve tables for one or more validation cohorts
    Dca {
        /// Cohort to evaluate as NAME=PATH (repeatable; NAME must match [a-zA-Z0-9_-]+)
        #[arg(long = "cohort", required = true, value_parser = parse_cohort_arg)]
        cohorts: Vec<CohortArg>,

        /// Class index treated as the positive outcome (4 = GC)
        #[arg(long, default_value_t = 4)]
        positive_class: usize,

        /// Name of the observed-label column in each cohort CSV
        #[arg(long, default_value = "label")]
        label_column: String,

        /// Output directory for result files
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        #[command(flatten)]
        grid: GridArgs,
    },
}

/// A `NAME=PATH` cohort argument.
#[derive(Debug, Clone, PartialEq)]
struct CohortArg {
    name: String,
    path: PathBuf,
}

fn parse_cohort_arg(s: &str) -> Result<CohortArg, String> {
    match s.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => Ok(CohortArg {
            name: name.to_string(),
            path: PathBuf::from(path),
        }),
        _ => Err(format!("expected NAME=PATH, got \"{s}\"")),
    }
}

// --- JSON stdout output structs ---

#[derive(Serialize)]
struct DcaOutput {
    positive_class: usize,
    n_thresholds: usize,
    cohorts: Vec<CohortOutput>,
}

#[derive(Serialize)]
struct CohortOutput {
    cohort: String,
    n_cases: usize,
    prevalence: f64,
    n_useful_thresholds: usize,
    best_threshold: Option<f64>,
    best_net_benefit_model: Option<f64>,
    table: PathBuf,
    summary: PathBuf,
}

fn evaluate_cohort(
    name: &CohortName,
    path: &Path,
    label_column: &str,
    config: &DcaConfig,
    output_dir: &Path,
) -> Result<CohortOutput> {
    let cohort = CohortReader::new(path)
        .with_label_column(label_column)
        .read()
        .with_context(|| format!("failed to read cohort {name}"))?;

    let table = config
        .build_table(cohort.labels(), cohort.probabilities())
        .with_context(|| format!("decision curve failed for cohort {name}"))?;

    let writer = TableWriter::new(output_dir, name.clone())?;
    let table_path = writer.write_csv(&table)?;
    let summary_path = writer.write_summary(&table)?;

    let best = table.max_model_net_benefit();
    info!(
        cohort = %name,
        n_cases = table.n_cases(),
        prevalence = table.prevalence(),
        "cohort evaluated"
    );

    Ok(CohortOutput {
        cohort: name.to_string(),
        n_cases: table.n_cases(),
        prevalence: table.prevalence(),
        n_useful_thresholds: table.useful_thresholds().len(),
        best_threshold: best.map(|r| r.threshold),
        best_net_benefit_model: best.map(|r| r.net_benefit_model),
        table: table_path,
        summary: summary_path,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure thread pool")?;
        info!(threads, "thread pool configured");
    }

    match cli.command {
        Command::Dca {
            cohorts,
            positive_class,
            label_column,
            output_dir,
            grid,
        } => {
            let threshold_grid = ThresholdGrid::new(grid.grid_start, grid.grid_end, grid.grid_step)
                .context("invalid threshold grid")?;
            let config = DcaConfig::new(positive_class).with_grid(threshold_grid);
            info!(positive_class, n_thresholds = config.grid().len(), "configuration ready");

            // Validate every name up front; duplicates would overwrite each other's files.
            let mut seen = HashSet::new();
            let named = cohorts
                .into_iter()
                .map(|arg| {
                    if !seen.insert(arg.name.clone()) {
                        anyhow::bail!("cohort name \"{}\" given more than once", arg.name);
                    }
                    Ok((CohortName::new(arg.name)?, arg.path))
                })
                .collect::<Result<Vec<_>>>()?;

            let results = named
                .par_iter()
                .map(|(name, path)| {
                    evaluate_cohort(name, path, &label_column, &config, &output_dir)
                })
                .collect::<Result<Vec<_>>>()?;

            let output = DcaOutput {
                positive_class,
                n_thresholds: config.grid().len(),
                cohorts: results,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
