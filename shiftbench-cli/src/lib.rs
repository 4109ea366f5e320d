#![warn(missing_docs)]
//! Shiftbench CLI
//!
//! Driver for the insertion sort benchmark harness. `shiftbench run`
//! performs the configured warm-up passes and the measured pass, writes
//! one raw data file per sort variant, and prints the per-size summary
//! tables. `shiftbench report` aggregates a previously written raw data
//! file.
//!
//! Configuration comes from `shiftbench.toml` (discovered by walking up
//! from the current directory), overridden by CLI flags.

mod config;
mod dataset;
mod runner;
mod statistics;

pub use config::{BenchConfig, OutputConfig, RunnerConfig};
pub use dataset::generate_dataset;
pub use runner::{RunnerError, SizeTrials, TrialRunner, TrialSet};
pub use statistics::summarize_lines;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use shiftbench_core::pin_to_cpu;
use shiftbench_report::{
    format_summary_table, generate_json_report, parse_raw_file, OutputFormat, RawDataWriter,
    RawTrialLine, Report, ReportMeta, SizeSummary,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Shiftbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "shiftbench")]
#[command(
    author,
    version,
    about = "Insertion sort benchmark harness: critical operation counts and run times"
)]
pub struct Cli {
    /// Optional subcommand (Run, Report); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Trials per input size
    #[arg(long)]
    pub trials: Option<usize>,

    /// Full discarded warm-up passes before the measured pass
    #[arg(long)]
    pub warmup: Option<usize>,

    /// Input sizes, comma separated
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Directory for raw data files
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output format: human or json
    #[arg(long)]
    pub format: Option<String>,

    /// Pin the process to this CPU core before measuring
    #[arg(long)]
    pub pin_cpu: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the warm-up and measured benchmark passes (default)
    Run,
    /// Aggregate a raw data file into a summary report
    Report {
        /// Raw data file; prompted for interactively when omitted
        file: Option<PathBuf>,
    },
}

/// Run the shiftbench CLI. Main entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(Cli::parse())
}

/// Run the shiftbench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("shiftbench_cli=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("shiftbench_cli=info")
            .init();
    }

    // Discover shiftbench.toml configuration (CLI flags override)
    let mut config = BenchConfig::discover().unwrap_or_default();
    apply_cli_overrides(&mut config, &cli);
    config.validate()?;

    let format: OutputFormat = config
        .output
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    match cli.command {
        None | Some(Commands::Run) => run_benchmarks(&config, format),
        Some(Commands::Report { file }) => produce_report(&config, file, format),
    }
}

fn apply_cli_overrides(config: &mut BenchConfig, cli: &Cli) {
    if let Some(sizes) = &cli.sizes {
        config.runner.sizes = sizes.clone();
    }
    if let Some(trials) = cli.trials {
        config.runner.trials_per_size = trials;
    }
    if let Some(warmup) = cli.warmup {
        config.runner.warmup_runs = warmup;
    }
    if let Some(cpu) = cli.pin_cpu {
        config.runner.pin_cpu = Some(cpu);
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.display().to_string();
    }
    if let Some(format) = &cli.format {
        config.output.format = format.clone();
    }
}

/// Warm-up passes, measured pass, raw file output, summary rendering.
fn run_benchmarks(config: &BenchConfig, format: OutputFormat) -> anyhow::Result<()> {
    let trials = config.runner.trials_per_size;

    if let Some(cpu) = config.runner.pin_cpu {
        pin_to_cpu(cpu).with_context(|| format!("pinning process to cpu {cpu}"))?;
        tracing::info!(cpu, "pinned benchmark process");
    }

    // Warm-up: full benchmark passes, results discarded
    for pass in 1..=config.runner.warmup_runs {
        let start = Instant::now();
        run_discarded_pass(config)?;
        tracing::info!(
            pass,
            total = config.runner.warmup_runs,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "warm-up pass complete"
        );
    }

    // Measured pass
    let out_dir = Path::new(&config.output.directory);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    let iterative_path = out_dir.join("iterative-data.txt");
    let recursive_path = out_dir.join("recursive-data.txt");
    let mut iterative_writer = RawDataWriter::create(&iterative_path)
        .with_context(|| format!("creating {}", iterative_path.display()))?;
    let mut recursive_writer = RawDataWriter::create(&recursive_path)
        .with_context(|| format!("creating {}", recursive_path.display()))?;

    let pb = ProgressBar::new(config.runner.sizes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let mut runner = TrialRunner::new(rand::thread_rng(), trials);
    let mut measured = Vec::with_capacity(config.runner.sizes.len());
    for &size in &config.runner.sizes {
        pb.set_message(format!("size {size}"));
        let size_trials = runner.run_size(size)?;
        iterative_writer.append_line(size, size_trials.iterative.results())?;
        recursive_writer.append_line(size, size_trials.recursive.results())?;
        measured.push(size_trials);
        pb.inc(1);
    }
    pb.finish_with_message("measured pass complete");
    tracing::info!(
        iterative = %iterative_path.display(),
        recursive = %recursive_path.display(),
        "raw data written"
    );

    // Aggregation, after all measurement is done
    let iterative_rows =
        summarize_trial_sets(measured.iter().map(|t| &t.iterative), trials)?;
    let recursive_rows =
        summarize_trial_sets(measured.iter().map(|t| &t.recursive), trials)?;

    match format {
        OutputFormat::Human => {
            println!(
                "{}",
                format_summary_table("Iterative insertion sort", &iterative_rows)
            );
            println!(
                "{}",
                format_summary_table("Recursive insertion sort", &recursive_rows)
            );
        }
        OutputFormat::Json => {
            let reports = vec![
                Report {
                    meta: ReportMeta::new(trials, "iterative"),
                    rows: iterative_rows,
                },
                Report {
                    meta: ReportMeta::new(trials, "recursive"),
                    rows: recursive_rows,
                },
            ];
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(())
}

/// One full benchmark pass with all results discarded.
fn run_discarded_pass(config: &BenchConfig) -> Result<(), RunnerError> {
    let mut runner = TrialRunner::new(rand::thread_rng(), config.runner.trials_per_size);
    for &size in &config.runner.sizes {
        let _ = runner.run_size(size)?;
    }
    Ok(())
}

/// Validate completeness of each trial set and reduce it to a summary row.
fn summarize_trial_sets<'a>(
    sets: impl Iterator<Item = &'a TrialSet>,
    trials: usize,
) -> anyhow::Result<Vec<SizeSummary>> {
    let mut lines = Vec::new();
    for set in sets {
        let (counts, times) = set.series(trials)?;
        lines.push(RawTrialLine {
            size: set.size(),
            counts,
            times,
        });
    }
    Ok(summarize_lines(&lines)?)
}

/// The `report` subcommand: pick a raw file, parse, aggregate, render.
fn produce_report(
    config: &BenchConfig,
    file: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let trials = config.runner.trials_per_size;

    let path = match file {
        Some(path) => path,
        None => match prompt_for_file()? {
            Some(path) => path,
            // Declining the prompt ends the report cleanly, not as an error
            None => {
                tracing::info!("no raw data file selected");
                return Ok(());
            }
        },
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("reading raw data file {}", path.display()))?;
    let lines = parse_raw_file(&content, trials)
        .with_context(|| format!("parsing {}", path.display()))?;
    let rows = summarize_lines(&lines)?;

    match format {
        OutputFormat::Human => {
            let title = format!("Benchmark report: {}", path.display());
            println!("{}", format_summary_table(&title, &rows));
        }
        OutputFormat::Json => {
            let report = Report {
                meta: ReportMeta::new(trials, path.display().to_string()),
                rows,
            };
            println!("{}", generate_json_report(&report)?);
        }
    }

    Ok(())
}

/// Ask for a raw data file path on stdin. Empty input (or EOF) means the
/// operator declined.
fn prompt_for_file() -> anyhow::Result<Option<PathBuf>> {
    use std::io::Write as _;

    print!("raw data file (blank to quit): ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();
    Ok((!trimmed.is_empty()).then(|| PathBuf::from(trimmed)))
}
