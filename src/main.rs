//! budget-diff: Semantic budget snapshot diff and analysis tool
//!
//! Compares two budget backup exports (CSV) and reports what changed.

use anyhow::Result;
use budget_diff::{
    cli,
    config::{BehaviorConfig, DiffConfig, DiffPaths, OutputConfig, ReportLabels, ViewConfig},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput Format:",
        "\n  Budget backup CSV exports (quoted fields, BOM tolerated)",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown",
        "\n\nFeatures:",
        "\n  Key-based item matching, field-level change tracking, financial impact summary"
    )
}

#[derive(Parser)]
#[command(name = "budget-diff")]
#[command(version, long_version = build_long_version())]
#[command(about = "Semantic budget snapshot diff and analysis tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected (or --fail-on-change not set)
    1  Changes detected (with --fail-on-change)
    2  Error occurred

EXAMPLES:
    # Quick diff of two backups
    budget-diff diff backup-may.csv backup-june.csv

    # CI check: fail when the budget moved
    budget-diff diff old.csv new.csv --fail-on-change -o summary

    # Export JSON for processing
    budget-diff diff old.csv new.csv -o json > diff.json

    # Inspect a single backup
    budget-diff view backup-june.csv -o markdown")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the old/baseline snapshot
    old: PathBuf,

    /// Path to the new snapshot
    new: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Display label for the old snapshot (e.g. its backup date)
    #[arg(long)]
    old_label: Option<String>,

    /// Display label for the new snapshot
    #[arg(long)]
    new_label: Option<String>,

    /// Exit with code 1 if any changes are detected
    #[arg(long)]
    fail_on_change: bool,
}

/// Arguments for the `view` subcommand
#[derive(Parser)]
struct ViewArgs {
    /// Path to the snapshot
    file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Display label for the snapshot
    #[arg(long)]
    label: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two budget snapshots
    Diff(DiffArgs),

    /// Inspect a single budget snapshot
    View(ViewArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match run(cli) {
        Ok(exit_code) => {
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Dispatch to command handlers, returning the desired exit code.
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Diff(args) => {
            let config = DiffConfig {
                paths: DiffPaths {
                    old: args.old,
                    new: args.new,
                },
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                behavior: BehaviorConfig {
                    quiet: cli.quiet,
                    fail_on_change: args.fail_on_change,
                },
                labels: ReportLabels {
                    old: args.old_label,
                    new: args.new_label,
                },
            };

            cli::run_diff(&config)
        }

        Commands::View(args) => {
            let config = ViewConfig {
                path: args.file,
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                behavior: BehaviorConfig {
                    quiet: cli.quiet,
                    fail_on_change: false,
                },
                label: args.label,
            };

            cli::run_view(&config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "budget-diff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}
