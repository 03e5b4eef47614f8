//! Collatz Studio CLI
//!
//! Analyzes Collatz sequences for single numbers and bounded ranges.
//! Writes JSON reports, CSV exports and text summaries.

use anyhow::Result;
use clap::{Parser, Subcommand};
use collatz_studio::commands::{
    display_schema, display_version, execute_analyze, execute_range, validate_range_args,
    validate_report_file, AnalyzeArgs, RangeArgs,
};
use collatz_studio::utils::config::{DEFAULT_MAX_SPAN, DEFAULT_MAX_STEPS, DEFAULT_TOP_K};
use env_logger::Env;
use std::path::PathBuf;

/// Collatz Studio - Collatz sequence analysis
#[derive(Parser, Debug)]
#[command(name = "collatz")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a single starting number
    Analyze {
        /// Starting number (positive integer)
        #[arg(allow_hyphen_values = true)]
        number: String,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the whole sequence instead of a preview
        #[arg(long)]
        full_sequence: bool,

        /// Maximum transitions before giving up
        #[arg(long, env = "COLLATZ_MAX_STEPS", default_value_t = DEFAULT_MAX_STEPS)]
        max_steps: usize,

        /// Disable the transition cap
        #[arg(long)]
        no_step_limit: bool,
    },

    /// Analyze every number in an inclusive range
    Range {
        /// First bound (positive integer)
        #[arg(allow_hyphen_values = true)]
        start: String,

        /// Second bound (positive integer); bounds may be given in either order
        #[arg(allow_hyphen_values = true)]
        end: String,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output path for CSV export (optional)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Analyze numbers in parallel
        #[arg(long)]
        parallel: bool,

        /// Maximum allowed end - start
        #[arg(long, env = "COLLATZ_MAX_SPAN", default_value_t = DEFAULT_MAX_SPAN)]
        max_span: u64,

        /// Number of entries per ranking
        #[arg(long, env = "COLLATZ_TOP_K", default_value_t = DEFAULT_TOP_K)]
        top: usize,

        /// Maximum transitions before giving up on a number
        #[arg(long, env = "COLLATZ_MAX_STEPS", default_value_t = DEFAULT_MAX_STEPS)]
        max_steps: usize,

        /// Disable the transition cap
        #[arg(long)]
        no_step_limit: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            number,
            output,
            full_sequence,
            max_steps,
            no_step_limit,
        } => {
            let args = AnalyzeArgs {
                number,
                output_json: output,
                full_sequence,
                max_steps: (!no_step_limit).then_some(max_steps),
            };

            execute_analyze(args)?;
        }

        Commands::Range {
            start,
            end,
            output,
            csv,
            summary,
            parallel,
            max_span,
            top,
            max_steps,
            no_step_limit,
        } => {
            let args = RangeArgs {
                start,
                end,
                output_json: output,
                output_csv: csv,
                print_summary: summary,
                parallel,
                max_span,
                top_k: top,
                max_steps: (!no_step_limit).then_some(max_steps),
            };

            // Validate args first
            validate_range_args(&args)?;

            execute_range(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
