use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use frobenius::commands::{print_validation_result, run_solve, validate_file, InputSource, SolveOptions};
use frobenius::models::OutputFormat;

/// Frobenius - largest integer not expressible as a non-negative combination of the given integers
#[derive(Parser)]
#[command(name = "frobenius")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the Frobenius number of one or more generator sets
    #[command(group(ArgGroup::new("input").required(true).args(["units", "file"])))]
    Solve {
        /// Comma separated integers, e.g. "6,9,20"
        #[arg(short, long)]
        units: Option<String>,

        /// CSV file with one comma separated row per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Maximum rows solved at once (0 = all at once)
        #[arg(long)]
        max_concurrent: Option<usize>,

        /// Stop processing after the first failing row
        #[arg(long)]
        stop_on_error: bool,
    },

    /// Check a CSV file's rows without solving them
    Validate {
        /// CSV file to check
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let project_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot read working directory: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Solve {
            units,
            file,
            format,
            max_concurrent,
            stop_on_error,
        } => {
            let source = match (units, file) {
                (Some(units), _) => InputSource::Units(units),
                (None, Some(file)) => InputSource::File(file),
                (None, None) => unreachable!("clap requires one input source"),
            };
            let options = SolveOptions {
                source,
                format,
                max_concurrent,
                stop_on_error,
            };
            match run_solve(&project_root, options).await {
                Ok(summary) => {
                    if summary.has_failures() {
                        std::process::exit(1);
                    }
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Validate { file } => match validate_file(&project_root, &file) {
            Ok(result) => {
                print_validation_result(&result);
                if result.valid {
                    Ok(())
                } else {
                    std::process::exit(1);
                }
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
