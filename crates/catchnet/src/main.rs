//! Catchnet CLI - catchment network graphs from the command line.
//!
//! Reads a navigation edge table from `SQLite` and prints the network, an
//! upstream sub-network, or the paths between two catchments.
//!
//! ```text
//! catchnet --db ./una.sqlite print --to 307592300 | dot -Tpng -o una.png
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use catchnet::{Config, NodeId, OutputFormat};

mod cli;

/// Catchnet: catchment network graph builder.
#[derive(Parser)]
#[command(name = "catchnet")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to database e.g. --db ./path/to/my/db.sqlite
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Query returning (from, to) integer pairs
    #[arg(short, long, global = true)]
    query: Option<String>,

    /// Insert each row as (to, from) instead of (from, to)
    #[arg(long, global = true)]
    reversed: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the network, or the part of it selected by --to/--from
    Print {
        /// Keep only this node and everything upstream of it
        #[arg(short, long, allow_negative_numbers = true)]
        to: Option<NodeId>,

        /// With --to, keep only the paths from this node to the target
        #[arg(short, long, requires = "to", allow_negative_numbers = true)]
        from: Option<NodeId>,

        /// Output format (defaults to the config file's, then dot)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Name for the dot graph
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Detect cycles in the network
    Cycles,

    /// Show network statistics
    Stats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let overrides = cli::Overrides {
        database: cli.db,
        query: cli.query,
        reversed: cli.reversed,
    };

    let result = cli::load_config(cli.config.as_deref(), overrides)
        .and_then(|config| dispatch(cli.command, &config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Commands, config: &Config) -> catchnet::Result<()> {
    match command {
        Commands::Print {
            to,
            from,
            format,
            name,
        } => cli::print::run(config, cli::print::View::new(from, to), format, name),
        Commands::Cycles => cli::cycles::run(config),
        Commands::Stats => cli::stats::run(config),
    }
}
