//! boardgen - static HTML chessboard markup generator.
//!
//! Run with no arguments, it prints the board table to stdout: a header row of
//! file labels, eight rank rows (8 down to 1) each framed by rank labels, and a
//! trailer row repeating the file labels. Every square cell carries the id
//! `space-<file><rank>` and a `light`/`dark` class, which the stylesheet and
//! piece-placement scripts rely on.
//!
//! Logs are written to stderr so stdout carries only the markup. See
//! [`config`] for the environment variables that are honoured.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod output;

/// Top-level CLI arguments for boardgen.
///
/// When invoked with no subcommand, the board markup is generated.
#[derive(Parser)]
#[command(name = "boardgen", about = "Generate static HTML markup for a chessboard")]
struct Cli {
    /// Write the markup to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Optional subcommand. When omitted, the board is generated.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cell id, coordinates and shade of a square.
    Square {
        /// Algebraic square (`e4`) or cell id (`space-e4`).
        square: String,
    },
}

/// Error type for CLI operations.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// The output file could not be created or written.
    #[error("failed to write {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout could not be written (closed pipe and the like).
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),

    /// The `square` argument was neither a square nor a cell id.
    #[error("invalid square: {0}")]
    Square(#[from] chess::SquareError),
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::new(config::get_log_filter()))
        .init();
}

/// Accept either an algebraic square or a markup cell id.
fn parse_square_arg(arg: &str) -> Result<chess::Square, chess::SquareError> {
    if arg.contains('-') {
        chess::Square::from_element_id(arg)
    } else {
        arg.parse()
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Some(Commands::Square { square }) => {
            let square = parse_square_arg(&square)?;
            let path = config::get_output_path(cli.output);
            tracing::debug!("Describing square {} to {:?}", square, path);
            output::write_square(path, square)?;
        }
        None => {
            let path = config::get_output_path(cli.output);
            tracing::debug!("Output: {:?}", path);
            output::write_board(path)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("boardgen failed: {:?}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
