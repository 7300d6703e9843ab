//! Lander CLI - localized landing pages from Contentful.
//!
//! Provides commands for:
//! - `serve`: Start the landing page server
//! - `content schema apply|localize|export`: Manage content types
//! - `content seed`: Create the example landing page
//! - `content publish` / `content draft`: Bulk publish or unpublish entries

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ContentCommand, ServeArgs};
use error::CliError;
use output::Output;

/// Lander - localized landing pages from Contentful.
#[derive(Parser)]
#[command(name = "lander", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the landing page server.
    Serve(ServeArgs),
    /// Contentful provisioning commands.
    #[command(subcommand)]
    Content(ContentCommand),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => run_serve(args),
        Commands::Content(cmd) => cmd.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run_serve(args: ServeArgs) -> Result<(), CliError> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(args.execute())
}
