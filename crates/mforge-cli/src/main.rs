//! # mforge CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Running without a subcommand, or with one that is not recognized,
//! prints the help text and exits successfully.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mforge_cli::schema::{run_schema, SchemaArgs};
use mforge_cli::template::{run_template, TemplateArgs};
use mforge_cli::validate::{run_validate, ValidateArgs};

/// metadata-forge: structured metadata for software artifacts.
///
/// Generates metadata templates, validates metadata documents, and
/// describes the metadata record shape.
#[derive(Parser, Debug)]
#[command(name = "mforge", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a metadata template.
    Template(TemplateArgs),

    /// Validate metadata.
    Validate(ValidateArgs),

    /// Describe every metadata field.
    Schema(SchemaArgs),

    /// Show version information.
    Version,
}

fn print_help() -> ExitCode {
    match Cli::command().print_help() {
        Ok(()) => {
            println!();
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::from(1),
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => return print_help(),
        Err(e) => e.exit(),
    };

    // Initialize tracing based on verbosity level. Logs go to stderr so
    // JSON written to stdout stays clean.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "mforge starting");

    let result = match cli.command {
        Some(Commands::Template(args)) => run_template(&args),
        Some(Commands::Validate(args)) => run_validate(&args),
        Some(Commands::Schema(args)) => run_schema(&args),
        Some(Commands::Version) => {
            println!("{}", mforge_cli::version_line());
            Ok(0)
        }
        None => return print_help(),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
