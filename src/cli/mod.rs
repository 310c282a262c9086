//! Command-line interface for layered-config
//!
//! Provides `show`, `get`, `section` and `check` subcommands over a merged
//! base + environment configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Dispatch;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::DocumentFormat;

mod check;
mod get;
mod show;
mod utils;

pub use utils::{LoadOptions, StoreArgs};

/// Load layered configuration documents and inspect the merged result
#[derive(Parser)]
#[command(name = "layered-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding config documents [default: configs/ next to the executable]
    #[arg(long, global = true, value_name = "DIR", env = "LAYERED_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Document format for both layers
    #[arg(long, global = true, value_enum, default_value_t = DocumentFormat::Yaml)]
    format: DocumentFormat,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full merged configuration
    Show(show::ShowArgs),

    /// Print one value by key or dotted key path
    Get(get::GetArgs),

    /// Print the entries of one section
    Section(show::SectionArgs),

    /// Load both layers and report whether they parse
    Check(check::CheckArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence; otherwise INFO, or DEBUG with --verbose.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let dispatch = Dispatch::new(
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter),
    );
    let _ = tracing::dispatcher::set_global_default(dispatch.clone());

    let options = LoadOptions { config_dir: cli.config_dir, format: cli.format, dispatch };

    match cli.command {
        Commands::Show(args) => show::run_show(args, &options),
        Commands::Get(args) => get::run(args, &options),
        Commands::Section(args) => show::run_section(args, &options),
        Commands::Check(args) => check::run(args, &options),
    }
}
