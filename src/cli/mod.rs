//! CLI argument parsing for skillrank
//!
//! Supports global flags: --root, --store, --format, --quiet, --verbose

pub mod args;
pub mod commands;
pub mod format;
pub mod parse;
pub mod paths;

use clap::Parser;
use std::path::PathBuf;

pub use commands::Commands;
pub use skillrank_core::format::OutputFormat;

use parse::parse_format;

/// Skillrank - course recommendations ranked by a pheromone-reinforced colony
#[derive(Parser, Debug)]
#[command(name = "skillrank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store path (default: <root>/.skillrank)
    #[arg(long, global = true, env = "SKILLRANK_STORE")]
    pub store: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
