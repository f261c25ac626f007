//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::paths::resolve_store_path;
use crate::cli::Cli;
use skillrank_core::error::Result;
use skillrank_core::store::Store;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a Path, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Store directory selected by `--store`/`--root`
    pub fn store_path(&self) -> PathBuf {
        resolve_store_path(self.cli.store.as_deref(), self.root)
    }

    pub fn open_store(&self) -> Result<Store> {
        Store::open(&self.store_path())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("skillrank {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Course recommendations ranked by a pheromone-reinforced colony.");
        println!();
        println!("Run `skillrank --help` for usage information.");
        Ok(())
    }
}
