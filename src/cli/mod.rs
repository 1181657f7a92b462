//! cli
//!
//! Command-line interface layer for Rackwork.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load the cell registry
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that call into [`crate::core`] and [`crate::engine`]; the
//! handlers never compute layout arithmetic themselves.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::Result;

use crate::core::config::CellRegistry;
use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let loaded = CellRegistry::load(cli.cells.as_deref())?;
    let ctx = commands::Context {
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
        registry: loaded.registry,
        registry_source: loaded.source,
    };

    commands::dispatch(cli.command, &ctx)
}
