//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Converts its arguments into core/engine types
//! 2. Calls the core or engine to do the work
//! 3. Formats and displays output
//!
//! Handlers never compute layout arithmetic themselves.
//!
//! # Async Commands
//!
//! The create command is async because persistence involves file I/O.
//! It builds a tokio runtime and blocks on the engine from the sync CLI
//! context.

mod address;
mod cells;
mod completion;
mod create;
mod preview;

pub use address::{format, normalize, parse, validate};
pub use cells::cells;
pub use completion::completion;
pub use create::create;
pub use preview::preview;

use anyhow::Result;

use crate::cli::args::Command;
use crate::core::config::{CellRegistry, RegistrySource};
use crate::ui::output::Verbosity;

/// Shared context for command handlers.
#[derive(Debug)]
pub struct Context {
    pub verbosity: Verbosity,
    pub registry: CellRegistry,
    pub registry_source: RegistrySource,
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Create {
            cell,
            geometry,
            output,
            dry_run,
        } => create::create(ctx, cell, &geometry, &output, dry_run),
        Command::Preview { geometry } => preview::preview(ctx, &geometry),
        Command::Cells => cells::cells(ctx),
        Command::Parse {
            address,
            check_bounds,
        } => address::parse(ctx, &address, check_bounds),
        Command::Format {
            cell,
            aisle,
            position,
            level,
        } => address::format(ctx, cell, aisle, position, level),
        Command::Normalize { value } => address::normalize(ctx, &value),
        Command::Validate { location } => address::validate(ctx, &location),
        Command::Completion { shell } => completion::completion(shell),
    }
}
