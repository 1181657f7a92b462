//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cells <path>`: Load cell definitions from this TOML file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::Side;

/// Rackwork - warehouse cell layout generation and location addressing
#[derive(Parser, Debug)]
#[command(name = "rk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load cell definitions from this TOML file instead of the defaults
    #[arg(long, global = true, value_name = "PATH")]
    pub cells: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Which faces of a boundary aisle carry locations.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum SideArg {
    Odd,
    Even,
    Both,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Odd => Side::Odd,
            SideArg::Even => Side::Even,
            SideArg::Both => Side::Both,
        }
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Geometry arguments shared by `create` and `preview`.
#[derive(clap::Args, Debug, Clone)]
pub struct GeometryArgs {
    /// First aisle number of the cell
    #[arg(long, value_name = "N")]
    pub aisle_start: u32,

    /// Last aisle number of the cell
    #[arg(long, value_name = "N")]
    pub aisle_end: u32,

    /// Faces carried by the first aisle
    #[arg(long, value_enum, default_value = "both")]
    pub start_side: SideArg,

    /// Faces carried by the last aisle
    #[arg(long, value_enum, default_value = "both")]
    pub end_side: SideArg,

    /// Positions per aisle, across both faces
    #[arg(long, value_name = "N")]
    pub locations_per_aisle: u32,

    /// Vertical levels per position
    #[arg(long, value_name = "N")]
    pub levels: u32,

    /// Make level 0 a picking level
    #[arg(long)]
    pub picking: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate and persist the full location set for a new cell
    #[command(
        long_about = "Generate and persist the full location set for a new cell.\n\n\
            Derives the aisle, bay, and level layout from the given geometry, \
            then writes cell, aisle, bay, and location records as JSON Lines \
            to the output file, batching location inserts at 1000 records. \
            Use --dry-run to preview the layout without writing anything."
    )]
    Create {
        /// Cell number to create
        #[arg(long, value_name = "N")]
        cell: u32,

        #[command(flatten)]
        geometry: GeometryArgs,

        /// Records file to write
        #[arg(long, value_name = "PATH", default_value = "locations.jsonl")]
        output: PathBuf,

        /// Compute and show the layout without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Preview the aisle, level, and position layout of a prospective cell
    Preview {
        #[command(flatten)]
        geometry: GeometryArgs,
    },

    /// List the cells in the registry
    Cells,

    /// Parse and validate a full address (cell-aisle-position-level)
    Parse {
        /// The address string, normalized or not
        address: String,

        /// Also check aisle and position against the cell's registry entry
        #[arg(long)]
        check_bounds: bool,
    },

    /// Format address components as a canonical address string
    Format {
        #[arg(long, value_name = "N")]
        cell: u32,
        #[arg(long, value_name = "N")]
        aisle: u32,
        #[arg(long, value_name = "N")]
        position: u32,
        #[arg(long, value_name = "N")]
        level: u32,
    },

    /// Normalize an address or location string (pads numeric parts)
    Normalize {
        /// A full address or short position-level string
        value: String,
    },

    /// Validate a short position-level location string
    Validate {
        /// The location string, normalized or not
        location: String,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
