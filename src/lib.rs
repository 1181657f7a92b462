//! Rackwork - warehouse cell layout generation and location addressing
//!
//! Rackwork maps a warehouse's grid of cells, aisles, bays, positions and
//! vertical levels to canonical human-readable addresses, and generates the
//! full set of storage locations for a newly defined cell.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Orchestrates Gate -> Plan -> Execute -> Verify for cell creation
//! - [`core`] - Domain types, generators, address codec, cell registry
//! - [`store`] - Persistence seam: async trait plus memory and JSONL backends
//! - [`ui`] - Output helpers and human-readable summaries
//!
//! # Correctness Invariants
//!
//! Rackwork maintains the following invariants:
//!
//! 1. Layout plans are pure, deterministic, and previewable before any write
//! 2. All location records flow to the store through a single batched path
//! 3. No partial location set is ever handed to a store on failure
//! 4. Address strings round-trip: parse(format(a)) == a for every valid address

pub mod cli;
pub mod core;
pub mod engine;
pub mod store;
pub mod ui;
