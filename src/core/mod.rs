//! core
//!
//! Core domain types and pure computations for Rackwork.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Side, Location, FullAddress, PlanDigest
//! - [`levels`] - Vertical level generation, including the picking level
//! - [`aisles`] - Aisle numbering and location-side assignment
//! - [`ranges`] - Odd/even position counts and bounds per aisle
//! - [`address`] - Address codec: normalize, parse, format, bounded cache
//! - [`config`] - Cell registry schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Every computation here is synchronous, pure, and deterministic
//! - Validation failures are typed; nothing panics on user input

pub mod address;
pub mod aisles;
pub mod config;
pub mod levels;
pub mod ranges;
pub mod types;
