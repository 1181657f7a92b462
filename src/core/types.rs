//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Side`] - Which numbered faces of an aisle carry locations
//! - [`Location`] - Position and level within an aisle side
//! - [`FullAddress`] - Cell, aisle, position, and level
//! - [`PlanDigest`] - SHA-256 digest of a layout plan for determinism checks
//!
//! # Validation
//!
//! [`Side`] is a closed enum, never a string, so expanding an aisle
//! assignment into concrete aisle-side records is exhaustive by
//! construction. Address components are validated by the codec in
//! [`crate::core::address`] before a [`FullAddress`] is built.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Vertical level step: storage levels are multiples of 10.
pub const LEVEL_STEP: u32 = 10;

/// Highest level in the fixed discrete set used when no cell config is
/// supplied: {0, 10, 20, 30, 40}.
pub const LEVEL_MAX: u32 = 40;

/// The distinguished ground-level picking slot.
pub const PICKING_LEVEL: u32 = 0;

/// Zero-padded widths of the address parts (aisle-position-level).
pub const AISLE_WIDTH: usize = 3;
pub const POSITION_WIDTH: usize = 4;
pub const LEVEL_WIDTH: usize = 2;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid side '{0}': expected odd, even, or both")]
    InvalidSide(String),
}

/// Errors from geometry generation and layout planning.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// A geometry parameter was non-positive or otherwise unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A descending or degenerate aisle range was requested.
    #[error("invalid aisle range {start}..{end}: {reason}")]
    InvalidRange {
        start: u32,
        end: u32,
        reason: String,
    },

    /// A single-aisle range was requested with conflicting sides.
    ///
    /// When `start == end` the range holds exactly one aisle, so the
    /// start and end sides must agree.
    #[error("aisle {aisle} requested with conflicting sides {start_side} and {end_side}")]
    AmbiguousSingleAisle {
        aisle: u32,
        start_side: Side,
        end_side: Side,
    },
}

/// Which numbered faces of an aisle carry storage locations.
///
/// An aisle may have locations on its odd-numbered face, its even-numbered
/// face, or both. Boundary aisles of a cell typically carry a single face;
/// interior aisles always carry both.
///
/// # Example
///
/// ```
/// use rackwork::core::types::Side;
///
/// let side: Side = "even".parse().unwrap();
/// assert_eq!(side, Side::Even);
/// assert_eq!(side.faces(), &[false]);
/// assert_eq!(Side::Both.faces(), &[true, false]);
/// assert!("north".parse::<Side>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Odd-numbered positions only (1, 3, 5, ...).
    Odd,
    /// Even-numbered positions only (2, 4, 6, ...).
    Even,
    /// Both faces.
    Both,
}

impl Side {
    /// Expand into concrete aisle faces, `true` meaning the odd face.
    ///
    /// `Both` expands to the odd face first, matching the physical
    /// numbering order along the aisle.
    pub fn faces(self) -> &'static [bool] {
        match self {
            Side::Odd => &[true],
            Side::Even => &[false],
            Side::Both => &[true, false],
        }
    }
}

impl std::str::FromStr for Side {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "odd" => Ok(Side::Odd),
            "even" => Ok(Side::Even),
            "both" => Ok(Side::Both),
            _ => Err(TypeError::InvalidSide(s.to_string())),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Side::Odd => "odd",
            Side::Even => "even",
            Side::Both => "both",
        };
        write!(f, "{}", s)
    }
}

/// A position and level within an aisle side (short address form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Horizontal slot number along the aisle side.
    pub position: u32,
    /// Vertical slot; 0 is the picking level when enabled.
    pub level: u32,
}

/// A complete warehouse address: cell, aisle, position, and level.
///
/// Constructed only from a validated address string (see
/// [`crate::core::address::parse_full_address`]) or from components the
/// caller has already bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FullAddress {
    pub cell: u32,
    pub aisle: u32,
    pub position: u32,
    pub level: u32,
}

impl FullAddress {
    /// The short (position-level) part of this address.
    pub fn location(&self) -> Location {
        Location {
            position: self.position,
            level: self.level,
        }
    }
}

/// SHA-256 digest of a layout plan's canonical JSON.
///
/// Two plans built from the same cell specification always share a digest,
/// which makes plan determinism directly checkable.
///
/// # Example
///
/// ```
/// use rackwork::core::types::PlanDigest;
///
/// let a = PlanDigest::compute(b"layout");
/// let b = PlanDigest::compute(b"layout");
/// assert_eq!(a, b);
/// assert!(a.as_str().starts_with("sha256:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanDigest(String);

impl PlanDigest {
    /// Compute the digest of a byte serialization.
    pub fn compute(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let hash = hasher.finalize();
        Self(format!("sha256:{}", hex::encode(hash)))
    }

    /// Get the digest as a string slice, including the `sha256:` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for display: `sha256:` plus the first `len` hex chars.
    pub fn short(&self, len: usize) -> String {
        let hex = &self.0["sha256:".len()..];
        let end = len.min(hex.len());
        format!("sha256:{}", &hex[..end])
    }
}

impl std::fmt::Display for PlanDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
