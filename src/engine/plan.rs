//! engine::plan
//!
//! Deterministic layout plan generation.
//!
//! # Architecture
//!
//! Plans are the sole intermediate representation between a validated cell
//! specification and store writes.
//!
//! Plans are:
//! - **Deterministic**: Same specification always produces the same plan
//! - **Previewable**: Can be shown to the user before execution
//! - **Serializable**: Canonical JSON, digestible for determinism checks
//! - **Pure**: Planning performs no I/O and mutates no state
//!
//! # Example
//!
//! ```
//! use rackwork::engine::plan::{CellSpec, LayoutPlan};
//! use rackwork::core::types::Side;
//!
//! let spec = CellSpec {
//!     cell_number: 4,
//!     aisle_start: 3,
//!     aisle_end: 16,
//!     start_side: Side::Even,
//!     end_side: Side::Even,
//!     locations_per_aisle: 100,
//!     level_count: 5,
//!     has_picking: true,
//! };
//!
//! let plan = LayoutPlan::new(&spec).unwrap();
//! assert_eq!(plan.aisles.len(), 26); // 2 single faces + 12 double
//! assert_eq!(plan.bays_per_side, 25);
//! assert_eq!(plan.expected_locations(), 26 * 50 * 5);
//! assert_eq!(plan.digest(), LayoutPlan::new(&spec).unwrap().digest());
//! ```

use serde::{Deserialize, Serialize};

use crate::core::aisles::generate_aisle_numbers;
use crate::core::levels::{generate_levels, LevelSet};
use crate::core::types::{GeometryError, PlanDigest, Side};

/// Fixed physical width of a bay, in positions.
pub const BAY_WIDTH: u32 = 4;

/// User-supplied specification for a new cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSpec {
    pub cell_number: u32,
    pub aisle_start: u32,
    pub aisle_end: u32,
    pub start_side: Side,
    pub end_side: Side,
    /// Positions per aisle, across both faces.
    pub locations_per_aisle: u32,
    /// Vertical levels per position.
    pub level_count: u32,
    /// Whether level 0 is a picking level.
    pub has_picking: bool,
}

/// One planned aisle face. `is_odd` selects the odd-numbered face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedAisle {
    pub number: u32,
    pub is_odd: bool,
}

/// A validated, deterministic layout for one cell.
///
/// Built only by [`LayoutPlan::new`]; a constructed plan is internally
/// consistent and safe to execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPlan {
    pub cell_number: u32,
    pub locations_per_aisle: u32,
    pub has_picking: bool,
    /// Every aisle face, in walk order.
    pub aisles: Vec<PlannedAisle>,
    /// Bays persisted per aisle face (some may end up empty).
    pub bays_per_side: u32,
    pub levels: LevelSet,
}

impl LayoutPlan {
    /// Validate a specification and derive its layout plan.
    ///
    /// This is the gate: every geometry error is caught here, before any
    /// store interaction.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::InvalidConfiguration`] for non-positive cell
    ///   number, location count, or level count
    /// - [`GeometryError::InvalidRange`] / [`GeometryError::AmbiguousSingleAisle`]
    ///   from aisle generation
    pub fn new(spec: &CellSpec) -> Result<Self, GeometryError> {
        if spec.cell_number == 0 {
            return Err(GeometryError::InvalidConfiguration(
                "cell number must be positive".to_string(),
            ));
        }
        if spec.locations_per_aisle == 0 {
            return Err(GeometryError::InvalidConfiguration(
                "locations per aisle must be positive".to_string(),
            ));
        }

        let assignments = generate_aisle_numbers(
            spec.aisle_start,
            spec.aisle_end,
            spec.start_side,
            spec.end_side,
        )?;
        let levels = generate_levels(spec.level_count, spec.has_picking)?;

        let bays_per_side = spec.locations_per_aisle.div_ceil(BAY_WIDTH);
        if bays_per_side == 0 {
            return Err(GeometryError::InvalidConfiguration(
                "cell must hold at least one bay per aisle side".to_string(),
            ));
        }

        let aisles = assignments
            .iter()
            .flat_map(|assignment| {
                assignment.sides.faces().iter().map(|&is_odd| PlannedAisle {
                    number: assignment.number,
                    is_odd,
                })
            })
            .collect();

        Ok(Self {
            cell_number: spec.cell_number,
            locations_per_aisle: spec.locations_per_aisle,
            has_picking: spec.has_picking,
            aisles,
            bays_per_side,
            levels,
        })
    }

    /// Positions held by one face of an aisle.
    ///
    /// The odd face holds `ceil(n/2)` positions, the even face
    /// `floor(n/2)`; for an even total the faces are symmetric.
    pub fn side_positions(&self, is_odd: bool) -> u32 {
        if is_odd {
            self.locations_per_aisle.div_ceil(2)
        } else {
            self.locations_per_aisle / 2
        }
    }

    /// Positions held by bay index `bay` (0-based) of one face.
    pub fn positions_in_bay(&self, is_odd: bool, bay: u32) -> u32 {
        self.side_positions(is_odd)
            .saturating_sub(bay * BAY_WIDTH)
            .min(BAY_WIDTH)
    }

    /// Number of distinct aisle numbers in the plan (faces of the same
    /// aisle count once).
    pub fn aisle_numbers(&self) -> u32 {
        let mut count = 0;
        let mut last = None;
        for aisle in &self.aisles {
            if last != Some(aisle.number) {
                count += 1;
                last = Some(aisle.number);
            }
        }
        count
    }

    /// Total bay rows the plan will persist.
    pub fn expected_bays(&self) -> u64 {
        self.aisles.len() as u64 * self.bays_per_side as u64
    }

    /// Total location records the plan will emit.
    pub fn expected_locations(&self) -> u64 {
        let positions: u64 = self
            .aisles
            .iter()
            .map(|aisle| self.side_positions(aisle.is_odd) as u64)
            .sum();
        positions * self.levels.len() as u64
    }

    /// Digest of the plan's canonical JSON.
    ///
    /// Two plans from the same specification always share a digest.
    pub fn digest(&self) -> PlanDigest {
        let json = serde_json::to_string(self).unwrap_or_default();
        PlanDigest::compute(json.as_bytes())
    }
}
