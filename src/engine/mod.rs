//! engine
//!
//! Orchestrates cell creation: Gate -> Plan -> Execute -> Verify.
//!
//! # Command Lifecycle
//!
//! 1. **Gate**: Validate the cell specification (all geometry errors are
//!    caught before any store interaction)
//! 2. **Plan**: Derive the deterministic, previewable [`plan::LayoutPlan`]
//! 3. **Execute**: Persist cell, aisles, bays, then locations in batches
//!    of 1000 through the [`crate::store::Store`] seam
//! 4. **Verify**: Recount the built records against the plan's arithmetic
//!
//! # Invariants
//!
//! - Planning performs no I/O; execution performs no arithmetic
//! - The full location set is built before the first location write, so a
//!   builder error never hands a partial set to the store
//! - Store failures abort the lifecycle and are never retried here

pub mod build;
pub mod plan;
pub mod verify;

pub use plan::{CellSpec, LayoutPlan};

use thiserror::Error;

use crate::core::types::{GeometryError, PlanDigest};
use crate::store::batch::{insert_in_batches, BATCH_SIZE};
use crate::store::{NewCell, Store, StoreError};

/// Errors from the cell-creation lifecycle.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("verification failed after execution: {0}")]
    Verify(#[from] verify::VerifyError),
}

/// Summary of a completed cell creation.
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub cell_id: i64,
    pub cell_number: u32,
    /// Aisle rows created (one per face).
    pub aisles: usize,
    pub bays: usize,
    pub locations: usize,
    pub digest: PlanDigest,
}

/// Create a cell: gate and plan the layout, persist it through `store`,
/// and verify the result.
///
/// # Errors
///
/// Geometry errors surface before any store call; store errors abort the
/// remaining writes; a verification error after successful writes
/// indicates a planner/builder bug.
pub async fn create_cell(spec: &CellSpec, store: &dyn Store) -> Result<CreateReport, EngineError> {
    // Gate + Plan: pure, everything validated up front.
    let plan = LayoutPlan::new(spec)?;
    let digest = plan.digest();

    // Execute.
    let cell = store
        .create_cell(&NewCell {
            number: spec.cell_number,
            aisles_count: plan.aisle_numbers(),
            locations_per_aisle: spec.locations_per_aisle,
            levels_per_location: spec.level_count,
        })
        .await?;

    let aisles = store
        .create_aisles(cell.id, &build::aisle_layout(&plan))
        .await?;
    let bays = store.create_bays(&build::bay_layout(&plan, &aisles)).await?;

    // The full set is built before the first location write.
    let records = build::build_locations(&plan, &aisles, &bays)?;
    insert_in_batches(store, &records, BATCH_SIZE).await?;

    // Verify.
    verify::verify_locations(&plan, &records)?;

    Ok(CreateReport {
        cell_id: cell.id,
        cell_number: spec.cell_number,
        aisles: aisles.len(),
        bays: bays.len(),
        locations: records.len(),
        digest,
    })
}
