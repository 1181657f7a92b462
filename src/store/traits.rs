//! store::traits
//!
//! Store trait definition for persisting generated layouts.
//!
//! # Design
//!
//! The `Store` trait is async because persistence involves I/O. All
//! methods return `Result` with typed errors; the engine invokes them
//! only after the layout plan has been validated, so a store failure
//! never compromises the correctness of the computed layout.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A cell with this number already exists in the store.
    #[error("cell {0} already exists")]
    DuplicateCell(u32),

    /// A write could not be completed.
    #[error("write failed: {0}")]
    WriteFailed(String),

    /// An underlying I/O error.
    #[error("io error: {0}")]
    Io(String),
}

/// A new cell to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCell {
    pub number: u32,
    pub aisles_count: u32,
    pub locations_per_aisle: u32,
    pub levels_per_location: u32,
}

/// A persisted cell with its surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRow {
    pub id: i64,
    pub number: u32,
    pub aisles_count: u32,
    pub locations_per_aisle: u32,
    pub levels_per_location: u32,
}

/// One aisle face to persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAisle {
    pub number: u32,
    pub is_odd: bool,
}

/// A persisted aisle face with its surrogate id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AisleRow {
    pub id: i64,
    pub cell_id: i64,
    pub number: u32,
    pub is_odd: bool,
}

/// One bay to persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBay {
    pub aisle_id: i64,
    pub number: u32,
    pub width: u32,
}

/// A persisted bay with its surrogate id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BayRow {
    pub id: i64,
    pub aisle_id: i64,
    pub number: u32,
    pub width: u32,
}

/// One physical storage location, ready for bulk persistence.
///
/// `aisle_id` and `bay_id` are surrogate keys assigned by the store when
/// the aisle and bay rows were created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub position: u32,
    pub level: u32,
    pub is_picking: bool,
    pub aisle_id: i64,
    pub bay_id: i64,
}

/// Interface for persisting a generated cell layout.
///
/// Implementations assign surrogate ids; callers treat them as opaque.
#[async_trait]
pub trait Store: Send + Sync {
    /// Persist the cell record.
    async fn create_cell(&self, cell: &NewCell) -> Result<CellRow, StoreError>;

    /// Persist one row per aisle face, in order.
    async fn create_aisles(
        &self,
        cell_id: i64,
        aisles: &[NewAisle],
    ) -> Result<Vec<AisleRow>, StoreError>;

    /// Persist bay rows, in order.
    async fn create_bays(&self, bays: &[NewBay]) -> Result<Vec<BayRow>, StoreError>;

    /// Persist one batch of location records.
    ///
    /// Callers are responsible for chunking; see
    /// [`crate::store::batch::insert_in_batches`].
    async fn create_locations(&self, batch: &[LocationRecord]) -> Result<(), StoreError>;
}
