//! store::memory
//!
//! In-memory store for deterministic testing.
//!
//! # Design
//!
//! The memory store keeps every row in memory, assigns sequential
//! surrogate ids per table, records each operation for verification, and
//! allows configuring failure scenarios per method.
//!
//! # Example
//!
//! ```
//! use rackwork::store::memory::MemoryStore;
//! use rackwork::store::{NewCell, Store};
//!
//! # tokio_test::block_on(async {
//! let store = MemoryStore::new();
//!
//! let cell = store.create_cell(&NewCell {
//!     number: 4,
//!     aisles_count: 14,
//!     locations_per_aisle: 100,
//!     levels_per_location: 5,
//! }).await.unwrap();
//!
//! assert_eq!(cell.id, 1);
//! assert_eq!(store.cells().len(), 1);
//! # });
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::traits::{
    AisleRow, BayRow, CellRow, LocationRecord, NewAisle, NewBay, NewCell, Store, StoreError,
};

/// In-memory store for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MemoryStoreInner {
    cells: Vec<CellRow>,
    aisles: Vec<AisleRow>,
    bays: Vec<BayRow>,
    locations: Vec<LocationRecord>,
    /// Size of each location batch received, in order.
    batch_sizes: Vec<usize>,
    /// Recorded operations for verification.
    operations: Vec<StoreOperation>,
    fail_on: Option<FailOn>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail create_cell with the given error.
    CreateCell(StoreError),
    /// Fail create_aisles with the given error.
    CreateAisles(StoreError),
    /// Fail create_bays with the given error.
    CreateBays(StoreError),
    /// Fail create_locations once `failing_batch` batches have succeeded.
    CreateLocations {
        error: StoreError,
        failing_batch: usize,
    },
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOperation {
    CreateCell { number: u32 },
    CreateAisles { count: usize },
    CreateBays { count: usize },
    CreateLocations { count: usize },
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a failure scenario.
    pub fn fail_on(&self, fail_on: FailOn) {
        self.lock().fail_on = Some(fail_on);
    }

    /// Stored cell rows.
    pub fn cells(&self) -> Vec<CellRow> {
        self.lock().cells.clone()
    }

    /// Stored aisle rows.
    pub fn aisles(&self) -> Vec<AisleRow> {
        self.lock().aisles.clone()
    }

    /// Stored bay rows.
    pub fn bays(&self) -> Vec<BayRow> {
        self.lock().bays.clone()
    }

    /// Stored location records.
    pub fn locations(&self) -> Vec<LocationRecord> {
        self.lock().locations.clone()
    }

    /// Size of every location batch received, in order.
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.lock().batch_sizes.clone()
    }

    /// Every operation this store received, in order.
    pub fn operations(&self) -> Vec<StoreOperation> {
        self.lock().operations.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryStoreInner> {
        self.inner.lock().expect("memory store poisoned")
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_cell(&self, cell: &NewCell) -> Result<CellRow, StoreError> {
        let mut inner = self.lock();
        if let Some(FailOn::CreateCell(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        if inner.cells.iter().any(|row| row.number == cell.number) {
            return Err(StoreError::DuplicateCell(cell.number));
        }

        let row = CellRow {
            id: inner.cells.len() as i64 + 1,
            number: cell.number,
            aisles_count: cell.aisles_count,
            locations_per_aisle: cell.locations_per_aisle,
            levels_per_location: cell.levels_per_location,
        };
        inner.cells.push(row.clone());
        inner.operations.push(StoreOperation::CreateCell {
            number: cell.number,
        });
        Ok(row)
    }

    async fn create_aisles(
        &self,
        cell_id: i64,
        aisles: &[NewAisle],
    ) -> Result<Vec<AisleRow>, StoreError> {
        let mut inner = self.lock();
        if let Some(FailOn::CreateAisles(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        let mut rows = Vec::with_capacity(aisles.len());
        for aisle in aisles {
            let row = AisleRow {
                id: inner.aisles.len() as i64 + 1,
                cell_id,
                number: aisle.number,
                is_odd: aisle.is_odd,
            };
            inner.aisles.push(row);
            rows.push(row);
        }
        inner.operations.push(StoreOperation::CreateAisles {
            count: aisles.len(),
        });
        Ok(rows)
    }

    async fn create_bays(&self, bays: &[NewBay]) -> Result<Vec<BayRow>, StoreError> {
        let mut inner = self.lock();
        if let Some(FailOn::CreateBays(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        let mut rows = Vec::with_capacity(bays.len());
        for bay in bays {
            let row = BayRow {
                id: inner.bays.len() as i64 + 1,
                aisle_id: bay.aisle_id,
                number: bay.number,
                width: bay.width,
            };
            inner.bays.push(row);
            rows.push(row);
        }
        inner
            .operations
            .push(StoreOperation::CreateBays { count: bays.len() });
        Ok(rows)
    }

    async fn create_locations(&self, batch: &[LocationRecord]) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if let Some(FailOn::CreateLocations {
            error,
            failing_batch,
        }) = &inner.fail_on
        {
            if inner.batch_sizes.len() >= *failing_batch {
                return Err(error.clone());
            }
        }

        inner.batch_sizes.push(batch.len());
        inner.locations.extend_from_slice(batch);
        inner.operations.push(StoreOperation::CreateLocations {
            count: batch.len(),
        });
        Ok(())
    }
}
