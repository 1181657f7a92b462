//! store::jsonl
//!
//! File-backed store emitting JSON Lines for downstream import.
//!
//! # Format
//!
//! One JSON object per line, internally tagged by `kind` (`cell`,
//! `aisle`, `bay`, `location`), in write order. A sibling
//! `<name>.manifest.json` summarizes the run: row counts, the layout
//! plan's digest, and an RFC3339 timestamp.
//!
//! Surrogate ids are assigned here, sequentially per table, exactly as a
//! database with autoincrement keys would.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::types::PlanDigest;

use super::traits::{
    AisleRow, BayRow, CellRow, LocationRecord, NewAisle, NewBay, NewCell, Store, StoreError,
};

/// One tagged line of the export file.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ExportRecord<'a> {
    Cell(&'a CellRow),
    Aisle(&'a AisleRow),
    Bay(&'a BayRow),
    Location(&'a LocationRecord),
}

/// Import manifest written next to the records file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub cell_number: u32,
    pub aisles: usize,
    pub bays: usize,
    pub locations: usize,
    pub digest: PlanDigest,
    pub created_at: String,
}

/// JSON Lines store.
#[derive(Debug)]
pub struct JsonlStore {
    path: PathBuf,
    inner: Mutex<JsonlInner>,
}

#[derive(Debug)]
struct JsonlInner {
    writer: BufWriter<File>,
    next_cell_id: i64,
    next_aisle_id: i64,
    next_bay_id: i64,
    cell_number: Option<u32>,
    aisle_rows: usize,
    bay_rows: usize,
    location_rows: usize,
}

impl JsonlStore {
    /// Create (or truncate) the records file at `path`.
    pub fn create(path: &Path) -> Result<Self, StoreError> {
        let file = File::create(path).map_err(|err| StoreError::Io(err.to_string()))?;
        Ok(Self {
            path: path.to_path_buf(),
            inner: Mutex::new(JsonlInner {
                writer: BufWriter::new(file),
                next_cell_id: 1,
                next_aisle_id: 1,
                next_bay_id: 1,
                cell_number: None,
                aisle_rows: 0,
                bay_rows: 0,
                location_rows: 0,
            }),
        })
    }

    /// Path of the records file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path the manifest is written to.
    pub fn manifest_path(&self) -> PathBuf {
        self.path.with_extension("manifest.json")
    }

    /// Flush the records file and write the import manifest.
    ///
    /// Call after a successful creation run; `digest` is the executed
    /// plan's digest.
    pub fn write_manifest(&self, digest: &PlanDigest) -> Result<PathBuf, StoreError> {
        let mut inner = self.lock();
        inner
            .writer
            .flush()
            .map_err(|err| StoreError::Io(err.to_string()))?;

        let manifest = Manifest {
            cell_number: inner.cell_number.unwrap_or_default(),
            aisles: inner.aisle_rows,
            bays: inner.bay_rows,
            locations: inner.location_rows,
            digest: digest.clone(),
            created_at: Utc::now().to_rfc3339(),
        };

        let path = self.manifest_path();
        let json = serde_json::to_string_pretty(&manifest)
            .map_err(|err| StoreError::WriteFailed(err.to_string()))?;
        std::fs::write(&path, json).map_err(|err| StoreError::Io(err.to_string()))?;
        Ok(path)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, JsonlInner> {
        self.inner.lock().expect("jsonl store poisoned")
    }
}

fn write_line(inner: &mut JsonlInner, record: &ExportRecord<'_>) -> Result<(), StoreError> {
    let json =
        serde_json::to_string(record).map_err(|err| StoreError::WriteFailed(err.to_string()))?;
    writeln!(inner.writer, "{}", json).map_err(|err| StoreError::Io(err.to_string()))
}

#[async_trait]
impl Store for JsonlStore {
    async fn create_cell(&self, cell: &NewCell) -> Result<CellRow, StoreError> {
        let mut inner = self.lock();
        if inner.cell_number == Some(cell.number) {
            return Err(StoreError::DuplicateCell(cell.number));
        }

        let row = CellRow {
            id: inner.next_cell_id,
            number: cell.number,
            aisles_count: cell.aisles_count,
            locations_per_aisle: cell.locations_per_aisle,
            levels_per_location: cell.levels_per_location,
        };
        inner.next_cell_id += 1;
        inner.cell_number = Some(cell.number);
        write_line(&mut inner, &ExportRecord::Cell(&row))?;
        Ok(row)
    }

    async fn create_aisles(
        &self,
        cell_id: i64,
        aisles: &[NewAisle],
    ) -> Result<Vec<AisleRow>, StoreError> {
        let mut inner = self.lock();
        let mut rows = Vec::with_capacity(aisles.len());
        for aisle in aisles {
            let row = AisleRow {
                id: inner.next_aisle_id,
                cell_id,
                number: aisle.number,
                is_odd: aisle.is_odd,
            };
            inner.next_aisle_id += 1;
            write_line(&mut inner, &ExportRecord::Aisle(&row))?;
            rows.push(row);
        }
        inner.aisle_rows += rows.len();
        Ok(rows)
    }

    async fn create_bays(&self, bays: &[NewBay]) -> Result<Vec<BayRow>, StoreError> {
        let mut inner = self.lock();
        let mut rows = Vec::with_capacity(bays.len());
        for bay in bays {
            let row = BayRow {
                id: inner.next_bay_id,
                aisle_id: bay.aisle_id,
                number: bay.number,
                width: bay.width,
            };
            inner.next_bay_id += 1;
            write_line(&mut inner, &ExportRecord::Bay(&row))?;
            rows.push(row);
        }
        inner.bay_rows += rows.len();
        Ok(rows)
    }

    async fn create_locations(&self, batch: &[LocationRecord]) -> Result<(), StoreError> {
        let mut inner = self.lock();
        for record in batch {
            write_line(&mut inner, &ExportRecord::Location(record))?;
        }
        inner.location_rows += batch.len();
        Ok(())
    }
}
