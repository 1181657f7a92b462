//! End-to-end layout generation against the in-memory store.
//!
//! Exercises the full Gate -> Plan -> Execute -> Verify lifecycle and the
//! batching contract at the store seam.

use std::collections::HashSet;

use rackwork::core::types::Side;
use rackwork::engine::{create_cell, CellSpec, EngineError};
use rackwork::store::memory::{FailOn, MemoryStore};
use rackwork::store::StoreError;

/// The layout of built-in cell 4: aisles 3..=16, even boundary faces,
/// 100 positions per aisle, five levels with picking.
fn cell4_spec() -> CellSpec {
    CellSpec {
        cell_number: 4,
        aisle_start: 3,
        aisle_end: 16,
        start_side: Side::Even,
        end_side: Side::Even,
        locations_per_aisle: 100,
        level_count: 5,
        has_picking: true,
    }
}

#[tokio::test]
async fn creates_the_full_location_set() {
    let store = MemoryStore::new();
    let report = create_cell(&cell4_spec(), &store).await.unwrap();

    // 2 single boundary faces + 12 double interior aisles.
    assert_eq!(report.aisles, 26);
    // ceil(100/4) bays per face.
    assert_eq!(report.bays, 26 * 25);
    // 26 faces x 50 positions x 5 levels.
    assert_eq!(report.locations, 6500);

    let cells = store.cells();
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].number, 4);
    assert_eq!(cells[0].aisles_count, 14);
    assert_eq!(cells[0].locations_per_aisle, 100);

    assert_eq!(store.locations().len(), 6500);
}

#[tokio::test]
async fn locations_are_inserted_in_batches_of_1000() {
    let store = MemoryStore::new();
    create_cell(&cell4_spec(), &store).await.unwrap();
    assert_eq!(
        store.batch_sizes(),
        vec![1000, 1000, 1000, 1000, 1000, 1000, 500]
    );
}

#[tokio::test]
async fn no_duplicate_location_triples() {
    let store = MemoryStore::new();
    create_cell(&cell4_spec(), &store).await.unwrap();

    let locations = store.locations();
    let triples: HashSet<(i64, u32, u32)> = locations
        .iter()
        .map(|r| (r.aisle_id, r.position, r.level))
        .collect();
    assert_eq!(triples.len(), locations.len());
}

#[tokio::test]
async fn picking_flag_set_exactly_on_level_zero() {
    let store = MemoryStore::new();
    create_cell(&cell4_spec(), &store).await.unwrap();

    for record in store.locations() {
        assert_eq!(record.is_picking, record.level == 0);
    }

    // Without picking, level 0 never appears.
    let store = MemoryStore::new();
    let mut spec = cell4_spec();
    spec.cell_number = 5;
    spec.has_picking = false;
    create_cell(&spec, &store).await.unwrap();
    for record in store.locations() {
        assert!(!record.is_picking);
        assert!(record.level >= 10);
    }
}

#[tokio::test]
async fn boundary_aisles_carry_a_single_face() {
    let store = MemoryStore::new();
    create_cell(&cell4_spec(), &store).await.unwrap();

    let aisles = store.aisles();
    let first: Vec<_> = aisles.iter().filter(|a| a.number == 3).collect();
    assert_eq!(first.len(), 1);
    assert!(!first[0].is_odd);

    let interior: Vec<_> = aisles.iter().filter(|a| a.number == 9).collect();
    assert_eq!(interior.len(), 2);

    // Even faces hold only even positions.
    let even_ids: HashSet<i64> = aisles.iter().filter(|a| !a.is_odd).map(|a| a.id).collect();
    for record in store.locations() {
        if even_ids.contains(&record.aisle_id) {
            assert_eq!(record.position % 2, 0);
        } else {
            assert_eq!(record.position % 2, 1);
        }
    }
}

#[tokio::test]
async fn gate_failure_touches_no_store() {
    let store = MemoryStore::new();

    let mut bad = cell4_spec();
    bad.level_count = 0;
    let err = create_cell(&bad, &store).await.unwrap_err();
    assert!(matches!(err, EngineError::Geometry(_)));
    assert!(store.operations().is_empty());

    let mut bad = cell4_spec();
    bad.aisle_start = 20;
    assert!(create_cell(&bad, &store).await.is_err());
    assert!(store.operations().is_empty());

    // Single aisle with conflicting sides is ambiguous, caught at the gate.
    let mut bad = cell4_spec();
    bad.aisle_end = bad.aisle_start;
    bad.start_side = Side::Odd;
    assert!(create_cell(&bad, &store).await.is_err());
    assert!(store.operations().is_empty());
}

#[tokio::test]
async fn store_failure_aborts_remaining_batches() {
    let store = MemoryStore::new();
    store.fail_on(FailOn::CreateLocations {
        error: StoreError::WriteFailed("connection lost".to_string()),
        failing_batch: 2,
    });

    let err = create_cell(&cell4_spec(), &store).await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Store(StoreError::WriteFailed(_))
    ));
    // Two batches landed before the failure; the engine does not retry.
    assert_eq!(store.batch_sizes(), vec![1000, 1000]);
}

#[tokio::test]
async fn odd_position_totals_favor_the_odd_face() {
    // Built-in cell 1 has 137 positions per aisle.
    let store = MemoryStore::new();
    let spec = CellSpec {
        cell_number: 1,
        aisle_start: 1,
        aisle_end: 12,
        start_side: Side::Odd,
        end_side: Side::Even,
        locations_per_aisle: 137,
        level_count: 4,
        has_picking: true,
    };
    let report = create_cell(&spec, &store).await.unwrap();

    // 1 odd face + 10 double aisles + 1 even face = 22 faces.
    assert_eq!(report.aisles, 22);
    // 11 odd faces x 69 + 11 even faces x 68 positions, 4 levels each.
    assert_eq!(report.locations, (11 * 69 + 11 * 68) * 4);

    let locations = store.locations();
    let max_position = locations.iter().map(|r| r.position).max().unwrap();
    assert_eq!(max_position, 137);
}
