//! engine::verify
//!
//! Post-execution verification of a built layout.
//!
//! Verification failure after a successful execution indicates a bug in
//! the planner or builder, never a user error; it is surfaced loudly and
//! the emitted counts are not to be trusted.

use std::collections::HashSet;

use thiserror::Error;

use crate::store::LocationRecord;

use super::plan::LayoutPlan;

/// Errors from layout verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// The number of emitted records differs from the plan's arithmetic.
    #[error("location count mismatch: plan expects {expected}, built {actual}")]
    CountMismatch { expected: u64, actual: u64 },

    /// The same (aisle, position, level) triple was emitted twice.
    #[error("duplicate location: aisle id {aisle_id}, position {position}, level {level}")]
    DuplicateLocation {
        aisle_id: i64,
        position: u32,
        level: u32,
    },

    /// A record's picking flag disagrees with the cell's picking policy.
    #[error("picking flag mismatch at position {position}, level {level}")]
    PickingMismatch { position: u32, level: u32 },
}

/// Check a built location set against its plan.
///
/// Verifies the total count, the uniqueness of every
/// `(aisle_id, position, level)` triple, and the picking flags.
pub fn verify_locations(
    plan: &LayoutPlan,
    records: &[LocationRecord],
) -> Result<(), VerifyError> {
    let expected = plan.expected_locations();
    if records.len() as u64 != expected {
        return Err(VerifyError::CountMismatch {
            expected,
            actual: records.len() as u64,
        });
    }

    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert((record.aisle_id, record.position, record.level)) {
            return Err(VerifyError::DuplicateLocation {
                aisle_id: record.aisle_id,
                position: record.position,
                level: record.level,
            });
        }
        if record.is_picking != (plan.has_picking && record.level == 0) {
            return Err(VerifyError::PickingMismatch {
                position: record.position,
                level: record.level,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Side;
    use crate::engine::build::{aisle_layout, bay_layout, build_locations};
    use crate::engine::plan::CellSpec;
    use crate::store::{AisleRow, BayRow};

    fn built() -> (LayoutPlan, Vec<LocationRecord>) {
        let spec = CellSpec {
            cell_number: 2,
            aisle_start: 1,
            aisle_end: 3,
            start_side: Side::Both,
            end_side: Side::Both,
            locations_per_aisle: 12,
            level_count: 3,
            has_picking: true,
        };
        let plan = LayoutPlan::new(&spec).unwrap();
        let aisles: Vec<AisleRow> = aisle_layout(&plan)
            .iter()
            .enumerate()
            .map(|(i, a)| AisleRow {
                id: i as i64 + 1,
                cell_id: 1,
                number: a.number,
                is_odd: a.is_odd,
            })
            .collect();
        let bays: Vec<BayRow> = bay_layout(&plan, &aisles)
            .iter()
            .enumerate()
            .map(|(i, b)| BayRow {
                id: i as i64 + 1,
                aisle_id: b.aisle_id,
                number: b.number,
                width: b.width,
            })
            .collect();
        let records = build_locations(&plan, &aisles, &bays).unwrap();
        (plan, records)
    }

    #[test]
    fn clean_build_verifies() {
        let (plan, records) = built();
        assert_eq!(verify_locations(&plan, &records), Ok(()));
    }

    #[test]
    fn missing_record_is_a_count_mismatch() {
        let (plan, mut records) = built();
        records.pop();
        assert!(matches!(
            verify_locations(&plan, &records),
            Err(VerifyError::CountMismatch { .. })
        ));
    }

    #[test]
    fn duplicated_record_is_caught() {
        let (plan, mut records) = built();
        records.pop();
        let dup = records[0];
        records.push(dup);
        assert!(matches!(
            verify_locations(&plan, &records),
            Err(VerifyError::DuplicateLocation { .. })
        ));
    }

    #[test]
    fn wrong_picking_flag_is_caught() {
        let (plan, mut records) = built();
        let idx = records.iter().position(|r| r.level == 0).unwrap();
        records[idx].is_picking = false;
        assert!(matches!(
            verify_locations(&plan, &records),
            Err(VerifyError::PickingMismatch { .. })
        ));
    }
}
