//! engine::build
//!
//! Expansion of a layout plan into persistable rows.
//!
//! The store assigns surrogate ids when aisle and bay rows are created;
//! the builders here consume those ids as opaque correlation keys and
//! attach them to the location records. Building is pure: a failure
//! produces no partial output.

use crate::core::levels::is_picking;
use crate::core::types::GeometryError;
use crate::store::{AisleRow, BayRow, LocationRecord, NewAisle, NewBay};

use super::plan::{LayoutPlan, BAY_WIDTH};

/// Aisle rows to persist for a plan, in walk order.
pub fn aisle_layout(plan: &LayoutPlan) -> Vec<NewAisle> {
    plan.aisles
        .iter()
        .map(|aisle| NewAisle {
            number: aisle.number,
            is_odd: aisle.is_odd,
        })
        .collect()
}

/// Bay rows to persist: `bays_per_side` bays, numbered from 1, for every
/// created aisle face.
pub fn bay_layout(plan: &LayoutPlan, aisles: &[AisleRow]) -> Vec<NewBay> {
    aisles
        .iter()
        .flat_map(|aisle| {
            (1..=plan.bays_per_side).map(|number| NewBay {
                aisle_id: aisle.id,
                number,
                width: BAY_WIDTH,
            })
        })
        .collect()
}

/// Enumerate every storage location of the plan.
///
/// Walks each created aisle face bay by bay. Within bay index `b`, the
/// face holds up to [`BAY_WIDTH`] sub-positions; sub-position `i` maps to
/// base slot `4b + i`, and the absolute position interleaves the two
/// faces: `2*base + 1` on the odd face, `2*(base + 1)` on the even face.
/// Each position is emitted once per level in the plan's level set.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidConfiguration`] if the plan's geometry
/// is unusable (nothing is emitted in that case).
pub fn build_locations(
    plan: &LayoutPlan,
    aisles: &[AisleRow],
    bays: &[BayRow],
) -> Result<Vec<LocationRecord>, GeometryError> {
    if plan.locations_per_aisle == 0 || plan.bays_per_side == 0 || plan.levels.is_empty() {
        return Err(GeometryError::InvalidConfiguration(
            "layout plan holds no locations".to_string(),
        ));
    }

    let mut records = Vec::with_capacity(plan.expected_locations() as usize);

    for aisle in aisles {
        let mut aisle_bays: Vec<&BayRow> =
            bays.iter().filter(|bay| bay.aisle_id == aisle.id).collect();
        aisle_bays.sort_by_key(|bay| bay.number);

        for (bay_index, bay) in aisle_bays.iter().enumerate() {
            let in_bay = plan.positions_in_bay(aisle.is_odd, bay_index as u32);
            for i in 0..in_bay {
                let base = bay_index as u32 * BAY_WIDTH + i;
                let position = if aisle.is_odd {
                    base * 2 + 1
                } else {
                    (base + 1) * 2
                };

                for &level in plan.levels.iter() {
                    records.push(LocationRecord {
                        position,
                        level,
                        is_picking: is_picking(level, plan.has_picking),
                        aisle_id: aisle.id,
                        bay_id: bay.id,
                    });
                }
            }
        }
    }

    Ok(records)
}
