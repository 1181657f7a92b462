//! core::aisles
//!
//! Aisle numbering and location-side assignment.
//!
//! A cell spans a contiguous, ascending range of aisle numbers. The first
//! and last aisle carry the sides the caller requests (boundary aisles often
//! face a wall and carry a single side); every interior aisle carries both.

use serde::{Deserialize, Serialize};

use super::types::{GeometryError, Side};

/// Side assignment for one numbered aisle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AisleAssignment {
    /// The aisle number.
    pub number: u32,
    /// Which faces of this aisle carry locations.
    pub sides: Side,
}

/// Derive the side assignment for every aisle in `start..=end`.
///
/// The first element carries `start_side`, the last carries `end_side`
/// (when `end != start`), and all interior aisles carry [`Side::Both`].
///
/// # Errors
///
/// - [`GeometryError::InvalidRange`] when `start` is zero or the range
///   descends.
/// - [`GeometryError::AmbiguousSingleAisle`] when `start == end` but the
///   requested sides differ; a single-aisle cell must agree on its side.
///
/// # Example
///
/// ```
/// use rackwork::core::aisles::generate_aisle_numbers;
/// use rackwork::core::types::Side;
///
/// let aisles = generate_aisle_numbers(3, 16, Side::Even, Side::Even).unwrap();
/// assert_eq!(aisles.len(), 14);
/// assert_eq!(aisles[0].number, 3);
/// assert_eq!(aisles[0].sides, Side::Even);
/// assert!(aisles[1..13].iter().all(|a| a.sides == Side::Both));
/// assert_eq!(aisles[13].number, 16);
/// assert_eq!(aisles[13].sides, Side::Even);
/// ```
pub fn generate_aisle_numbers(
    start: u32,
    end: u32,
    start_side: Side,
    end_side: Side,
) -> Result<Vec<AisleAssignment>, GeometryError> {
    if start == 0 {
        return Err(GeometryError::InvalidRange {
            start,
            end,
            reason: "aisle numbers start at 1".to_string(),
        });
    }
    if start > end {
        return Err(GeometryError::InvalidRange {
            start,
            end,
            reason: "range must be ascending".to_string(),
        });
    }
    if start == end && start_side != end_side {
        return Err(GeometryError::AmbiguousSingleAisle {
            aisle: start,
            start_side,
            end_side,
        });
    }

    let mut aisles = Vec::with_capacity((end - start + 1) as usize);

    aisles.push(AisleAssignment {
        number: start,
        sides: start_side,
    });

    for number in start + 1..end {
        aisles.push(AisleAssignment {
            number,
            sides: Side::Both,
        });
    }

    if start != end {
        aisles.push(AisleAssignment {
            number: end,
            sides: end_side,
        });
    }

    Ok(aisles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_sides_and_interior_both() {
        let aisles = generate_aisle_numbers(3, 16, Side::Even, Side::Even).unwrap();
        assert_eq!(aisles.len(), 14);
        assert_eq!(aisles.first().unwrap().sides, Side::Even);
        assert_eq!(aisles.last().unwrap().sides, Side::Even);
        let interior: Vec<u32> = aisles[1..13].iter().map(|a| a.number).collect();
        assert_eq!(interior, (4..=15).collect::<Vec<u32>>());
        assert!(aisles[1..13].iter().all(|a| a.sides == Side::Both));
    }

    #[test]
    fn two_aisle_range_has_no_interior() {
        let aisles = generate_aisle_numbers(7, 8, Side::Odd, Side::Even).unwrap();
        assert_eq!(aisles.len(), 2);
        assert_eq!(aisles[0].sides, Side::Odd);
        assert_eq!(aisles[1].sides, Side::Even);
    }

    #[test]
    fn single_aisle_with_agreeing_sides() {
        let aisles = generate_aisle_numbers(5, 5, Side::Odd, Side::Odd).unwrap();
        assert_eq!(aisles.len(), 1);
        assert_eq!(aisles[0].number, 5);
        assert_eq!(aisles[0].sides, Side::Odd);
    }

    #[test]
    fn single_aisle_with_conflicting_sides_is_ambiguous() {
        let err = generate_aisle_numbers(5, 5, Side::Odd, Side::Even).unwrap_err();
        assert_eq!(
            err,
            GeometryError::AmbiguousSingleAisle {
                aisle: 5,
                start_side: Side::Odd,
                end_side: Side::Even,
            }
        );
    }

    #[test]
    fn descending_range_is_invalid() {
        assert!(matches!(
            generate_aisle_numbers(10, 3, Side::Both, Side::Both),
            Err(GeometryError::InvalidRange { .. })
        ));
    }

    #[test]
    fn aisle_zero_is_invalid() {
        assert!(matches!(
            generate_aisle_numbers(0, 4, Side::Both, Side::Both),
            Err(GeometryError::InvalidRange { .. })
        ));
    }
}
