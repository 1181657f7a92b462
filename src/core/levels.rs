//! core::levels
//!
//! Vertical level generation for a cell.
//!
//! Levels are multiples of [`LEVEL_STEP`]. When a cell has a picking level,
//! the ground slot 0 occupies one of the configured level slots; otherwise
//! every slot is a storage level starting at 10.

use serde::{Deserialize, Serialize};

use super::types::{GeometryError, LEVEL_STEP, PICKING_LEVEL};

/// The ordered set of valid vertical levels for a cell.
///
/// Invariant: strictly increasing, multiples of [`LEVEL_STEP`], no
/// duplicates. Built only by [`generate_levels`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelSet(Vec<u32>);

impl LevelSet {
    /// The levels, lowest first.
    pub fn levels(&self) -> &[u32] {
        &self.0
    }

    /// Number of levels in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `level` is a member of the set.
    pub fn contains(&self, level: u32) -> bool {
        self.0.contains(&level)
    }

    /// The highest level in the set.
    pub fn max_level(&self) -> Option<u32> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.0.iter()
    }
}

/// Generate the ordered set of valid levels for a cell.
///
/// With picking, the picking level occupies slot 0 and consumes one of the
/// `levels_per_location` slots; without it, all slots are storage levels:
///
/// - `generate_levels(5, true)` -> `[0, 10, 20, 30, 40]`
/// - `generate_levels(4, false)` -> `[10, 20, 30, 40]`
///
/// # Errors
///
/// Returns [`GeometryError::InvalidConfiguration`] when
/// `levels_per_location` is zero.
///
/// # Example
///
/// ```
/// use rackwork::core::levels::generate_levels;
///
/// let levels = generate_levels(5, true).unwrap();
/// assert_eq!(levels.levels(), &[0, 10, 20, 30, 40]);
///
/// let levels = generate_levels(4, false).unwrap();
/// assert_eq!(levels.levels(), &[10, 20, 30, 40]);
///
/// assert!(generate_levels(0, true).is_err());
/// ```
pub fn generate_levels(
    levels_per_location: u32,
    has_picking: bool,
) -> Result<LevelSet, GeometryError> {
    if levels_per_location == 0 {
        return Err(GeometryError::InvalidConfiguration(
            "levels per location must be positive".to_string(),
        ));
    }

    let levels = if has_picking {
        (0..levels_per_location).map(|i| i * LEVEL_STEP).collect()
    } else {
        (1..=levels_per_location).map(|i| i * LEVEL_STEP).collect()
    };

    Ok(LevelSet(levels))
}

/// Whether `level` is the picking level for a cell with the given policy.
pub fn is_picking(level: u32, has_picking: bool) -> bool {
    has_picking && level == PICKING_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picking_occupies_slot_zero() {
        let levels = generate_levels(5, true).unwrap();
        assert_eq!(levels.levels(), &[0, 10, 20, 30, 40]);
        assert_eq!(levels.len(), 5);
    }

    #[test]
    fn no_picking_starts_at_ten() {
        let levels = generate_levels(4, false).unwrap();
        assert_eq!(levels.levels(), &[10, 20, 30, 40]);
        assert_eq!(levels.len(), 4);
    }

    #[test]
    fn single_level_cases() {
        assert_eq!(generate_levels(1, true).unwrap().levels(), &[0]);
        assert_eq!(generate_levels(1, false).unwrap().levels(), &[10]);
    }

    #[test]
    fn zero_levels_is_invalid() {
        assert!(matches!(
            generate_levels(0, false),
            Err(GeometryError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            generate_levels(0, true),
            Err(GeometryError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn strictly_increasing() {
        for has_picking in [true, false] {
            let levels = generate_levels(12, has_picking).unwrap();
            for pair in levels.levels().windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn picking_predicate() {
        assert!(is_picking(0, true));
        assert!(!is_picking(0, false));
        assert!(!is_picking(10, true));
    }

    #[test]
    fn max_level_matches_configuration() {
        assert_eq!(generate_levels(4, false).unwrap().max_level(), Some(40));
        assert_eq!(generate_levels(4, true).unwrap().max_level(), Some(30));
    }
}
