//! core::address
//!
//! Address codec: normalize, parse, validate, and format location strings.
//!
//! # Formats
//!
//! - Short form `PPPP-LL`: 4-digit zero-padded position, 2-digit level
//! - Full form `C-AAA-PPPP-LL`: cell unpadded, 3-digit aisle, 4-digit
//!   position, 2-digit level
//!
//! # Layering
//!
//! [`parse_full_address`] validates format and level only. Bounds checking
//! against a cell's geometry is a separate, composable step
//! ([`check_bounds`]) so callers without a [`CellConfig`] at hand can still
//! parse, and callers with one can layer the stricter check on top.
//!
//! # Caching
//!
//! Formatted output is memoized by [`AddressFormatter`], a bounded cache
//! with a deliberate clear-all eviction policy (see its docs).

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

use super::config::schema::CellConfig;
use super::types::{
    FullAddress, Location, AISLE_WIDTH, LEVEL_MAX, LEVEL_STEP, LEVEL_WIDTH, PICKING_LEVEL,
    POSITION_WIDTH,
};

/// Errors from address parsing and validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The string does not match the short or full address pattern.
    #[error("invalid address format: '{0}'")]
    InvalidFormat(String),

    /// The level is not in the valid discrete set.
    #[error("invalid level {level}: valid levels are 0 and multiples of 10 up to {max}")]
    InvalidLevel { level: u32, max: u32 },

    /// The aisle is outside the cell's configured range.
    #[error("invalid aisle {aisle}: cell {cell} has aisles 1..={max}")]
    InvalidAisle { aisle: u32, cell: u32, max: u32 },

    /// The position is outside the cell's configured range.
    #[error("invalid position {position}: cell {cell} has positions 1..={max}")]
    InvalidPosition { position: u32, cell: u32, max: u32 },
}

/// Zero-pad one address part to `width` characters.
///
/// Parts already at or beyond `width` pass through unchanged.
fn pad_part(part: &str, width: usize) -> String {
    let len = part.chars().count();
    if len >= width {
        part.to_string()
    } else {
        format!("{}{}", "0".repeat(width - len), part)
    }
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())
}

/// Normalize a short location string (`position-level`).
///
/// `"54-20"` becomes `"0054-20"`. Anything that does not split into
/// exactly two parts is returned unchanged; this is an explicit
/// non-failing passthrough and callers must re-validate.
///
/// Idempotent: normalizing a normalized string is a no-op.
///
/// # Example
///
/// ```
/// use rackwork::core::address::normalize_location;
///
/// assert_eq!(normalize_location("54-20"), "0054-20");
/// assert_eq!(normalize_location("0054-20"), "0054-20");
/// assert_eq!(normalize_location("not-a-location-at-all"), "not-a-location-at-all");
/// ```
pub fn normalize_location(location: &str) -> String {
    let parts: Vec<&str> = location.split('-').collect();
    if parts.len() != 2 {
        return location.to_string();
    }
    format!(
        "{}-{}",
        pad_part(parts[0], POSITION_WIDTH),
        pad_part(parts[1], LEVEL_WIDTH)
    )
}

/// Normalize a full address string (`cell-aisle-position-level`).
///
/// The cell is left unpadded; aisle, position, and level are zero-padded
/// to 3, 4, and 2 digits. Anything that does not split into exactly four
/// parts is returned unchanged.
///
/// # Example
///
/// ```
/// use rackwork::core::address::normalize_address;
///
/// assert_eq!(normalize_address("4-16-26-10"), "4-016-0026-10");
/// assert_eq!(normalize_address("4-16-26"), "4-16-26");
/// ```
pub fn normalize_address(address: &str) -> String {
    let parts: Vec<&str> = address.split('-').collect();
    if parts.len() != 4 {
        return address.to_string();
    }
    format!(
        "{}-{}-{}-{}",
        parts[0],
        pad_part(parts[1], AISLE_WIDTH),
        pad_part(parts[2], POSITION_WIDTH),
        pad_part(parts[3], LEVEL_WIDTH)
    )
}

/// Whether `level` is in the fixed discrete set {0, 10, 20, 30, 40}.
///
/// Used when no cell configuration is supplied.
pub fn is_valid_level(level: u32) -> bool {
    level == PICKING_LEVEL
        || (level % LEVEL_STEP == 0 && level >= LEVEL_STEP && level <= LEVEL_MAX)
}

/// Whether `level` is valid for the given cell: 0 plus multiples of 10 up
/// to the cell's configured maximum.
pub fn is_valid_level_for(level: u32, config: &CellConfig) -> bool {
    level == PICKING_LEVEL
        || (level % LEVEL_STEP == 0 && level >= LEVEL_STEP && level <= config.max_level())
}

/// Normalize and split a full address into validated numeric components.
///
/// Checks the pattern `^(\d{1,2})-(\d{3})-(\d{4})-(\d{2})$` against the
/// normalized string; does not validate the level or any bounds.
fn parse_components(address: &str) -> Result<FullAddress, AddressError> {
    let normalized = normalize_address(address);
    let parts: Vec<&str> = normalized.split('-').collect();
    if parts.len() != 4 {
        return Err(AddressError::InvalidFormat(address.to_string()));
    }

    let (cell, aisle, position, level) = (parts[0], parts[1], parts[2], parts[3]);
    let shape_ok = is_digits(cell)
        && cell.len() <= 2
        && is_digits(aisle)
        && aisle.len() == AISLE_WIDTH
        && is_digits(position)
        && position.len() == POSITION_WIDTH
        && is_digits(level)
        && level.len() == LEVEL_WIDTH;
    if !shape_ok {
        return Err(AddressError::InvalidFormat(address.to_string()));
    }

    // Parses cannot fail after the digit checks above, but stay typed.
    let parse = |s: &str| {
        s.parse::<u32>()
            .map_err(|_| AddressError::InvalidFormat(address.to_string()))
    };
    Ok(FullAddress {
        cell: parse(cell)?,
        aisle: parse(aisle)?,
        position: parse(position)?,
        level: parse(level)?,
    })
}

/// Parse and validate a full warehouse address.
///
/// The string is normalized first, so `"4-16-26-10"` and
/// `"4-016-0026-10"` parse identically. The level is validated against the
/// fixed discrete set {0, 10, 20, 30, 40}; aisle and position ranges are
/// NOT checked here - layer [`check_bounds`] on top when a [`CellConfig`]
/// is available.
///
/// # Errors
///
/// - [`AddressError::InvalidFormat`] when the pattern does not match
/// - [`AddressError::InvalidLevel`] when the level is not in the set
///
/// # Example
///
/// ```
/// use rackwork::core::address::{parse_full_address, AddressError};
///
/// let addr = parse_full_address("4-16-26-10").unwrap();
/// assert_eq!((addr.cell, addr.aisle, addr.position, addr.level), (4, 16, 26, 10));
///
/// assert!(matches!(
///     parse_full_address("4-016-0026-99"),
///     Err(AddressError::InvalidLevel { level: 99, .. })
/// ));
/// ```
pub fn parse_full_address(address: &str) -> Result<FullAddress, AddressError> {
    let addr = parse_components(address)?;
    if !is_valid_level(addr.level) {
        return Err(AddressError::InvalidLevel {
            level: addr.level,
            max: LEVEL_MAX,
        });
    }
    Ok(addr)
}

/// Parse a full address, validating the level against a specific cell's
/// configuration instead of the fixed set.
///
/// A cell with six levels per location accepts level 50 here even though
/// the fixed set tops out at 40. Aisle and position bounds are still left
/// to [`check_bounds`].
pub fn parse_full_address_in(
    address: &str,
    config: &CellConfig,
) -> Result<FullAddress, AddressError> {
    let addr = parse_components(address)?;
    if !is_valid_level_for(addr.level, config) {
        return Err(AddressError::InvalidLevel {
            level: addr.level,
            max: config.max_level(),
        });
    }
    Ok(addr)
}

/// Check a parsed address against a cell's geometry.
///
/// The decorating validation step layered over [`parse_full_address`]:
/// callers that hold the referenced cell's [`CellConfig`] use this to
/// reject aisles and positions outside the configured ranges.
///
/// # Errors
///
/// [`AddressError::InvalidAisle`] / [`AddressError::InvalidPosition`].
pub fn check_bounds(addr: &FullAddress, config: &CellConfig) -> Result<(), AddressError> {
    if addr.aisle == 0 || addr.aisle > config.aisles_count {
        return Err(AddressError::InvalidAisle {
            aisle: addr.aisle,
            cell: config.cell,
            max: config.aisles_count,
        });
    }
    if addr.position == 0 || addr.position > config.locations_per_aisle {
        return Err(AddressError::InvalidPosition {
            position: addr.position,
            cell: config.cell,
            max: config.locations_per_aisle,
        });
    }
    Ok(())
}

/// Validate and normalize a short location string.
///
/// Returns the normalized `PPPP-LL` string.
///
/// # Errors
///
/// - [`AddressError::InvalidFormat`] when the pattern does not match
/// - [`AddressError::InvalidLevel`] when the level is not in the fixed set
pub fn validate_location(location: &str) -> Result<String, AddressError> {
    let normalized = normalize_location(location);
    let parts: Vec<&str> = normalized.split('-').collect();
    if parts.len() != 2
        || !is_digits(parts[0])
        || parts[0].len() != POSITION_WIDTH
        || !is_digits(parts[1])
        || parts[1].len() != LEVEL_WIDTH
    {
        return Err(AddressError::InvalidFormat(location.to_string()));
    }

    let level: u32 = parts[1]
        .parse()
        .map_err(|_| AddressError::InvalidFormat(location.to_string()))?;
    if !is_valid_level(level) {
        return Err(AddressError::InvalidLevel {
            level,
            max: LEVEL_MAX,
        });
    }

    Ok(normalized)
}

/// Whether a short location string is well-formed with a valid level.
pub fn is_valid_location(location: &str) -> bool {
    validate_location(location).is_ok()
}

/// Parse a short location string into its components.
///
/// # Example
///
/// ```
/// use rackwork::core::address::parse_location;
///
/// let loc = parse_location("54-20").unwrap();
/// assert_eq!((loc.position, loc.level), (54, 20));
/// ```
pub fn parse_location(location: &str) -> Result<Location, AddressError> {
    let normalized = validate_location(location)?;
    let parts: Vec<&str> = normalized.split('-').collect();
    let parse = |s: &str| {
        s.parse::<u32>()
            .map_err(|_| AddressError::InvalidFormat(location.to_string()))
    };
    Ok(Location {
        position: parse(parts[0])?,
        level: parse(parts[1])?,
    })
}

/// Format a full address as its canonical string (inverse of parsing).
pub fn format_address(addr: &FullAddress) -> String {
    format!(
        "{}-{:03}-{:04}-{:02}",
        addr.cell, addr.aisle, addr.position, addr.level
    )
}

/// Memoizing formatter for full addresses.
///
/// Formatted strings are cached by the composite
/// `(cell, aisle, position, level)` key. The cache is bounded: once an
/// insert would push it past its capacity, the entire cache is cleared.
/// Clear-all is the deliberate eviction policy - a testable property of
/// the formatter, not an optimization opportunity.
///
/// The cache is mutex-guarded so a formatter shared across threads is
/// safe; entries are immutable once written.
///
/// # Example
///
/// ```
/// use rackwork::core::address::AddressFormatter;
/// use rackwork::core::types::FullAddress;
///
/// let formatter = AddressFormatter::new();
/// let addr = FullAddress { cell: 4, aisle: 16, position: 26, level: 10 };
/// assert_eq!(formatter.format(&addr), "4-016-0026-10");
/// assert_eq!(formatter.cached(), 1);
/// ```
#[derive(Debug)]
pub struct AddressFormatter {
    cache: Mutex<HashMap<FullAddress, String>>,
    capacity: usize,
}

impl AddressFormatter {
    /// Default cache capacity.
    pub const DEFAULT_CAPACITY: usize = 1000;

    /// Create a formatter with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a formatter with an explicit cache capacity.
    ///
    /// Capacity 0 disables retention: every format clears the previous
    /// entry, leaving at most one cached string.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
            capacity,
        }
    }

    /// Format an address, serving repeats from the cache.
    pub fn format(&self, addr: &FullAddress) -> String {
        let mut cache = self.cache.lock().expect("address cache poisoned");
        if let Some(formatted) = cache.get(addr) {
            return formatted.clone();
        }

        let formatted = format_address(addr);
        if cache.len() >= self.capacity {
            cache.clear();
        }
        cache.insert(*addr, formatted.clone());
        formatted
    }

    /// Number of cached entries.
    pub fn cached(&self) -> usize {
        self.cache.lock().expect("address cache poisoned").len()
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.cache.lock().expect("address cache poisoned").clear();
    }
}

impl Default for AddressFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(levels_per_location: u32) -> CellConfig {
        CellConfig {
            cell: 4,
            aisles_count: 16,
            locations_per_aisle: 100,
            levels_per_location,
        }
    }

    #[test]
    fn normalize_location_pads_both_parts() {
        assert_eq!(normalize_location("54-20"), "0054-20");
        assert_eq!(normalize_location("5-0"), "0005-00");
    }

    #[test]
    fn normalize_location_passes_through_other_shapes() {
        assert_eq!(normalize_location("54"), "54");
        assert_eq!(normalize_location("54-20-1"), "54-20-1");
        assert_eq!(normalize_location(""), "");
    }

    #[test]
    fn normalize_address_leaves_cell_unpadded() {
        assert_eq!(normalize_address("4-16-26-10"), "4-016-0026-10");
        assert_eq!(normalize_address("12-1-1-0"), "12-001-0001-00");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["54-20", "0054-20", "4-16-26-10", "garbage", "a-b-c"] {
            assert_eq!(normalize_location(&normalize_location(s)), normalize_location(s));
            assert_eq!(normalize_address(&normalize_address(s)), normalize_address(s));
        }
    }

    #[test]
    fn parse_accepts_unnormalized_input() {
        let addr = parse_full_address("4-16-26-10").unwrap();
        assert_eq!(
            addr,
            FullAddress {
                cell: 4,
                aisle: 16,
                position: 26,
                level: 10
            }
        );
    }

    #[test]
    fn parse_rejects_bad_shapes() {
        for s in [
            "4-16-26",          // too few parts
            "4-16-26-10-2",     // too many parts
            "444-016-0026-10",  // cell too wide
            "4-0016-0026-10",   // aisle too wide
            "4-016-00026-10",   // position too wide
            "4-016-0026-100",   // level too wide
            "4-01x-0026-10",    // non-digit
            "",
        ] {
            assert!(
                matches!(parse_full_address(s), Err(AddressError::InvalidFormat(_))),
                "expected InvalidFormat for '{}'",
                s
            );
        }
    }

    #[test]
    fn parse_rejects_off_step_levels() {
        assert_eq!(
            parse_full_address("4-016-0026-99"),
            Err(AddressError::InvalidLevel {
                level: 99,
                max: LEVEL_MAX
            })
        );
        assert!(parse_full_address("4-016-0026-05").is_err());
    }

    #[test]
    fn parse_does_not_bound_check_ranges() {
        // Aisle 999 and position 9999 are far past any real cell, but the
        // authoritative parse leaves range checks to the caller.
        let addr = parse_full_address("4-999-9999-10").unwrap();
        assert_eq!(addr.aisle, 999);
        assert_eq!(addr.position, 9999);
    }

    #[test]
    fn config_aware_parse_uses_cell_maximum() {
        let tall = config(6); // levels up to 60
        let addr = parse_full_address_in("4-016-0026-50", &tall).unwrap();
        assert_eq!(addr.level, 50);

        // The fixed set tops out at 40.
        assert!(parse_full_address("4-016-0026-50").is_err());

        let short = config(2); // levels up to 20
        assert_eq!(
            parse_full_address_in("4-016-0026-30", &short),
            Err(AddressError::InvalidLevel { level: 30, max: 20 })
        );
    }

    #[test]
    fn bounds_check_is_layered_separately() {
        let config = config(4);
        let ok = parse_full_address("4-016-0100-10").unwrap();
        assert!(check_bounds(&ok, &config).is_ok());

        let bad_aisle = parse_full_address("4-017-0026-10").unwrap();
        assert_eq!(
            check_bounds(&bad_aisle, &config),
            Err(AddressError::InvalidAisle {
                aisle: 17,
                cell: 4,
                max: 16
            })
        );

        let bad_position = parse_full_address("4-016-0101-10").unwrap();
        assert_eq!(
            check_bounds(&bad_position, &config),
            Err(AddressError::InvalidPosition {
                position: 101,
                cell: 4,
                max: 100
            })
        );

        let zero_position = parse_full_address("4-016-0000-10").unwrap();
        assert!(check_bounds(&zero_position, &config).is_err());
    }

    #[test]
    fn short_form_parses_and_validates() {
        assert_eq!(
            parse_location("54-20").unwrap(),
            Location {
                position: 54,
                level: 20
            }
        );
        assert!(is_valid_location("0054-20"));
        assert!(!is_valid_location("54-99"));
        assert!(!is_valid_location("54"));
    }

    #[test]
    fn format_is_inverse_of_parse() {
        let addr = FullAddress {
            cell: 12,
            aisle: 3,
            position: 7,
            level: 0,
        };
        let formatted = format_address(&addr);
        assert_eq!(formatted, "12-003-0007-00");
        assert_eq!(parse_full_address(&formatted).unwrap(), addr);
    }

    #[test]
    fn formatter_serves_repeats_from_cache() {
        let formatter = AddressFormatter::new();
        let addr = FullAddress {
            cell: 4,
            aisle: 16,
            position: 26,
            level: 10,
        };
        assert_eq!(formatter.format(&addr), "4-016-0026-10");
        assert_eq!(formatter.format(&addr), "4-016-0026-10");
        assert_eq!(formatter.cached(), 1);
    }

    #[test]
    fn cache_clears_all_when_capacity_exceeded() {
        let formatter = AddressFormatter::new();
        for position in 1..=1001u32 {
            formatter.format(&FullAddress {
                cell: 1,
                aisle: 1,
                position,
                level: 0,
            });
        }
        // The 1001st insert tripped the clear-all; only it remains.
        assert_eq!(formatter.cached(), 1);
    }

    #[test]
    fn small_capacity_clears_early() {
        let formatter = AddressFormatter::with_capacity(3);
        for position in 1..=4u32 {
            formatter.format(&FullAddress {
                cell: 1,
                aisle: 1,
                position,
                level: 0,
            });
        }
        assert_eq!(formatter.cached(), 1);
    }

    #[test]
    fn explicit_clear_empties_cache() {
        let formatter = AddressFormatter::new();
        formatter.format(&FullAddress {
            cell: 1,
            aisle: 1,
            position: 1,
            level: 0,
        });
        formatter.clear();
        assert_eq!(formatter.cached(), 0);
    }
}
