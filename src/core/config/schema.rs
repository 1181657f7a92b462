//! core::config::schema
//!
//! Cell registry schema types.
//!
//! # Registry File
//!
//! A registry file is TOML with one `[[cells]]` table per cell:
//!
//! ```toml
//! [[cells]]
//! cell = 1
//! aisles_count = 12
//! locations_per_aisle = 137
//! levels_per_location = 4
//! ```
//!
//! # Validation
//!
//! Values are validated after parsing: every geometry parameter must be
//! positive and cell numbers must be unique across the file.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::LEVEL_STEP;

/// Geometry for one warehouse cell.
///
/// Immutable once published: the registry never mutates a cell at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CellConfig {
    /// The cell number (unique across the registry).
    pub cell: u32,

    /// Number of aisles in the cell.
    pub aisles_count: u32,

    /// Number of positions per aisle, across both faces.
    pub locations_per_aisle: u32,

    /// Number of vertical levels per position.
    pub levels_per_location: u32,
}

impl CellConfig {
    /// The highest valid level for this cell.
    pub fn max_level(&self) -> u32 {
        self.levels_per_location * LEVEL_STEP
    }

    /// Validate the geometry values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any parameter is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell == 0 {
            return Err(ConfigError::InvalidValue(
                "cell number must be positive".to_string(),
            ));
        }
        if self.aisles_count == 0 {
            return Err(ConfigError::InvalidValue(format!(
                "cell {}: aisles_count must be positive",
                self.cell
            )));
        }
        if self.locations_per_aisle == 0 {
            return Err(ConfigError::InvalidValue(format!(
                "cell {}: locations_per_aisle must be positive",
                self.cell
            )));
        }
        if self.levels_per_location == 0 {
            return Err(ConfigError::InvalidValue(format!(
                "cell {}: levels_per_location must be positive",
                self.cell
            )));
        }
        Ok(())
    }
}

/// On-disk registry file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryFile {
    /// The cell definitions, in file order.
    pub cells: Vec<CellConfig>,
}

impl RegistryFile {
    /// Validate every cell and the uniqueness invariant.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on bad geometry or a duplicate
    /// cell number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for cell in &self.cells {
            cell.validate()?;
            if !seen.insert(cell.cell) {
                return Err(ConfigError::InvalidValue(format!(
                    "duplicate cell number {}",
                    cell.cell
                )));
            }
        }
        Ok(())
    }
}
