//! core::config
//!
//! Cell registry: per-cell geometry parameters, loaded once and read-only
//! thereafter.
//!
//! # Sources
//!
//! Searched in order; the first file found wins, and the built-in table is
//! used when no file exists:
//!
//! 1. An explicit path (the `--cells` flag)
//! 2. `$RACKWORK_CELLS` if set
//! 3. `$XDG_CONFIG_HOME/rackwork/cells.toml`
//! 4. `~/.rackwork/cells.toml`
//!
//! A missing file is not an error (the built-in table applies); a file
//! that exists but cannot be read or parsed is.
//!
//! # Example
//!
//! ```
//! use rackwork::core::config::CellRegistry;
//!
//! let registry = CellRegistry::builtin();
//! let config = registry.get(1).unwrap();
//! assert_eq!(config.locations_per_aisle, 137);
//! assert!(registry.get(99).is_err());
//! ```

pub mod schema;

pub use schema::{CellConfig, RegistryFile};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from registry operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No cell with the requested number exists in the registry.
    #[error("cell {0} not found")]
    CellNotFound(u32),

    #[error("failed to read cells file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse cells file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid cells value: {0}")]
    InvalidValue(String),
}

/// Where a registry's definitions came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    /// The compiled-in cell table.
    Builtin,
    /// A cells file on disk.
    File(PathBuf),
}

impl std::fmt::Display for RegistrySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrySource::Builtin => write!(f, "built-in"),
            RegistrySource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Result of loading the registry.
#[derive(Debug)]
pub struct RegistryLoadResult {
    pub registry: CellRegistry,
    pub source: RegistrySource,
}

/// Read-only lookup table of cell geometries.
///
/// Invariant: cell numbers are unique; every entry has validated,
/// positive geometry.
#[derive(Debug, Clone)]
pub struct CellRegistry {
    cells: Vec<CellConfig>,
}

impl CellRegistry {
    /// The compiled-in cell table.
    pub fn builtin() -> Self {
        Self {
            cells: vec![
                CellConfig {
                    cell: 1,
                    aisles_count: 12,
                    locations_per_aisle: 137,
                    levels_per_location: 4,
                },
                CellConfig {
                    cell: 2,
                    aisles_count: 15,
                    locations_per_aisle: 100,
                    levels_per_location: 4,
                },
                CellConfig {
                    cell: 3,
                    aisles_count: 20,
                    locations_per_aisle: 100,
                    levels_per_location: 4,
                },
                CellConfig {
                    cell: 4,
                    aisles_count: 16,
                    locations_per_aisle: 100,
                    levels_per_location: 4,
                },
            ],
        }
    }

    /// Build a registry from explicit cell definitions.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on bad geometry or duplicate
    /// cell numbers.
    pub fn from_cells(cells: Vec<CellConfig>) -> Result<Self, ConfigError> {
        let file = RegistryFile { cells };
        file.validate()?;
        Ok(Self { cells: file.cells })
    }

    /// Load the registry from the default locations.
    ///
    /// With `override_path`, that file is required to exist. Otherwise the
    /// standard candidates are probed and the built-in table is the
    /// fallback.
    ///
    /// # Errors
    ///
    /// Returns an error if a chosen file cannot be read, parsed, or
    /// validated. A missing default-location file is not an error.
    pub fn load(override_path: Option<&Path>) -> Result<RegistryLoadResult, ConfigError> {
        if let Some(path) = override_path {
            let registry = Self::from_file(path)?;
            return Ok(RegistryLoadResult {
                registry,
                source: RegistrySource::File(path.to_path_buf()),
            });
        }

        for candidate in Self::default_candidates() {
            if candidate.exists() {
                let registry = Self::from_file(&candidate)?;
                return Ok(RegistryLoadResult {
                    registry,
                    source: RegistrySource::File(candidate),
                });
            }
        }

        Ok(RegistryLoadResult {
            registry: Self::builtin(),
            source: RegistrySource::Builtin,
        })
    }

    /// Parse and validate a cells file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let file: RegistryFile =
            toml::from_str(&contents).map_err(|err| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;
        file.validate()?;
        Ok(Self { cells: file.cells })
    }

    /// Default cells-file candidates, in precedence order.
    fn default_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Ok(path) = std::env::var("RACKWORK_CELLS") {
            if !path.is_empty() {
                candidates.push(PathBuf::from(path));
            }
        }
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            if !xdg.is_empty() {
                candidates.push(PathBuf::from(xdg).join("rackwork").join("cells.toml"));
            }
        }
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(".rackwork").join("cells.toml"));
        }
        candidates
    }

    /// Look up the configuration for a cell.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CellNotFound`] when no entry matches.
    pub fn get(&self, cell_number: u32) -> Result<&CellConfig, ConfigError> {
        self.cells
            .iter()
            .find(|config| config.cell == cell_number)
            .ok_or(ConfigError::CellNotFound(cell_number))
    }

    /// All cells, in registry order.
    pub fn cells(&self) -> &[CellConfig] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
