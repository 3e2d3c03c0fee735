//! Configuration types for the perception grid.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Grid sizing configuration.
///
/// Extents and resolution are fixed at construction; the grid never
/// resizes at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Cells along the first (x) axis
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Cells along the second (y) axis
    #[serde(default = "default_cols")]
    pub cols: usize,

    /// Grid cells per meter (e.g. 10 = 10cm cells)
    #[serde(default = "default_resolution")]
    pub resolution: u32,
}

fn default_rows() -> usize {
    101
}

fn default_cols() -> usize {
    101
}

fn default_resolution() -> u32 {
    10
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),       // ~10m at 10cm cells
            cols: default_cols(),       // ~10m at 10cm cells
            resolution: default_resolution(),
        }
    }
}

impl GridConfig {
    /// Size a grid to cover a physical area (in meters) at a resolution.
    pub fn for_area(width_m: f32, height_m: f32, resolution: u32) -> Self {
        Self {
            rows: (width_m * resolution as f32).ceil() as usize,
            cols: (height_m * resolution as f32).ceil() as usize,
            resolution,
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Memory usage in bytes for the count array (4 bytes per cell).
    pub fn memory_bytes(&self) -> usize {
        self.cell_count() * 4
    }
}

/// Polar histogram configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolarConfig {
    /// Number of angular sectors (e.g. 72 = 5 degree sectors)
    #[serde(default = "default_sectors")]
    pub sectors: usize,
}

fn default_sectors() -> usize {
    72
}

impl Default for PolarConfig {
    fn default() -> Self {
        Self {
            sectors: default_sectors(),
        }
    }
}

/// Full perception-layer configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerceptionConfig {
    /// Grid sizing (extents, resolution)
    #[serde(default)]
    pub grid: GridConfig,
    /// Polar histogram settings
    #[serde(default)]
    pub polar: PolarConfig,
}

impl PerceptionConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: &Path) -> Result<(), ConfigError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|e| ConfigError::Io(e.to_string()))
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reject configurations no grid or histogram can be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid extents must be at least 1x1, got {}x{}",
                self.grid.rows, self.grid.cols
            )));
        }
        if self.grid.resolution == 0 {
            return Err(ConfigError::Invalid(
                "grid resolution must be at least 1 cell per meter".to_string(),
            ));
        }
        if self.polar.sectors == 0 {
            return Err(ConfigError::Invalid(
                "polar histogram needs at least one sector".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(String),

    /// YAML parsing error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Values that cannot describe a usable grid
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
