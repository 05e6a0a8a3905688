//! Optional settings file shared by the menu programs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Largest table capacity accepted from configuration.
pub const MAX_TABLE_CAPACITY: usize = 100_000;
/// Largest matrix side length accepted from configuration.
pub const MATRIX_DIM_LIMIT: usize = 20;

/// Console program configuration (TOML).
///
/// Every field has a default, so an empty file is valid and matches running
/// without `--config`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Print "Press Enter to continue..." and wait after each command.
    pub pause_after_command: bool,

    pub records: RecordsConfig,

    pub matrix: MatrixConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RecordsConfig {
    /// Maximum number of students or books held at once.
    pub capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MatrixConfig {
    /// Maximum rows and columns accepted at the dimension prompt.
    pub max_dim: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            pause_after_command: true,
            records: RecordsConfig::default(),
            matrix: MatrixConfig::default(),
        }
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            max_dim: MATRIX_DIM_LIMIT,
        }
    }
}

impl ConsoleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.records.capacity == 0 || self.records.capacity > MAX_TABLE_CAPACITY {
            return Err(anyhow!(
                "records.capacity must be between 1 and {MAX_TABLE_CAPACITY}"
            ));
        }
        if self.matrix.max_dim == 0 || self.matrix.max_dim > MATRIX_DIM_LIMIT {
            return Err(anyhow!(
                "matrix.max_dim must be between 1 and {MATRIX_DIM_LIMIT}"
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ConsoleConfig::default()`.
pub fn load_config(path: &Path) -> Result<ConsoleConfig> {
    if !path.exists() {
        let cfg = ConsoleConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ConsoleConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load from `path` when given, otherwise use defaults.
pub fn resolve_config(path: Option<&Path>) -> Result<ConsoleConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(ConsoleConfig::default()),
    }
}
