//! Optional solver configuration stored in `puzzles.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::race::DEFAULT_THRESHOLD;
use crate::core::ram_run::{DEFAULT_FALLEN, DEFAULT_SIZE};
use crate::io::input::DEFAULT_INPUT;

/// Default config location, resolved against the working directory.
pub const DEFAULT_CONFIG: &str = "puzzles.toml";

/// Solver configuration (TOML).
///
/// Every field has a default, so an absent file and an empty file behave the
/// same. Command-line flags take precedence over these values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PuzzlesConfig {
    /// Input file used when a command is given no `--input`.
    pub input: PathBuf,

    pub stones: StonesConfig,

    pub ram_run: RamRunConfig,

    pub race: RaceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StonesConfig {
    /// Number of blinks to simulate.
    pub blinks: u32,
}

impl Default for StonesConfig {
    fn default() -> Self {
        Self { blinks: 75 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RamRunConfig {
    /// Side length of the square memory space.
    pub size: u32,
    /// Bytes that have fallen before the shortest path is measured.
    pub fallen: u32,
}

impl Default for RamRunConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            fallen: DEFAULT_FALLEN,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RaceConfig {
    /// Minimum picoseconds a cheat must save to be counted.
    pub threshold: u32,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Default for PuzzlesConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            stones: StonesConfig::default(),
            ram_run: RamRunConfig::default(),
            race: RaceConfig::default(),
        }
    }
}

impl PuzzlesConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(anyhow!("input must be a non-empty path"));
        }
        if self.stones.blinks == 0 {
            return Err(anyhow!("stones.blinks must be > 0"));
        }
        if self.ram_run.size == 0 {
            return Err(anyhow!("ram_run.size must be > 0"));
        }
        if self.race.threshold == 0 {
            return Err(anyhow!("race.threshold must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PuzzlesConfig::default()`.
pub fn load_config(path: &Path) -> Result<PuzzlesConfig> {
    if !path.exists() {
        let cfg = PuzzlesConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PuzzlesConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
