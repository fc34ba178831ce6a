//! Puzzle input loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Default input file, resolved against the working directory.
pub const DEFAULT_INPUT: &str = "input.txt";

/// Read the whole input file into memory.
pub fn load_input(path: &Path) -> Result<String> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("could not open {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "input loaded");
    Ok(contents)
}
