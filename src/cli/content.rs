//! `--content-file` loading

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Reads a JSON array of block objects, passed to the API verbatim
pub fn load_blocks(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Content file is not a JSON array of blocks: {}", path.display()))
}
