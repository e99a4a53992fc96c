use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

/// A file that was successfully hashed.
#[derive(Debug, Clone)]
pub struct HashedFile {
    pub path: PathBuf,
    pub size: u64,
    /// 64-character lowercase hex BLAKE3 digest of the full file content.
    pub digest: String,
}

/// Reads the whole file into memory and returns its BLAKE3 hex digest
/// plus the number of bytes hashed.
///
/// Whole-file reads cost memory proportional to the largest file in the
/// tree; fine for the intended workloads, a real limit for huge files.
pub fn hash_file(path: &Path) -> Result<(String, u64)> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: '{}'", path.display()))?;
    let digest = blake3::hash(&bytes).to_hex().to_string();
    debug!("{} '{}' ({} bytes)", digest, path.display(), bytes.len());
    Ok((digest, bytes.len() as u64))
}
