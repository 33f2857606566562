use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::{Result, SweepError};

const HASH_CHUNK_SIZE: usize = 64 * 1024;

pub type ContentHash = [u8; 32];

/// Compute the SHA-256 digest of a file's full content, streaming it in
/// fixed-size chunks.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn compute_file_hash(path: &Path) -> Result<ContentHash> {
    let read_err = |source| SweepError::FileRead {
        path: path.to_path_buf(),
        source,
    };
    let mut file = fs::File::open(path).map_err(read_err)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; HASH_CHUNK_SIZE];
    loop {
        let n = file.read(&mut buffer).map_err(read_err)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(hasher.finalize().into())
}

/// Digests of every file seen so far in the run.
///
/// Only digests are kept; a duplicate cannot be traced back to the file
/// that first produced it.
#[derive(Debug, Default)]
pub struct DuplicateRegistry {
    seen: HashSet<ContentHash>,
}

impl DuplicateRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `hash`, returning `true` if it had already been recorded.
    pub fn observe(&mut self, hash: ContentHash) -> bool {
        !self.seen.insert(hash)
    }
}

#[cfg(test)]
#[path = "duplicate_tests.rs"]
mod tests;
