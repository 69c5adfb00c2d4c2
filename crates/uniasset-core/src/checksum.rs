//! SHA-256 digests of generated files.
//!
//! Reruns of the icon generator must be byte-stable; the digests in the
//! report (and `uniasset checksum`) make that checkable.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Stream `reader` through SHA-256 and return the digest as lowercase hex.
/// In-memory buffers go through here as `&[u8]`.
pub fn sha256_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

/// Compute SHA-256 of a file and return the digest as lowercase hex.
pub fn sha256_path(path: &Path) -> Result<String> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    sha256_reader(io::BufReader::new(f)).with_context(|| format!("read {}", path.display()))
}
