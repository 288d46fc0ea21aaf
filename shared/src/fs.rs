//! Filesystem helpers shared across gbweb hosts.

use std::path::Path;

use anyhow::{Context, Result};

/// Maximum allowed ROM size for reading into memory.
pub const MAX_ROM_BYTES: u64 = 8 * 1024 * 1024; // 8 MiB, largest MBC5 cartridge
/// Maximum allowed save RAM size for reading into memory.
pub const MAX_SAVE_BYTES: u64 = 512 * 1024; // 512 KiB
/// Maximum allowed precache manifest size.
pub const MAX_MANIFEST_BYTES: u64 = 4 * 1024 * 1024; // 4 MiB

/// Read a file into memory with a size cap.
pub fn read_file_with_limit(path: &Path, max_bytes: u64) -> Result<Vec<u8>> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
    let len = metadata.len();
    if len > max_bytes {
        anyhow::bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            len,
            max_bytes
        );
    }
    std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
