//! Hash computation for file contents using BLAKE3

use crate::error::SnapshotError;
use crate::types::Hash;
use blake3::Hasher;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read buffer size used when streaming file contents into the hasher
pub const BLOCK_SIZE: usize = 64 * 1024;

/// Compute content hash for file bytes
///
/// Uses BLAKE3 to hash file content deterministically.
pub fn compute_content_hash(content: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(content);
    *hasher.finalize().as_bytes()
}

/// Compute content hash for a file on disk
///
/// Streams the file in `BLOCK_SIZE` chunks, so the result is identical to
/// `compute_content_hash` over the full contents without holding them in memory.
pub fn hash_file(path: &Path) -> Result<Hash, SnapshotError> {
    let io_err = |source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let mut hasher = Hasher::new();
    let mut buf = vec![0u8; BLOCK_SIZE];

    loop {
        let read = file.read(&mut buf).map_err(io_err)?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }

    Ok(*hasher.finalize().as_bytes())
}
