//! Core type definitions shared across snapshot building and reconciliation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw BLAKE3 digest (32 bytes)
pub type Hash = [u8; 32];

/// Content identity of a file, as used for snapshot keys.
///
/// Snapshots built from disk use the lowercase hex encoding of a BLAKE3
/// digest. Any string is accepted so hand-built snapshots can use short
/// labels.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Hex-encode a raw digest
    pub fn from_digest(digest: &Hash) -> Self {
        Self(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 characters, for display in tables and logs
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(12) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentHash {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ContentHash {
    fn from(value: String) -> Self {
        Self(value)
    }
}
