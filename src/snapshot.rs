//! Content-addressed directory snapshots
//!
//! A snapshot maps each distinct file content (by hash) to the name(s) it
//! appears under, relative to the directory root and exactly as stored on
//! disk. Snapshots are built fresh
//! per invocation and carry no identity beyond their content.

use crate::error::SnapshotError;
use crate::tree::hasher;
use crate::tree::path;
use crate::tree::walker::{Walker, WalkerConfig};
use crate::types::ContentHash;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// Mapping from content hash to the set of filenames holding that content
///
/// Two files with identical content are both kept rather than the later one
/// replacing the earlier. Iteration is ascending by hash, then by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: BTreeMap<ContentHash, BTreeSet<PathBuf>>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` as holding the content `hash`
    ///
    /// Returns false if that exact pair was already present.
    pub fn insert(&mut self, hash: impl Into<ContentHash>, name: impl Into<PathBuf>) -> bool {
        self.entries
            .entry(hash.into())
            .or_default()
            .insert(name.into())
    }

    pub fn contains_hash(&self, hash: &ContentHash) -> bool {
        self.entries.contains_key(hash)
    }

    /// Names recorded for `hash`, in ascending order
    pub fn names(&self, hash: &ContentHash) -> Option<&BTreeSet<PathBuf>> {
        self.entries.get(hash)
    }

    /// Iterate over hashes with their name sets
    pub fn groups(&self) -> impl Iterator<Item = (&ContentHash, &BTreeSet<PathBuf>)> {
        self.entries.iter()
    }

    /// Iterate over every (hash, name) pair
    pub fn iter(&self) -> impl Iterator<Item = (&ContentHash, &Path)> {
        self.entries
            .iter()
            .flat_map(|(hash, names)| names.iter().map(move |name| (hash, name.as_path())))
    }

    /// Hashes recorded under more than one name
    pub fn duplicates(&self) -> impl Iterator<Item = (&ContentHash, &BTreeSet<PathBuf>)> {
        self.entries.iter().filter(|(_, names)| names.len() > 1)
    }

    /// Number of distinct contents
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of files (hash, name pairs)
    pub fn file_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H, N> FromIterator<(H, N)> for Snapshot
where
    H: Into<ContentHash>,
    N: Into<PathBuf>,
{
    fn from_iter<I: IntoIterator<Item = (H, N)>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for (hash, name) in iter {
            snapshot.insert(hash, name);
        }
        snapshot
    }
}

/// Builds a snapshot by walking a directory and hashing every regular file
pub struct SnapshotBuilder {
    root: PathBuf,
    walker_config: Option<WalkerConfig>,
}

impl SnapshotBuilder {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker_config: None,
        }
    }

    /// Set walker config (ignore patterns, symlinks, depth)
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = Some(config);
        self
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<Snapshot, SnapshotError> {
        let start = Instant::now();
        let root = path::canonicalize_root(&self.root)?;

        let walker = match &self.walker_config {
            Some(config) => Walker::with_config(root.clone(), config.clone()),
            None => Walker::new(root.clone()),
        };
        let files = walker.walk()?;
        debug!(file_count = files.len(), "Walked directory");

        let mut snapshot = Snapshot::new();
        let mut bytes: u64 = 0;
        for file in files {
            let Some(name) = path::relative_name(&root, &file.path) else {
                continue;
            };
            let hash = ContentHash::from_digest(&hasher::hash_file(&file.path)?);
            trace!(name = %name.display(), hash = %hash.short(), "Hashed file");
            bytes += file.size;
            snapshot.insert(hash, name);
        }

        for (hash, names) in snapshot.duplicates() {
            debug!(hash = %hash.short(), names = ?names, "Identical content under several names");
        }

        info!(
            contents = snapshot.len(),
            files = snapshot.file_count(),
            bytes,
            duration_ms = start.elapsed().as_millis() as u64,
            "Snapshot built"
        );

        Ok(snapshot)
    }
}

/// Build a snapshot of `root` with the default walker configuration
pub fn build_snapshot(root: &Path) -> Result<Snapshot, SnapshotError> {
    SnapshotBuilder::new(root.to_path_buf()).build()
}
