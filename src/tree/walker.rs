//! Filesystem walker for traversing directory structures

use crate::error::SnapshotError;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A regular file found by the walker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub size: u64,
}

/// Filesystem walker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false for determinism)
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Names to skip at any depth (e.g., ".git"); a matching directory is pruned
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: Vec::new(),
            max_depth: None,
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect all regular files
    ///
    /// Returns entries sorted by path for determinism.
    pub fn walk(&self) -> Result<Vec<FileEntry>, SnapshotError> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.should_ignore(entry));

        for entry in walker {
            let entry = entry.map_err(walk_error)?;

            // Without follow_symlinks, links report as neither file nor directory
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path().to_path_buf();
            let metadata = entry.metadata().map_err(walk_error)?;

            entries.push(FileEntry {
                path,
                size: metadata.len(),
            });
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(entries)
    }

    /// Check if an entry should be ignored based on ignore patterns
    ///
    /// Only components below the root are compared, so a root that happens
    /// to live under e.g. `.git` is still walked.
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if self.config.ignore_patterns.is_empty() {
            return false;
        }

        let rel = entry
            .path()
            .strip_prefix(&self.root)
            .unwrap_or_else(|_| Path::new(""));

        rel.components().any(|component| match component {
            Component::Normal(name) => {
                let name = name.to_string_lossy();
                self.config
                    .ignore_patterns
                    .iter()
                    .any(|pattern| pattern.as_str() == name)
            }
            _ => false,
        })
    }
}

fn walk_error(source: walkdir::Error) -> SnapshotError {
    SnapshotError::Walk {
        path: source.path().map(Path::to_path_buf),
        source,
    }
}
