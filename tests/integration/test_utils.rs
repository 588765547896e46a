//! Shared test utilities for integration tests
//!
//! Provides a source/destination directory pair inside one temp dir, removed
//! when the fixture is dropped.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A source and destination directory pair
pub struct SyncDirs {
    _temp_dir: TempDir,
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl SyncDirs {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source");
        let dest = temp_dir.path().join("dest");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&dest).unwrap();
        Self {
            _temp_dir: temp_dir,
            source,
            dest,
        }
    }

    pub fn write_source(&self, name: &str, content: &str) -> PathBuf {
        write_file(&self.source, name, content)
    }

    pub fn write_dest(&self, name: &str, content: &str) -> PathBuf {
        write_file(&self.dest, name, content)
    }

    /// Relative names and contents of every file under the destination, sorted
    pub fn dest_files(&self) -> Vec<(String, String)> {
        list_files(&self.dest)
    }

    pub fn source_files(&self) -> Vec<(String, String)> {
        list_files(&self.source)
    }
}

fn write_file(root: &Path, name: &str, content: &str) -> PathBuf {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn list_files(root: &Path) -> Vec<(String, String)> {
    let mut files: Vec<(String, String)> = walkdir::WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            (rel, fs::read_to_string(e.path()).unwrap())
        })
        .collect();
    files.sort();
    files
}
