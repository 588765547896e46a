//! Path canonicalization and normalization utilities

use crate::error::SnapshotError;
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a directory root
///
/// Resolves symlinks, `..` and `.` with dunce (no `\\?\` prefixes on
/// Windows) and requires the result to be a directory.
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, SnapshotError> {
    let canonical =
        dunce::canonicalize(path).map_err(|_| SnapshotError::InvalidRoot(path.to_path_buf()))?;

    if !canonical.is_dir() {
        return Err(SnapshotError::InvalidRoot(path.to_path_buf()));
    }

    Ok(canonical)
}

/// Normalize a path string (without filesystem access)
///
/// Normalizes Unicode to NFC and removes trailing slashes (except root).
pub fn normalize_path_string(path: &str) -> String {
    let normalized: String = path.nfc().collect();

    let mut result = normalized;
    if result.len() > 1 {
        while result.ends_with('/') || result.ends_with('\\') {
            result.pop();
        }
    }

    result
}

/// Path of `path` relative to `root`, exactly as found on disk
///
/// Returns `None` if `path` is not under `root` or is `root` itself.
pub fn relative_name(root: &Path, path: &Path) -> Option<PathBuf> {
    let rel = path.strip_prefix(root).ok()?;

    let name: PathBuf = rel
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect();

    if name.as_os_str().is_empty() {
        return None;
    }

    Some(name)
}

/// Printable form of a relative name: `/`-joined, NFC, lossy for non-UTF-8
pub fn display_name(name: &Path) -> String {
    let joined = name
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");
    normalize_path_string(&joined)
}

/// Resolve a root that may not exist yet
///
/// The nearest existing ancestor is canonicalized and the missing
/// components are appended unchanged.
pub fn resolve_root(path: &Path) -> Result<PathBuf, SnapshotError> {
    let invalid = || SnapshotError::InvalidRoot(path.to_path_buf());

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_err(|_| invalid())?.join(path)
    };

    let mut missing = Vec::new();
    let mut current = absolute.as_path();
    loop {
        if let Ok(base) = dunce::canonicalize(current) {
            let mut resolved = base;
            for part in missing.iter().rev() {
                resolved.push(part);
            }
            return Ok(resolved);
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                current = parent;
            }
            _ => return Err(invalid()),
        }
    }
}
