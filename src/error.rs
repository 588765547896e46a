//! Error types for the dirsync directory synchronization tool.
//!
//! The reconciler itself is infallible; these cover the imperative shell
//! around it: building snapshots, applying actions, and configuration.

use crate::reconcile::Action;
use std::path::PathBuf;
use thiserror::Error;

/// Snapshot building errors (walking and hashing)
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Not a directory: {0}")]
    InvalidRoot(PathBuf),

    #[error("Failed to walk directory: {source}")]
    Walk {
        path: Option<PathBuf>,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Action execution errors
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("Move source does not exist: {0}")]
    MissingSource(PathBuf),

    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Cannot delete missing path: {0}")]
    MissingPath(PathBuf),

    #[error("{action} failed: {source}")]
    Io {
        action: Action,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level errors surfaced by sync orchestration and the CLI
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Execution error: {0}")]
    Execute(#[from] ExecuteError),

    #[error("Source and destination are the same directory: {0}")]
    SameDirectory(PathBuf),

    #[error("Source {0} and destination {1} are nested inside one another")]
    NestedRoots(PathBuf, PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<config::ConfigError> for SyncError {
    fn from(err: config::ConfigError) -> Self {
        SyncError::Config(err.to_string())
    }
}
