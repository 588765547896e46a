//! Action execution: the side-effecting half of a sync.
//!
//! Actions are applied in the order given. The first failure stops the run
//! and is returned to the caller; nothing is retried.

use crate::error::ExecuteError;
use crate::reconcile::Action;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Applies reconciliation actions somewhere
pub trait ActionExecutor {
    fn execute(&mut self, action: &Action) -> Result<(), ExecuteError>;
}

/// Executor that performs actions on the local filesystem
#[derive(Debug, Default)]
pub struct FsExecutor;

impl FsExecutor {
    pub fn new() -> Self {
        Self
    }

    fn ensure_parent(action: &Action, path: &Path) -> Result<(), ExecuteError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ExecuteError::Io {
                action: action.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

impl ActionExecutor for FsExecutor {
    fn execute(&mut self, action: &Action) -> Result<(), ExecuteError> {
        let io_err = |source| ExecuteError::Io {
            action: action.clone(),
            source,
        };

        match action {
            Action::Copy { from, to } => {
                Self::ensure_parent(action, to)?;
                let bytes = fs::copy(from, to).map_err(io_err)?;
                debug!(from = %from.display(), to = %to.display(), bytes, "Copied file");
            }
            Action::Move { from, to } => {
                if fs::symlink_metadata(from).is_err() {
                    return Err(ExecuteError::MissingSource(from.clone()));
                }
                if fs::symlink_metadata(to).is_ok() {
                    return Err(ExecuteError::DestinationExists(to.clone()));
                }
                Self::ensure_parent(action, to)?;
                fs::rename(from, to).map_err(io_err)?;
                debug!(from = %from.display(), to = %to.display(), "Moved file");
            }
            Action::Delete { path } => {
                if fs::symlink_metadata(path).is_err() {
                    return Err(ExecuteError::MissingPath(path.clone()));
                }
                fs::remove_file(path).map_err(io_err)?;
                debug!(path = %path.display(), "Deleted file");
            }
        }

        Ok(())
    }
}

/// Executor that only records what it was asked to do
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub applied: Vec<Action>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActionExecutor for RecordingExecutor {
    fn execute(&mut self, action: &Action) -> Result<(), ExecuteError> {
        self.applied.push(action.clone());
        Ok(())
    }
}

/// Apply `actions` in order, stopping at the first failure
///
/// Returns the number of actions applied.
pub fn apply_actions<E: ActionExecutor + ?Sized>(
    executor: &mut E,
    actions: &[Action],
) -> Result<usize, ExecuteError> {
    for (index, action) in actions.iter().enumerate() {
        if let Err(e) = executor.execute(action) {
            warn!(
                applied = index,
                remaining = actions.len() - index,
                error = %e,
                "Stopping after failed action"
            );
            return Err(e);
        }
    }
    Ok(actions.len())
}
