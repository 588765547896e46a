//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ExecuteError, SyncError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &SyncError) -> String {
    match e {
        SyncError::Execute(ExecuteError::DestinationExists(path)) => format!(
            "{}\nA file is already present at {}; the destination was left partially synced.",
            e,
            path.display()
        ),
        SyncError::Execute(_) => format!(
            "{}\nThe destination was left partially synced; re-run to finish.",
            e
        ),
        _ => e.to_string(),
    }
}
