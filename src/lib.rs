//! dirsync: content-addressed directory synchronization
//!
//! Makes a destination directory mirror a source directory. Both sides are
//! snapshotted as content hash to filename mappings; a pure reconciliation
//! step turns the two snapshots into copy, move and delete actions, which are
//! then ordered for safe application and handed to an executor.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod reconcile;
pub mod schedule;
pub mod snapshot;
pub mod sync;
pub mod tree;
pub mod types;

pub use error::{ExecuteError, SnapshotError, SyncError};
pub use reconcile::{reconcile, Action, ActionSummary};
pub use schedule::schedule;
pub use snapshot::{build_snapshot, Snapshot};
pub use sync::{sync, SyncOptions, SyncReport};
