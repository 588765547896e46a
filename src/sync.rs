//! Sync orchestration
//!
//! Gather inputs (snapshot both directories), call the reconciler, apply its
//! output. Only the first and last steps touch the filesystem.

use crate::error::SyncError;
use crate::executor::{apply_actions, ActionExecutor, FsExecutor, RecordingExecutor};
use crate::reconcile::{reconcile, Action, ActionSummary};
use crate::schedule::schedule;
use crate::snapshot::{Snapshot, SnapshotBuilder};
use crate::tree::path;
use crate::tree::walker::WalkerConfig;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, instrument};

/// Options for a sync run
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Plan only; leave the destination untouched
    pub dry_run: bool,
    /// Walker settings shared by both sides
    pub walker: WalkerConfig,
}

/// Outcome of a sync run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub actions: Vec<Action>,
    pub summary: ActionSummary,
    /// Number of actions applied, or recorded without touching disk on a dry run
    pub applied: usize,
    pub dry_run: bool,
    pub elapsed_ms: u64,
    /// RFC 3339 completion time (UTC)
    pub finished_at: String,
}

/// Both snapshots and the plan computed from them, in apply order
#[derive(Debug, Clone)]
pub struct SyncPlan {
    pub source_root: PathBuf,
    pub dest_root: PathBuf,
    pub source: Snapshot,
    pub dest: Snapshot,
    pub actions: Vec<Action>,
}

/// Snapshot both directories and reconcile them without applying anything
///
/// A missing destination is planned as empty; it is not created here.
/// Roots that are equal or nested inside one another are rejected.
#[instrument(skip_all, fields(source = %source.display(), dest = %dest.display()))]
pub fn plan(source: &Path, dest: &Path, walker: &WalkerConfig) -> Result<SyncPlan, SyncError> {
    let source_root = path::canonicalize_root(source)?;
    let dest_exists = dest.exists();
    let dest_root = if dest_exists {
        path::canonicalize_root(dest)?
    } else {
        path::resolve_root(dest)?
    };

    if dest_root == source_root {
        return Err(SyncError::SameDirectory(source_root));
    }
    if dest_root.starts_with(&source_root) || source_root.starts_with(&dest_root) {
        return Err(SyncError::NestedRoots(source_root, dest_root));
    }

    let dest_snapshot = if dest_exists {
        SnapshotBuilder::new(dest_root.clone())
            .with_walker_config(walker.clone())
            .build()?
    } else {
        Snapshot::new()
    };

    let source_snapshot = SnapshotBuilder::new(source_root.clone())
        .with_walker_config(walker.clone())
        .build()?;

    let actions = schedule(
        reconcile(&source_snapshot, &dest_snapshot, &source_root, &dest_root),
        &dest_snapshot,
        &dest_root,
    );

    Ok(SyncPlan {
        source_root,
        dest_root,
        source: source_snapshot,
        dest: dest_snapshot,
        actions,
    })
}

/// Make `dest` mirror `source`
#[instrument(skip_all, fields(source = %source.display(), dest = %dest.display(), dry_run = options.dry_run))]
pub fn sync(source: &Path, dest: &Path, options: &SyncOptions) -> Result<SyncReport, SyncError> {
    let start = Instant::now();

    let plan = plan(source, dest, &options.walker)?;
    let summary = ActionSummary::from_actions(&plan.actions);
    info!(
        copies = summary.copies,
        moves = summary.moves,
        deletes = summary.deletes,
        "Planned sync"
    );

    let mut executor: Box<dyn ActionExecutor> = if options.dry_run {
        Box::new(RecordingExecutor::new())
    } else {
        Box::new(FsExecutor::new())
    };
    let applied = apply_actions(executor.as_mut(), &plan.actions)?;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    info!(applied, elapsed_ms, "Sync finished");

    Ok(SyncReport {
        source: plan.source_root,
        dest: plan.dest_root,
        actions: plan.actions,
        summary,
        applied,
        dry_run: options.dry_run,
        elapsed_ms,
        finished_at: Utc::now().to_rfc3339(),
    })
}
