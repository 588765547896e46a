//! Reconciliation: the pure planning step of a sync.
//!
//! Given source and destination snapshots, decide which copy, move and
//! delete actions bring the destination in line with the source. No I/O
//! happens here; roots are only used to qualify the produced paths.

use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::trace;

/// A single filesystem change needed to reconcile two directories
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    /// Copy a source file into the destination
    Copy { from: PathBuf, to: PathBuf },
    /// Rename a destination file in place
    Move { from: PathBuf, to: PathBuf },
    /// Remove a destination file
    Delete { path: PathBuf },
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Copy { .. } => "copy",
            Action::Move { .. } => "move",
            Action::Delete { .. } => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Copy { from, to } => write!(f, "copy {} -> {}", from.display(), to.display()),
            Action::Move { from, to } => write!(f, "move {} -> {}", from.display(), to.display()),
            Action::Delete { path } => write!(f, "delete {}", path.display()),
        }
    }
}

/// Compute the actions that make `dest` mirror `source`
///
/// Copies and moves come first, in source iteration order; deletes follow,
/// in destination iteration order. For each source hash:
/// - absent from the destination: copy it over under the source name
/// - present under a different name: rename the destination file
/// - present under the same name: nothing
///
/// Every destination hash absent from the source is deleted.
///
/// When a hash is held by several names, names already matching on both
/// sides are left alone, the remaining source names are paired in order
/// with the remaining destination names as moves, leftover source names are
/// copied and leftover destination names are deleted.
pub fn reconcile(
    source: &Snapshot,
    dest: &Snapshot,
    source_root: &Path,
    dest_root: &Path,
) -> Vec<Action> {
    let mut actions = Vec::new();

    for (hash, source_names) in source.groups() {
        match dest.names(hash) {
            None => {
                for name in source_names {
                    actions.push(Action::Copy {
                        from: source_root.join(name),
                        to: dest_root.join(name),
                    });
                }
            }
            Some(dest_names) => {
                let mut stale = dest_names.difference(source_names);
                for name in source_names.difference(dest_names) {
                    let action = match stale.next() {
                        Some(old) => Action::Move {
                            from: dest_root.join(old),
                            to: dest_root.join(name),
                        },
                        None => Action::Copy {
                            from: source_root.join(name),
                            to: dest_root.join(name),
                        },
                    };
                    actions.push(action);
                }
            }
        }
    }

    for (hash, dest_names) in dest.groups() {
        let surplus: Vec<&PathBuf> = match source.names(hash) {
            None => dest_names.iter().collect(),
            Some(source_names) => {
                // Stale names consumed by moves above are skipped
                let moved = source_names.difference(dest_names).count();
                dest_names.difference(source_names).skip(moved).collect()
            }
        };
        for name in surplus {
            actions.push(Action::Delete {
                path: dest_root.join(name),
            });
        }
    }

    trace!(action_count = actions.len(), "Reconciled snapshots");
    actions
}

/// Per-kind action counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSummary {
    pub copies: usize,
    pub moves: usize,
    pub deletes: usize,
}

impl ActionSummary {
    pub fn from_actions(actions: &[Action]) -> Self {
        let mut summary = Self::default();
        for action in actions {
            match action {
                Action::Copy { .. } => summary.copies += 1,
                Action::Move { .. } => summary.moves += 1,
                Action::Delete { .. } => summary.deletes += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.copies + self.moves + self.deletes
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for ActionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to copy, {} to move, {} to delete",
            self.copies, self.moves, self.deletes
        )
    }
}
