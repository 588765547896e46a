//! Apply ordering for reconciliation actions
//!
//! `reconcile` lists copies and moves before deletes, each in snapshot
//! order. Applied literally, that order can clobber files: a delete may hit
//! a path that was just written, a move may land on a path that is still
//! occupied, and renames can form chains or cycles. `schedule` reorders the
//! plan so every action finds the destination in the state it expects:
//!
//! - a delete of a path that a copy writes is dropped (the copy overwrites it);
//! - a delete of a path that a move writes runs before all transfers;
//! - a copy or move onto a path that a move vacates waits for that move;
//! - a cycle of moves is broken by parking one file under a free name.
//!
//! Remaining deletes keep their place at the end.

use crate::reconcile::Action;
use crate::snapshot::Snapshot;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Pending,
    InProgress,
    Done,
}

/// Reorder `actions` (as produced by `reconcile` against `dest`) for safe application
pub fn schedule(actions: Vec<Action>, dest: &Snapshot, dest_root: &Path) -> Vec<Action> {
    let (mut transfers, deletes): (Vec<Action>, Vec<Action>) = actions
        .into_iter()
        .partition(|action| !matches!(action, Action::Delete { .. }));

    let targets: HashMap<PathBuf, usize> = transfers
        .iter()
        .enumerate()
        .filter_map(|(index, action)| match action {
            Action::Copy { to, .. } | Action::Move { to, .. } => Some((to.clone(), index)),
            Action::Delete { .. } => None,
        })
        .collect();

    let mut ordered = Vec::new();
    let mut trailing = Vec::new();
    for delete in deletes {
        let Action::Delete { path } = &delete else {
            continue;
        };
        match targets.get(path).map(|&index| &transfers[index]) {
            Some(Action::Copy { .. }) => {
                debug!(path = %path.display(), "Dropping delete of a path overwritten by a copy");
            }
            Some(_) => ordered.push(delete),
            None => trailing.push(delete),
        }
    }

    let vacated_by: HashMap<PathBuf, usize> = transfers
        .iter()
        .enumerate()
        .filter_map(|(index, action)| match action {
            Action::Move { from, .. } => Some((from.clone(), index)),
            _ => None,
        })
        .collect();

    let mut taken: HashSet<PathBuf> = dest
        .iter()
        .map(|(_, name)| dest_root.join(name))
        .chain(targets.keys().cloned())
        .collect();

    let mut state = vec![Visit::Pending; transfers.len()];
    for start in 0..transfers.len() {
        if state[start] != Visit::Pending {
            continue;
        }

        // Each transfer waits on at most one move, so the pending work is a chain
        let mut chain = Vec::new();
        let mut current = start;
        loop {
            state[current] = Visit::InProgress;
            chain.push(current);

            let blocker = target_of(&transfers[current])
                .and_then(|to| vacated_by.get(to))
                .copied()
                .filter(|&blocker| blocker != current);

            match blocker {
                Some(next) if state[next] == Visit::Pending => current = next,
                Some(next) if state[next] == Visit::InProgress => {
                    let parked = park(&mut transfers[next], &mut taken);
                    ordered.extend(parked);
                    break;
                }
                _ => break,
            }
        }

        while let Some(index) = chain.pop() {
            ordered.push(transfers[index].clone());
            state[index] = Visit::Done;
        }
    }

    ordered.extend(trailing);
    ordered
}

fn target_of(action: &Action) -> Option<&PathBuf> {
    match action {
        Action::Copy { to, .. } | Action::Move { to, .. } => Some(to),
        Action::Delete { .. } => None,
    }
}

/// Move the source of a cyclic move out of the way, rewriting the move to
/// start from the parking spot. Returns the parking move.
fn park(action: &mut Action, taken: &mut HashSet<PathBuf>) -> Option<Action> {
    let Action::Move { from, to } = action else {
        return None;
    };

    let base = from
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut attempt = 0usize;
    let parking = loop {
        let candidate = from.with_file_name(format!(".{}.dirsync-{}", base, attempt));
        if taken.insert(candidate.clone()) {
            break candidate;
        }
        attempt += 1;
    };

    debug!(from = %from.display(), parking = %parking.display(), "Breaking rename cycle");
    let parked = Action::Move {
        from: from.clone(),
        to: parking.clone(),
    };
    *action = Action::Move {
        from: parking,
        to: to.clone(),
    };
    Some(parked)
}
