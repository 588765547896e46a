//! Reconciliation scenarios through the public API (no filesystem access)

use dirsync::{reconcile, Action, Snapshot};
use std::path::{Path, PathBuf};

fn snapshot(pairs: &[(&str, &str)]) -> Snapshot {
    pairs.iter().copied().collect()
}

fn run(source: &[(&str, &str)], dest: &[(&str, &str)]) -> Vec<Action> {
    reconcile(
        &snapshot(source),
        &snapshot(dest),
        Path::new("/src"),
        Path::new("/dst"),
    )
}

#[test]
fn test_copy_when_only_in_source() {
    assert_eq!(
        run(&[("h1", "fn1")], &[]),
        vec![Action::Copy {
            from: PathBuf::from("/src/fn1"),
            to: PathBuf::from("/dst/fn1"),
        }]
    );
}

#[test]
fn test_move_when_renamed() {
    assert_eq!(
        run(&[("h1", "fn1")], &[("h1", "fn2")]),
        vec![Action::Move {
            from: PathBuf::from("/dst/fn2"),
            to: PathBuf::from("/dst/fn1"),
        }]
    );
}

#[test]
fn test_delete_when_only_in_destination() {
    assert_eq!(
        run(&[], &[("h1", "fn1")]),
        vec![Action::Delete {
            path: PathBuf::from("/dst/fn1"),
        }]
    );
}

#[test]
fn test_nothing_when_in_sync() {
    assert!(run(&[("h1", "fn1")], &[("h1", "fn1")]).is_empty());
}

#[test]
fn test_copy_only_the_missing_file() {
    assert_eq!(
        run(&[("h1", "a"), ("h2", "b")], &[("h1", "a")]),
        vec![Action::Copy {
            from: PathBuf::from("/src/b"),
            to: PathBuf::from("/dst/b"),
        }]
    );
}

#[test]
fn test_deletes_follow_destination_order() {
    let actions = run(&[], &[("h3", "c"), ("h1", "a"), ("h2", "b")]);
    let deleted: Vec<_> = actions
        .iter()
        .map(|a| match a {
            Action::Delete { path } => path.clone(),
            other => panic!("unexpected action {}", other),
        })
        .collect();
    assert_eq!(
        deleted,
        vec![
            PathBuf::from("/dst/a"),
            PathBuf::from("/dst/b"),
            PathBuf::from("/dst/c"),
        ]
    );
}

#[test]
fn test_reconcile_is_pure() {
    let source = snapshot(&[("h1", "a"), ("h2", "b")]);
    let dest = snapshot(&[("h2", "c"), ("h3", "d")]);

    let first = reconcile(&source, &dest, Path::new("/s"), Path::new("/d"));
    let second = reconcile(&source, &dest, Path::new("/s"), Path::new("/d"));

    assert_eq!(first, second);
}

#[test]
fn test_roots_only_qualify_paths() {
    let source = snapshot(&[("h1", "x")]);
    let dest = snapshot(&[]);

    let actions = reconcile(&source, &dest, Path::new("/one"), Path::new("/two"));

    assert_eq!(actions[0].to_string(), "copy /one/x -> /two/x");
}
