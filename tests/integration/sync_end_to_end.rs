//! End-to-end sync tests against real temp directories

use dirsync::{sync, Action, SyncError, SyncOptions};
use std::fs;

use crate::integration::SyncDirs;

/// A file present only in the source is copied to the destination
#[test]
fn test_file_in_source_but_not_destination() {
    let dirs = SyncDirs::new();
    dirs.write_source("my-file", "I am a very useful file");

    sync(&dirs.source, &dirs.dest, &SyncOptions::default()).unwrap();

    let expected = dirs.dest.join("my-file");
    assert_eq!(fs::read_to_string(expected).unwrap(), "I am a very useful file");
}

/// A file renamed in the source is renamed, not re-copied, in the destination
#[test]
fn test_file_renamed_in_source() {
    let dirs = SyncDirs::new();
    let content = "I am a file that was renamed";
    dirs.write_source("source-filename", content);
    let old_dest = dirs.write_dest("dest-filename", content);

    let report = sync(&dirs.source, &dirs.dest, &SyncOptions::default()).unwrap();

    assert!(!old_dest.exists());
    assert_eq!(
        fs::read_to_string(dirs.dest.join("source-filename")).unwrap(),
        content
    );
    assert_eq!(report.summary.moves, 1);
    assert_eq!(report.summary.copies, 0);
}

/// A file present only in the destination is deleted
#[test]
fn test_file_in_destination_but_not_source() {
    let dirs = SyncDirs::new();
    let dest_path = dirs.write_dest("file-to-delete", "I am a file that should be deleted");

    sync(&dirs.source, &dirs.dest, &SyncOptions::default()).unwrap();

    assert!(!dest_path.exists());
}

/// Directories already in sync are left alone
#[test]
fn test_identical_directories() {
    let dirs = SyncDirs::new();
    let content = "I am a file that exists in both directories";
    dirs.write_source("identical-file", content);
    let dest_path = dirs.write_dest("identical-file", content);

    let report = sync(&dirs.source, &dirs.dest, &SyncOptions::default()).unwrap();

    assert!(report.actions.is_empty());
    assert_eq!(report.applied, 0);
    assert_eq!(fs::read_to_string(dest_path).unwrap(), content);
}

/// Every file of a populated source reaches an empty destination
#[test]
fn test_multiple_files_into_empty_destination() {
    let dirs = SyncDirs::new();
    dirs.write_source("file1", "Content of file 1");
    dirs.write_source("file2", "Content of file 2");
    dirs.write_source("file3", "Content of file 3");

    let report = sync(&dirs.source, &dirs.dest, &SyncOptions::default()).unwrap();

    assert_eq!(report.summary.copies, 3);
    assert_eq!(dirs.dest_files(), dirs.source_files());
}

/// A rename and a new file are handled in the same run
#[test]
fn test_rename_and_new_file_together() {
    let dirs = SyncDirs::new();
    dirs.write_source("new-filename", "This file was renamed");
    dirs.write_source("new-file", "This is a new file");
    let old = dirs.write_dest("old-filename", "This file was renamed");

    sync(&dirs.source, &dirs.dest, &SyncOptions::default()).unwrap();

    assert!(!old.exists());
    assert_eq!(
        dirs.dest_files(),
        vec![
            ("new-file".to_string(), "This is a new file".to_string()),
            ("new-filename".to_string(), "This file was renamed".to_string()),
        ]
    );
}

/// Nested files are mirrored with their directories, and moves cross directories
#[test]
fn test_nested_directories() {
    let dirs = SyncDirs::new();
    dirs.write_source("docs/guide.md", "guide");
    dirs.write_source("docs/img/logo.svg", "<svg/>");
    dirs.write_dest("old/logo.svg", "<svg/>");
    dirs.write_dest("old/unused.txt", "unused");

    let report = sync(&dirs.source, &dirs.dest, &SyncOptions::default()).unwrap();

    assert_eq!(report.summary.copies, 1);
    assert_eq!(report.summary.moves, 1);
    assert_eq!(report.summary.deletes, 1);
    assert_eq!(dirs.dest_files(), dirs.source_files());
}

/// Running sync a second time finds nothing to do
#[test]
fn test_second_sync_is_a_no_op() {
    let dirs = SyncDirs::new();
    dirs.write_source("a.txt", "alpha");
    dirs.write_source("b.txt", "beta");
    dirs.write_dest("b-old.txt", "beta");
    dirs.write_dest("stale.txt", "stale");

    let first = sync(&dirs.source, &dirs.dest, &SyncOptions::default()).unwrap();
    assert_eq!(first.applied, 3);

    let second = sync(&dirs.source, &dirs.dest, &SyncOptions::default()).unwrap();
    assert!(second.actions.is_empty());
}

/// Report paths are qualified by the canonical roots
#[test]
fn test_report_actions_use_canonical_roots() {
    let dirs = SyncDirs::new();
    dirs.write_source("only.txt", "only");

    let report = sync(
        &dirs.source,
        &dirs.dest,
        &SyncOptions {
            dry_run: true,
            ..SyncOptions::default()
        },
    )
    .unwrap();

    assert_eq!(
        report.actions,
        vec![Action::Copy {
            from: report.source.join("only.txt"),
            to: report.dest.join("only.txt"),
        }]
    );
}

/// Ignored names are neither copied nor deleted
#[test]
fn test_ignore_patterns_apply_to_both_sides() {
    let dirs = SyncDirs::new();
    dirs.write_source(".git/HEAD", "ref: main");
    dirs.write_source("kept.txt", "kept");
    let dest_ignored = dirs.write_dest(".git/HEAD", "ref: other");

    let mut options = SyncOptions::default();
    options.walker.ignore_patterns = vec![".git".to_string()];
    let report = sync(&dirs.source, &dirs.dest, &options).unwrap();

    assert_eq!(report.actions.len(), 1);
    assert_eq!(fs::read_to_string(dest_ignored).unwrap(), "ref: other");
    assert!(dirs.dest.join("kept.txt").exists());
}

/// Names in decomposed Unicode are copied under their on-disk name
#[test]
fn test_decomposed_unicode_name_is_copied() {
    let dirs = SyncDirs::new();
    let name = "cafe\u{0301}.txt";
    dirs.write_source(name, "espresso");

    let report = sync(&dirs.source, &dirs.dest, &SyncOptions::default()).unwrap();

    assert_eq!(report.applied, 1);
    assert_eq!(fs::read_to_string(dirs.dest.join(name)).unwrap(), "espresso");
}

/// A file whose content changed under the same name is overwritten, not lost
#[test]
fn test_file_modified_in_place() {
    let dirs = SyncDirs::new();
    dirs.write_source("a.txt", "new contents");
    dirs.write_dest("a.txt", "old contents");

    let report = sync(&dirs.source, &dirs.dest, &SyncOptions::default()).unwrap();

    assert_eq!(report.summary.deletes, 0);
    assert_eq!(
        fs::read_to_string(dirs.dest.join("a.txt")).unwrap(),
        "new contents"
    );
    let second = sync(&dirs.source, &dirs.dest, &SyncOptions::default()).unwrap();
    assert!(second.actions.is_empty());
}

/// A rename onto a name still held by stale content completes in one run
#[test]
fn test_rename_onto_stale_name() {
    let dirs = SyncDirs::new();
    dirs.write_source("a.txt", "kept");
    dirs.write_dest("b.txt", "kept");
    dirs.write_dest("a.txt", "stale");

    let report = sync(&dirs.source, &dirs.dest, &SyncOptions::default()).unwrap();

    assert_eq!(report.summary.moves, 1);
    assert_eq!(report.summary.copies, 0);
    assert_eq!(dirs.dest_files(), dirs.source_files());
    let second = sync(&dirs.source, &dirs.dest, &SyncOptions::default()).unwrap();
    assert!(second.actions.is_empty());
}

/// Two files that swapped names are swapped back without copying
#[test]
fn test_swapped_names() {
    let dirs = SyncDirs::new();
    dirs.write_source("a.txt", "first");
    dirs.write_source("b.txt", "second");
    dirs.write_dest("a.txt", "second");
    dirs.write_dest("b.txt", "first");

    let report = sync(&dirs.source, &dirs.dest, &SyncOptions::default()).unwrap();

    assert_eq!(report.summary.copies, 0);
    assert_eq!(dirs.dest_files(), dirs.source_files());
}

/// A source nested inside the destination is refused and left intact
#[test]
fn test_nested_roots_are_refused() {
    let dirs = SyncDirs::new();
    let inner = dirs.dest.join("inner");
    fs::create_dir_all(&inner).unwrap();
    fs::write(inner.join("f.txt"), "f").unwrap();

    let result = sync(&inner, &dirs.dest, &SyncOptions::default());

    assert!(matches!(result, Err(SyncError::NestedRoots(_, _))));
    assert_eq!(fs::read_to_string(inner.join("f.txt")).unwrap(), "f");
}
