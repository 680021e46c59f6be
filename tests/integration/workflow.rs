//! End-to-end lifecycle: discover a directory, list its entries, build a
//! nested path, create it, verify it, move it, and tear it down.

use fskit::{PATH_SEPARATOR, PathKind, paths};
use tempfile::tempdir;

#[test]
fn test_full_directory_lifecycle() {
    super::init_tracing();
    let temp = tempdir().unwrap();
    let base = temp.path().to_str().unwrap();

    // seed the base directory with a few visible entries and one hidden one
    std::fs::write(temp.path().join("alpha.txt"), "a").unwrap();
    std::fs::write(temp.path().join("beta.txt"), "b").unwrap();
    std::fs::write(temp.path().join(".hidden"), "h").unwrap();

    // counting and listing agree, and both exclude the hidden entry
    // (dotfiles only count as hidden on POSIX)
    let visible = if cfg!(windows) { 3 } else { 2 };
    let count = fskit::count_entries(base, false, None).unwrap();
    let siblings = fskit::list(base, false, None).unwrap();
    assert_eq!(count, siblings.len());
    assert_eq!(count, visible);
    for path in &siblings {
        assert!(path.is_absolute());
        assert!(fskit::exists(path, PathKind::Any));
    }

    // build a deeply nested subdirectory path from components
    let nested = ["super", "cali", "fragi", "listic"].join(&PATH_SEPARATOR.to_string());
    let tree = paths::join(base, &nested);

    // create it, verify it, and confirm idempotence
    fskit::mkdirs(&tree).unwrap();
    assert!(fskit::exists(&tree, PathKind::Folder));
    fskit::mkdirs(&tree).unwrap();

    // the new tree shows up in a directories-only listing
    let dirs = fskit::list(base, false, Some(&fskit::DirsOnly)).unwrap();
    assert_eq!(dirs.len(), 1);
    assert!(dirs[0].ends_with("super"));

    // move the whole tree aside and verify both ends
    let moved = paths::join(base, "renamed");
    fskit::move_path(paths::join(base, "super"), &moved, false).unwrap();
    assert!(!fskit::exists(paths::join(base, "super"), PathKind::Any));
    assert!(fskit::exists(&moved, PathKind::Folder));

    // recursive removal leaves nothing behind
    fskit::remove(&moved, true, false).unwrap();
    assert!(!fskit::exists(&moved, PathKind::Any));

    // the original files were untouched throughout
    assert_eq!(fskit::count_entries(base, false, None).unwrap(), visible);
}

#[test]
fn test_resolve_list_round_trip() {
    let temp = tempdir().unwrap();
    std::fs::write(temp.path().join("entry.txt"), "x").unwrap();

    // listing through a dotted relative form resolves to the same entries
    let dotted = format!(
        "{base}{sep}.{sep}",
        base = temp.path().display(),
        sep = PATH_SEPARATOR
    );
    let via_dotted = fskit::list(&dotted, false, None).unwrap();
    let direct = fskit::list(temp.path().to_str().unwrap(), false, None).unwrap();
    assert_eq!(via_dotted, direct);
}

#[test]
fn test_move_collision_reports_distinct_cause() {
    let temp = tempdir().unwrap();
    let existing = temp.path().join("existing");
    let newcomer = temp.path().join("newcomer");
    std::fs::create_dir(&existing).unwrap();
    std::fs::create_dir(&newcomer).unwrap();
    std::fs::write(existing.join("marker"), "keep").unwrap();

    let result = fskit::move_path(&newcomer, &existing, false);
    assert!(matches!(result, Err(fskit::FsError::AlreadyExists { .. })));

    // both directories are intact after the refused move
    assert!(fskit::exists(&newcomer, PathKind::Folder));
    assert!(fskit::exists(existing.join("marker"), PathKind::Regular));
}
