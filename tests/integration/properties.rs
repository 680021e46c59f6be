//! Cross-operation guarantees from the crate contract.

use fskit::{PathKind, files, paths};
use tempfile::tempdir;

#[test]
fn test_copy_preserves_bytes_exactly() {
    super::init_tracing();
    let temp = tempdir().unwrap();
    let from = temp.path().join("source.bin");
    let to = temp.path().join("copy.bin");

    let content: Vec<u8> = (0..10_000u32).flat_map(u32::to_le_bytes).collect();
    std::fs::write(&from, &content).unwrap();

    files::copy(&from, &to, true).unwrap();
    assert_eq!(std::fs::read(&to).unwrap(), content);
}

#[test]
fn test_concat_yields_ca_then_cb_with_no_separator() {
    let temp = tempdir().unwrap();
    let a = temp.path().join("a.bin");
    let b = temp.path().join("b.bin");
    let out = temp.path().join("out.bin");

    let ca = b"ends without newline".to_vec();
    let cb = b"starts immediately".to_vec();
    std::fs::write(&a, &ca).unwrap();
    std::fs::write(&b, &cb).unwrap();

    files::concat(&a, &b, &out, true).unwrap();

    let mut expected = ca.clone();
    expected.extend_from_slice(&cb);
    assert_eq!(std::fs::read(&out).unwrap(), expected);
}

#[test]
fn test_join_dirname_basename_round_trip() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("roundtrip.txt");
    std::fs::write(&file, "x").unwrap();

    let p = file.to_str().unwrap();
    assert!(p.contains(std::path::MAIN_SEPARATOR));

    let rebuilt = paths::join(&paths::dirname(p), &paths::basename(p));
    assert_eq!(fskit::exists(&rebuilt, PathKind::Any), fskit::exists(p, PathKind::Any));
    assert!(fskit::exists(&rebuilt, PathKind::Regular));
}

#[test]
fn test_join_dirname_basename_scenarios() {
    let sep = std::path::MAIN_SEPARATOR;
    let home_user = format!("{sep}home{sep}user");
    let docs = format!("{home_user}{sep}docs");

    assert_eq!(paths::join(&home_user, "docs"), docs);
    assert_eq!(paths::basename(&docs), "docs");
    assert_eq!(paths::dirname(&docs), home_user);
}

#[test]
fn test_mkdirs_then_remove_is_an_inverse() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("built");
    let deep = root.join("one").join("two").join("three");

    fskit::mkdirs(deep.to_str().unwrap()).unwrap();
    assert!(fskit::exists(&deep, PathKind::Folder));

    std::fs::write(deep.join("leaf.txt"), "payload").unwrap();

    fskit::remove(&root, true, false).unwrap();
    assert!(!fskit::exists(&root, PathKind::Any));
}

#[test]
#[cfg(unix)]
fn test_hidden_listing_rules() {
    let temp = tempdir().unwrap();
    let base = temp.path().to_str().unwrap();
    std::fs::write(temp.path().join(".hidden"), "").unwrap();
    std::fs::write(temp.path().join("a.txt"), "").unwrap();
    std::fs::create_dir(temp.path().join("sub")).unwrap();

    let visible = fskit::list(base, false, None).unwrap();
    let mut names: Vec<_> = visible
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["a.txt", "sub"]);

    let everything = fskit::list(base, true, None).unwrap();
    assert_eq!(everything.len(), 3);
    assert!(everything.iter().any(|p| p.ends_with(".hidden")));
}

#[test]
fn test_error_kinds_are_matchable_across_operations() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("missing");
    let present = temp.path().join("present");
    std::fs::write(&present, "x").unwrap();

    // the same cause enumeration covers every operation family
    assert!(matches!(
        files::copy(&missing, temp.path().join("out"), true),
        Err(fskit::FsError::NotFound { .. })
    ));
    assert!(matches!(
        fskit::remove(&missing, true, false),
        Err(fskit::FsError::NotFound { .. })
    ));
    assert!(matches!(
        files::copy(&present, &present, false),
        Err(fskit::FsError::AlreadyExists { .. })
    ));
    assert!(matches!(fskit::mkdirs(""), Err(fskit::FsError::EmptyPath)));
}
