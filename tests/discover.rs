use ibooks_highlights::discover::{DiscoverError, StoreKind, locate_store};

#[test]
fn finds_sqlite_file_and_ignores_sidecars() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("notes.txt"), "x").expect("write txt");
    std::fs::write(dir.path().join("AEAnnotation.sqlite-wal"), "").expect("write wal");
    std::fs::write(dir.path().join("AEAnnotation.sqlite-shm"), "").expect("write shm");
    std::fs::write(dir.path().join("AEAnnotation.sqlite"), "").expect("write db");

    let found = locate_store(StoreKind::Annotations, dir.path()).expect("locate");
    assert_eq!(found, dir.path().join("AEAnnotation.sqlite"));
}

#[test]
fn picks_first_by_name_when_several_match() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("b.sqlite"), "").expect("write b");
    std::fs::write(dir.path().join("a.sqlite"), "").expect("write a");

    let found = locate_store(StoreKind::Library, dir.path()).expect("locate");
    assert_eq!(found, dir.path().join("a.sqlite"));
}

#[test]
fn does_not_descend_into_subdirectories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("old");
    std::fs::create_dir(&nested).expect("mkdir");
    std::fs::write(nested.join("stale.sqlite"), "").expect("write nested");

    let err = locate_store(StoreKind::Library, dir.path()).expect_err("nothing at top level");
    assert!(matches!(err, DiscoverError::MissingStore { kind: StoreKind::Library, .. }));
}

#[test]
fn reports_missing_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("AEAnnotation");

    let err = locate_store(StoreKind::Annotations, &missing).expect_err("missing dir");
    let message = err.to_string();
    assert!(message.contains("couldn't find the iBooks annotations database"));
    assert!(message.contains("AEAnnotation"));
}
