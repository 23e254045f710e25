use std::fs;

use jdq_core::fsutil;
use tempfile::tempdir;

#[test]
fn copy_file_creates_parents() {
    let d = tempdir().unwrap();
    let src = d.path().join("src.json");
    fs::write(&src, b"{}").unwrap();
    let dst = d.path().join("deep/nested/out.json");
    let n = fsutil::copy_file(&src, &dst).unwrap();
    assert_eq!(n, 2);
    assert!(fsutil::exists(&dst));
}

#[test]
fn copy_dir_recursive() {
    let d = tempdir().unwrap();
    fs::create_dir_all(d.path().join("tree/a/b")).unwrap();
    fs::write(d.path().join("tree/a/b/x.txt"), b"hello").unwrap();
    fs::write(d.path().join("tree/top.txt"), b"top").unwrap();
    let dst = d.path().join("copy");
    fsutil::copy_dir(&d.path().join("tree"), &dst).unwrap();
    assert!(dst.join("a/b/x.txt").exists());
    assert!(dst.join("top.txt").exists());
    assert!(fsutil::copy_dir(&d.path().join("tree/top.txt"), &dst).is_err());
}

#[test]
fn remove_handles_files_dirs_and_absent_targets() {
    let d = tempdir().unwrap();
    let f = d.path().join("x.txt");
    fs::write(&f, b"x").unwrap();
    fsutil::remove(&f).unwrap();
    assert!(!f.exists());

    let sub = d.path().join("sub/inner");
    fsutil::create_dir(&sub).unwrap();
    fsutil::remove(&d.path().join("sub")).unwrap();
    assert!(!d.path().join("sub").exists());

    fsutil::remove(&d.path().join("ghost")).unwrap();
}

#[test]
fn backup_copy_file_and_dir() {
    let d = tempdir().unwrap();
    let f = d.path().join("save.json");
    fs::write(&f, b"{\"a\":1}").unwrap();
    let b = fsutil::backup_copy(&f).unwrap();
    assert!(b.exists());
    let name = b.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("save.json_") && name.ends_with(".bak"));

    let dir = d.path().join("slot");
    fs::create_dir_all(dir.join("inner")).unwrap();
    fs::write(dir.join("inner/y.txt"), b"y").unwrap();
    let bd = fsutil::backup_copy(&dir).unwrap();
    assert!(bd.join("inner/y.txt").exists());

    assert!(fsutil::backup_copy(&d.path().join("ghost")).is_err());
}
