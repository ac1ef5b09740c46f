//! Integration tests for treezip-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;
use treezip_core::test_utils::ZipTestBuilder;

fn treezip_cmd() -> Command {
    cargo_bin_cmd!("treezip")
}

/// Creates `a.txt`, `sub/b.txt` and a hidden `.env` under a fresh temp dir.
fn sample_tree() -> TempDir {
    let temp = TempDir::new().expect("failed to create temp dir");
    fs::write(temp.path().join("a.txt"), "alpha").unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("sub").join("b.txt"), "beta").unwrap();
    fs::write(temp.path().join(".env"), "SECRET=1").unwrap();
    temp
}

fn pack(source: &Path, archive: &Path, extra: &[&str]) {
    treezip_cmd()
        .arg("pack")
        .arg(archive)
        .arg(source)
        .args(extra)
        .assert()
        .success();
}

fn list_names(archive: &Path) -> Vec<String> {
    let output = treezip_cmd().arg("list").arg(archive).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn write_archive(dir: &Path, name: &str, bytes: Vec<u8>) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_version_flag() {
    treezip_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("treezip"));
}

#[test]
fn test_help_flag() {
    treezip_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pack"))
        .stdout(predicate::str::contains("extract"));
}

#[test]
fn test_pack_help() {
    treezip_cmd()
        .arg("pack")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pack a directory tree"));
}

#[test]
fn test_pack_with_prefix_and_sort() {
    let tree = sample_tree();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("out.zip");

    treezip_cmd()
        .arg("pack")
        .arg(&archive)
        .arg(tree.path())
        .args(["--prefix", "pack", "--sort"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive created"));

    assert_eq!(
        list_names(&archive),
        vec!["pack/a.txt", "pack/sub/", "pack/sub/b.txt"]
    );
}

#[test]
fn test_pack_include_hidden() {
    let tree = sample_tree();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("hidden.zip");

    pack(tree.path(), &archive, &["--sort", "--include-hidden"]);

    assert_eq!(
        list_names(&archive),
        vec![".env", "a.txt", "sub/", "sub/b.txt"]
    );
}

#[test]
fn test_pack_exclude_patterns() {
    let tree = sample_tree();
    fs::write(tree.path().join("debug.log"), "noise").unwrap();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("filtered.zip");

    pack(tree.path(), &archive, &["--sort", "-x", "*.log", "-x", "sub"]);

    assert_eq!(list_names(&archive), vec!["a.txt"]);
}

#[test]
fn test_pack_no_dir_entries() {
    let tree = sample_tree();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("flat.zip");

    pack(tree.path(), &archive, &["--sort", "--no-dir-entries"]);

    assert_eq!(list_names(&archive), vec!["a.txt", "sub/b.txt"]);
}

#[test]
fn test_pack_refuses_existing_archive() {
    let tree = sample_tree();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("exists.zip");
    fs::write(&archive, "keep me").unwrap();

    treezip_cmd()
        .arg("pack")
        .arg(&archive)
        .arg(tree.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(fs::read_to_string(&archive).unwrap(), "keep me");
}

#[test]
fn test_pack_force_overwrites() {
    let tree = sample_tree();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("exists.zip");
    fs::write(&archive, "old").unwrap();

    pack(tree.path(), &archive, &["--force", "--sort"]);

    assert_eq!(list_names(&archive), vec!["a.txt", "sub/", "sub/b.txt"]);
}

#[test]
fn test_pack_missing_source() {
    let out = TempDir::new().unwrap();

    treezip_cmd()
        .arg("pack")
        .arg(out.path().join("out.zip"))
        .arg(out.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source path not found"));
}

#[test]
fn test_pack_file_as_source_suggests_add() {
    let tree = sample_tree();
    let out = TempDir::new().unwrap();

    treezip_cmd()
        .arg("pack")
        .arg(out.path().join("out.zip"))
        .arg(tree.path().join("a.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("treezip add"));
}

#[test]
fn test_pack_invalid_compression_level() {
    let tree = sample_tree();
    let out = TempDir::new().unwrap();

    treezip_cmd()
        .arg("pack")
        .arg(out.path().join("out.zip"))
        .arg(tree.path())
        .args(["--compression-level", "12"])
        .assert()
        .failure();
}

#[test]
fn test_pack_json_output() {
    let tree = sample_tree();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("out.zip");

    let output = treezip_cmd()
        .arg("--json")
        .arg("pack")
        .arg(&archive)
        .arg(tree.path())
        .args(["--sort", "--prefix", "p"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "pack");
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["files_added"], 2);
    assert_eq!(json["data"]["directories_added"], 1);
    assert_eq!(json["data"]["entries"][0], "p/a.txt");
}

#[test]
fn test_add_files_flat() {
    let tree = sample_tree();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("files.zip");

    treezip_cmd()
        .arg("add")
        .arg(&archive)
        .arg(tree.path().join("a.txt"))
        .arg(tree.path().join("sub").join("b.txt"))
        .assert()
        .success();

    assert_eq!(list_names(&archive), vec!["a.txt", "b.txt"]);
}

#[test]
fn test_add_rejects_directory() {
    let tree = sample_tree();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("files.zip");

    treezip_cmd()
        .arg("add")
        .arg(&archive)
        .arg(tree.path().join("sub"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a regular file"));

    assert!(!archive.exists());
}

#[test]
fn test_add_duplicate_file_names() {
    let tree = sample_tree();
    fs::create_dir(tree.path().join("other")).unwrap();
    fs::write(tree.path().join("other").join("b.txt"), "other").unwrap();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("files.zip");

    treezip_cmd()
        .arg("add")
        .arg(&archive)
        .arg(tree.path().join("sub").join("b.txt"))
        .arg(tree.path().join("other").join("b.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("'b.txt'"))
        .stderr(predicate::str::contains("HINT"));

    assert!(!archive.exists());
}

#[test]
fn test_pack_archive_inside_source() {
    let tree = sample_tree();
    fs::write(tree.path().join("big.bin"), vec![1u8; 200_000]).unwrap();
    let archive = tree.path().join("out.zip");

    treezip_cmd()
        .arg("pack")
        .arg(&archive)
        .arg(tree.path())
        .args(["--sort", "-l", "0"])
        .timeout(std::time::Duration::from_secs(60))
        .assert()
        .success();

    assert_eq!(
        list_names(&archive),
        vec!["a.txt", "big.bin", "sub/", "sub/b.txt"]
    );
}

#[test]
fn test_extract_round_trip() {
    let tree = sample_tree();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("tree.zip");
    pack(tree.path(), &archive, &[]);
    let dest = out.path().join("restored");

    treezip_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extraction complete"));

    assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "alpha");
    assert_eq!(fs::read_to_string(dest.join("sub/b.txt")).unwrap(), "beta");
    assert!(!dest.join(".env").exists());
}

#[test]
fn test_extract_selected_entries() {
    let tree = sample_tree();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("tree.zip");
    pack(tree.path(), &archive, &[]);
    let dest = out.path().join("partial");

    treezip_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(&dest)
        .args(["-e", "sub/b.txt"])
        .assert()
        .success();

    assert!(dest.join("sub/b.txt").exists());
    assert!(!dest.join("a.txt").exists());
}

#[test]
fn test_extract_missing_entry() {
    let tree = sample_tree();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("tree.zip");
    pack(tree.path(), &archive, &[]);

    treezip_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(out.path().join("dest"))
        .args(["--entry", "SUB/B.TXT"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("treezip list"));
}

#[test]
fn test_extract_default_output_is_current_dir() {
    let bytes = ZipTestBuilder::new().add_file("here.txt", b"here").build();
    let out = TempDir::new().unwrap();
    let archive = write_archive(out.path(), "here.zip", bytes);
    let work = out.path().join("work");
    fs::create_dir(&work).unwrap();

    treezip_cmd()
        .current_dir(&work)
        .arg("extract")
        .arg(&archive)
        .assert()
        .success();

    assert!(work.join("here.txt").exists());
}

#[test]
fn test_extract_path_traversal_rejected() {
    let bytes = ZipTestBuilder::new()
        .add_file("../escape.txt", b"evil")
        .build();
    let out = TempDir::new().unwrap();
    let archive = write_archive(out.path(), "evil.zip", bytes);
    let dest = out.path().join("dest");

    treezip_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(&dest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("path traversal"));

    assert!(!out.path().join("escape.txt").exists());
}

#[test]
fn test_extract_nonexistent_archive() {
    let out = TempDir::new().unwrap();

    treezip_cmd()
        .arg("extract")
        .arg(out.path().join("missing.zip"))
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open archive"));
}

#[test]
fn test_extract_json_output() {
    let bytes = ZipTestBuilder::new()
        .add_directory("d/")
        .add_file("d/f.txt", b"12345")
        .build();
    let out = TempDir::new().unwrap();
    let archive = write_archive(out.path(), "j.zip", bytes);

    let output = treezip_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(out.path().join("dest"))
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "extract");
    assert_eq!(json["data"]["files_extracted"], 1);
    assert_eq!(json["data"]["directories_created"], 1);
    assert_eq!(json["data"]["bytes_written"], 5);
}

#[test]
fn test_list_verbatim_names() {
    let bytes = ZipTestBuilder::new()
        .add_file("b.txt", b"b")
        .add_file("odd/../name.txt", b"x")
        .add_directory("a/")
        .build();
    let out = TempDir::new().unwrap();
    let archive = write_archive(out.path(), "odd.zip", bytes);

    assert_eq!(list_names(&archive), vec!["b.txt", "odd/../name.txt", "a/"]);
}

#[test]
fn test_list_long_format() {
    let bytes = ZipTestBuilder::new()
        .add_directory("docs/")
        .add_file("docs/readme.txt", &[b'x'; 2048])
        .build();
    let out = TempDir::new().unwrap();
    let archive = write_archive(out.path(), "docs.zip", bytes);

    treezip_cmd()
        .arg("list")
        .arg(&archive)
        .args(["--long", "--human-readable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docs/readme.txt"))
        .stdout(predicate::str::contains("2.0 KB"))
        .stdout(predicate::str::contains("Total: 1 files"));
}

#[test]
fn test_list_json_output() {
    let bytes = ZipTestBuilder::new().add_file("one.txt", b"1").build();
    let out = TempDir::new().unwrap();
    let archive = write_archive(out.path(), "one.zip", bytes);

    let output = treezip_cmd()
        .arg("--json")
        .arg("list")
        .arg(&archive)
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"][0], "one.txt");
}

#[test]
fn test_list_corrupt_archive_json_error() {
    let out = TempDir::new().unwrap();
    let archive = write_archive(out.path(), "broken.zip", b"not a zip".to_vec());

    let output = treezip_cmd()
        .arg("--json")
        .arg("list")
        .arg(&archive)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "error");
}

#[test]
fn test_quiet_suppresses_output() {
    let tree = sample_tree();
    let out = TempDir::new().unwrap();

    treezip_cmd()
        .arg("pack")
        .arg(out.path().join("q.zip"))
        .arg(tree.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_completion_bash() {
    treezip_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("treezip"));
}
