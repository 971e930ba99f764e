//! Integration tests running the mapstamp binary.

mod common;

use assert_cmd::Command;
use common::{ExifSpec, write_fixture_jpeg};
use predicates::prelude::*;
use std::sync::OnceLock;

static SCRATCH_HOME: OnceLock<tempfile::TempDir> = OnceLock::new();

fn mapstamp() -> Command {
    // Keep the developer's real config out of the picture. `directories`
    // resolves through XDG_CONFIG_HOME on Linux and HOME on macOS, so both
    // are pointed at a scratch directory shared across the test binary.
    let home = SCRATCH_HOME.get_or_init(|| tempfile::tempdir().unwrap());

    let mut cmd = Command::cargo_bin("mapstamp").unwrap();
    cmd.env("HOME", home.path());
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"));
    cmd
}

#[test]
fn test_no_arguments_prints_help() {
    mapstamp()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_flag() {
    mapstamp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mapstamp"));
}

#[test]
fn test_missing_source_directory_fails() {
    mapstamp()
        .arg("/nonexistent/timelapse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_empty_source_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    mapstamp()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no image files"));
}

#[test]
fn test_rejects_out_of_range_map_size() {
    let dir = tempfile::tempdir().unwrap();
    mapstamp()
        .arg(dir.path())
        .args(["--map-size", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in range (0, 100]"));
}

#[test]
fn test_rejects_unknown_color() {
    let dir = tempfile::tempdir().unwrap();
    mapstamp()
        .arg(dir.path())
        .args(["--map-line-color", "sparkly"])
        .assert()
        .failure();
}

#[test]
fn test_config_path_prints_a_path() {
    mapstamp()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[cfg(unix)]
#[test]
fn test_config_path_resolves_inside_scratch_home() {
    let output = mapstamp().args(["config", "path"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let home = SCRATCH_HOME.get().unwrap();
    assert!(stdout.trim().starts_with(&*home.path().to_string_lossy()));
}

#[test]
fn test_config_show_prints_defaults() {
    mapstamp()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("overlay"));
}

#[test]
fn test_overlay_end_to_end_via_binary() {
    let dir = tempfile::tempdir().unwrap();
    let gps = Some(((44, 11, 102_872_399), 'N', (94, 0, 178_621_199), 'W'));
    write_fixture_jpeg(
        &dir.path().join("a.jpg"),
        &ExifSpec {
            gps,
            datetime: None,
        },
    );
    write_fixture_jpeg(
        &dir.path().join("b.jpg"),
        &ExifSpec {
            gps: Some(((44, 12, 500_000_000), 'N', (94, 1, 250_000_000), 'W')),
            datetime: None,
        },
    );

    mapstamp()
        .arg(dir.path())
        .args(["--quiet"])
        .assert()
        .success();

    assert!(dir.path().join("a_map.JPG").exists());
    assert!(dir.path().join("b_map.JPG").exists());
}

#[test]
fn test_decimate_via_binary_with_copy_transfer() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    for i in 0..6 {
        std::fs::write(src.path().join(format!("img{i}.jpg")), b"x").unwrap();
    }

    mapstamp()
        .args(["decimate"])
        .arg(src.path())
        .arg(dst.path())
        .args(["--keep-factor", "3", "--transfer", "copy"])
        .assert()
        .success();

    let kept = std::fs::read_dir(dst.path()).unwrap().count();
    assert_eq!(kept, 2);
}

#[test]
fn test_rename_dryrun_changes_nothing() {
    let src = tempfile::tempdir().unwrap();
    std::fs::write(src.path().join("2024-06-01_10:00:00.jpg"), b"x").unwrap();

    mapstamp()
        .args(["rename"])
        .arg(src.path())
        .arg("--dryrun")
        .assert()
        .success();

    assert!(src.path().join("2024-06-01_10:00:00.jpg").exists());
    assert_eq!(std::fs::read_dir(src.path()).unwrap().count(), 1);
}
