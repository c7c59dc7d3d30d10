use assert_cmd::{crate_name, Command};
use assertables::assert_contains;
use iconstrip::cli::{run, Config};
use iconstrip::Error;
use std::fs;
use tempfile::TempDir;

use super::utils::{CIRCLE_ICON, SQUARE_ICON};

fn icon_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("could not create tempdir");
    fs::write(dir.path().join("badge.svg"), CIRCLE_ICON).expect("write failed");
    fs::write(dir.path().join("tiles.svg"), SQUARE_ICON).expect("write failed");
    dir
}

#[test]
fn test_cmdline_no_args() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.assert().failure().code(2);
}

#[test]
fn test_cmdline_help() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = String::from_utf8(cmd.arg("-h").assert().success().get_output().stdout.clone())
        .expect("non-UTF8");
    assert_contains!(output, "Usage");
    assert_contains!(output, "--mode");
}

#[test]
fn test_cmdline_writes_output() {
    let dir = icon_dir();
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg("--dir").arg(dir.path()).arg("badge").assert().success();

    let output = fs::read_to_string(dir.path().join("badge.new.svg")).expect("no output");
    assert_contains!(output, "<title>badge</title>");
    // input left in place
    assert_eq!(
        fs::read_to_string(dir.path().join("badge.svg")).unwrap(),
        CIRCLE_ICON
    );
}

#[test]
fn test_cmdline_missing_input() {
    let dir = icon_dir();
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["badge", "nonexistent"])
        .assert()
        .failure();

    // other icons are still processed
    assert!(dir.path().join("badge.new.svg").exists());
    assert!(!dir.path().join("nonexistent.new.svg").exists());
}

#[test]
fn test_cmdline_bad_mode() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.args(["--mode", "perimeter", "badge"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_cmdline_editor_failure() {
    let dir = icon_dir();
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["--align", "--editor", "iconstrip-no-such-editor", "badge"])
        .assert()
        .failure();
}

#[test]
fn test_cmdline_config() {
    let config = Config::from_cmdline(&format!("{} --help", crate_name!()));
    assert!(config.is_err());

    let dir = icon_dir();
    let config = Config::from_cmdline(&format!(
        "{} --dir {} --mode area --anchor center --inner 8 --ring tiles badge",
        crate_name!(),
        dir.path().to_str().unwrap()
    ))
    .expect("cmdline should be valid");
    run(config).expect("run failed");

    for name in ["tiles", "badge"] {
        let output =
            fs::read_to_string(dir.path().join(format!("{name}.new.svg"))).expect("no output");
        assert_contains!(output, "A 24,24 0 0,1 48,24");
    }
}

#[test]
fn test_cmdline_batch_error() {
    let dir = icon_dir();
    fs::write(
        dir.path().join("plain.svg"),
        r#"<svg viewBox="0 0 48 48"><path d="M0 0 h48 v48 h-48 z"/></svg>"#,
    )
    .unwrap();
    let config = Config::from_cmdline(&format!(
        "{} --dir {} plain badge gone",
        crate_name!(),
        dir.path().to_str().unwrap()
    ))
    .unwrap();

    match run(config) {
        Err(Error::Batch(failed)) => assert_eq!(failed, ["plain", "gone"]),
        other => panic!("expected batch error, got {other:?}"),
    }
}
