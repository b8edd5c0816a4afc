//! Command line behavior of the tapseek binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tapseek() -> Command {
    let mut cmd = Command::cargo_bin("tapseek").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_subcommands() {
    tapseek()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn play_requires_a_file() {
    tapseek()
        .arg("play")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<FILE>"));
}

#[test]
fn play_rejects_non_positive_duration() {
    let dir = TempDir::new().unwrap();
    let media = dir.path().join("clip.mp4");
    fs::write(&media, b"").unwrap();

    tapseek()
        .arg("play")
        .arg(&media)
        .args(["--duration", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duration must be a positive"));
}

#[test]
fn config_show_prints_file_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[player]\ndwell_ms = 4500\n").unwrap();

    tapseek()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dwell_ms = 4500"))
        .stdout(predicate::str::contains("hit_size = 3"))
        .stdout(predicate::str::contains("theme = \"cinema\""));
}

#[test]
fn config_path_echoes_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");

    tapseek()
        .args(["config", "path", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    tapseek()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[player]"));
    assert!(written.contains("dwell_ms = 3000"));

    tapseek()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    tapseek()
        .arg("--config")
        .arg(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn completions_generate_for_bash() {
    tapseek()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tapseek"));
}
