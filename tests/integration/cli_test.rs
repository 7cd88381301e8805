//! Integration tests for the scriptcut CLI

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{demo_content, fixtures_dir, temp_fixture, DEMO_BYTES, DEMO_COMMANDS};

/// scriptcut with colors off and an empty config home.
fn scriptcut(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("scriptcut").expect("binary built");
    cmd.env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("run scriptcut");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).expect("utf-8 stdout")
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    scriptcut(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("dump"))
        .stdout(predicate::str::contains("cut"))
        .stdout(predicate::str::contains("play"));
}

#[test]
fn cut_help_shows_usage() {
    let home = TempDir::new().unwrap();
    scriptcut(home.path())
        .args(["cut", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<BASE> <FROM> [TO]"))
        .stdout(predicate::str::contains("--dry-run"));
}

// ============================================================================
// Info
// ============================================================================

#[test]
fn info_summarizes_capture() {
    let home = TempDir::new().unwrap();
    let base = fixtures_dir().join("demo");
    let stdout = stdout_of(scriptcut(home.path()).arg("info").arg(&base));

    assert!(stdout.contains(&format!("Commands:  {} (5 control sequences)", DEMO_COMMANDS)));
    assert!(stdout.contains("87 B"));
    assert!(stdout.contains("over 12 timing entries"));
    assert!(stdout.contains("graphic rendition"));
    assert!(stdout.contains("operating system command"));
}

#[test]
fn info_json_is_machine_readable() {
    let home = TempDir::new().unwrap();
    let base = fixtures_dir().join("demo.session");
    let stdout = stdout_of(scriptcut(home.path()).arg("info").arg(&base).arg("--json"));

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["commands"], DEMO_COMMANDS);
    assert_eq!(json["content_bytes"], DEMO_BYTES);
    assert_eq!(json["timing_entries"], 12);
    assert_eq!(json["consistent"], true);
    assert_eq!(json["categories"]["graphic rendition"], 3);
    assert_eq!(json["categories"]["operating system command"], 2);
}

#[test]
fn info_missing_capture_fails() {
    let home = TempDir::new().unwrap();
    scriptcut(home.path())
        .args(["info", "/nonexistent/capture"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open capture"))
        .stderr(predicate::str::contains("File not found"));
}

// ============================================================================
// Dump
// ============================================================================

#[test]
fn dump_window() {
    let home = TempDir::new().unwrap();
    let base = fixtures_dir().join("demo");
    let stdout = stdout_of(
        scriptcut(home.path())
            .arg("dump")
            .arg(&base)
            .args(["--from", "7", "--count", "2"]),
    );

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].trim_start().starts_with("7 "));
    assert!(lines[0].contains("SGR set graphic rendition (0)"));
    assert!(lines[1].contains("SGR set graphic rendition (01;34)"));
}

#[test]
fn dump_never_emits_raw_escapes() {
    let home = TempDir::new().unwrap();
    let base = fixtures_dir().join("demo");
    let stdout = stdout_of(scriptcut(home.path()).arg("dump").arg(&base));

    assert_eq!(stdout.lines().count(), DEMO_COMMANDS);
    assert!(!stdout.contains('\x1b'));
    assert!(!stdout.contains('\x07'));
}

#[test]
fn dump_boundaries() {
    let home = TempDir::new().unwrap();
    let base = fixtures_dir().join("demo");
    let stdout = stdout_of(
        scriptcut(home.path())
            .arg("dump")
            .arg(&base)
            .args(["--boundaries", "--count", "5"]),
    );

    let positions: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(positions, ["0", "3", "4", "5", "7"]);
}

// ============================================================================
// Cut
// ============================================================================

#[test]
fn cut_removes_range_and_keeps_backup() {
    let home = TempDir::new().unwrap();
    let (_dir, base) = temp_fixture("demo");

    scriptcut(home.path())
        .arg("cut")
        .arg(&base)
        .args(["7", "27"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 20 commands (33 B)"));

    let session = fs::read_to_string(base.with_extension("session")).unwrap();
    assert!(session.starts_with("Script edited by scriptcut\n"));
    assert!(!session.contains("Cargo.toml"));

    let timing = fs::read_to_string(base.with_extension("timing")).unwrap();
    assert_eq!(timing.lines().count(), 11);
    assert!(!timing.contains(" 33\n"));

    let backup = fs::read_to_string(base.with_extension("session.bak")).unwrap();
    assert!(backup.contains("Cargo.toml"));
}

#[test]
fn cut_single_command() {
    let home = TempDir::new().unwrap();
    let (_dir, base) = temp_fixture("demo");

    scriptcut(home.path())
        .arg("cut")
        .arg(&base)
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 commands (17 B)"));

    let json = stdout_of(scriptcut(home.path()).arg("info").arg(&base).arg("--json"));
    let json: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(json["commands"], DEMO_COMMANDS - 1);
    assert_eq!(json["consistent"], true);
}

#[test]
fn cut_dry_run_changes_nothing() {
    let home = TempDir::new().unwrap();
    let (_dir, base) = temp_fixture("demo");
    let before = fs::read(base.with_extension("session")).unwrap();

    scriptcut(home.path())
        .arg("cut")
        .arg(&base)
        .args(["7", "27", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would remove 20 commands (33 B)"));

    assert_eq!(fs::read(base.with_extension("session")).unwrap(), before);
    assert!(!base.with_extension("session.bak").exists());
}

#[test]
fn cut_rejects_bad_ranges() {
    let home = TempDir::new().unwrap();
    let (_dir, base) = temp_fixture("demo");

    scriptcut(home.path())
        .arg("cut")
        .arg(&base)
        .arg("100")
        .assert()
        .failure()
        .stderr(predicate::str::contains("past the end"));

    scriptcut(home.path())
        .arg("cut")
        .arg(&base)
        .args(["10", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range"));
}

#[test]
fn cut_honours_config_file() {
    let home = TempDir::new().unwrap();
    let (dir, base) = temp_fixture("demo");
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[capture]\nheader = \"trimmed\"\nkeep_backups = false\n").unwrap();

    scriptcut(home.path())
        .arg("--config")
        .arg(&config)
        .arg("cut")
        .arg(&base)
        .arg("0")
        .assert()
        .success();

    let session = fs::read_to_string(base.with_extension("session")).unwrap();
    assert!(session.starts_with("trimmed\n"));
    assert!(!base.with_extension("session.bak").exists());
}

#[test]
fn cut_refuses_lossily_decoded_capture() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("broken");
    let session = b"Script started on now\na\xffbcd".to_vec();
    fs::write(base.with_extension("session"), &session).unwrap();
    fs::write(base.with_extension("timing"), "0.1 5\n").unwrap();

    scriptcut(home.path())
        .arg("cut")
        .arg(&base)
        .arg("4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid UTF-8"));

    assert_eq!(fs::read(base.with_extension("session")).unwrap(), session);
    assert_eq!(fs::read_to_string(base.with_extension("timing")).unwrap(), "0.1 5\n");
    assert!(!base.with_extension("session.bak").exists());

    let json = stdout_of(scriptcut(home.path()).arg("info").arg(&base).arg("--json"));
    let json: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(json["lossy"], true);
}

// ============================================================================
// Play, config, completions
// ============================================================================

#[test]
fn play_writes_content_to_stdout() {
    let home = TempDir::new().unwrap();
    let base = fixtures_dir().join("demo");
    let output = scriptcut(home.path())
        .arg("play")
        .arg(&base)
        .args(["--speed", "16"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("{}\x1b[0m", demo_content()));
}

#[test]
fn play_from_position() {
    let home = TempDir::new().unwrap();
    let base = fixtures_dir().join("demo");
    let output = scriptcut(home.path())
        .arg("play")
        .arg(&base)
        .args(["--from", "36", "--speed", "16"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "exit\r\n\x1b[0m");
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    scriptcut(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[capture]"))
        .stdout(predicate::str::contains("header = \"Script edited by scriptcut\""))
        .stdout(predicate::str::contains("max_sleep_ms = 250"));
}

#[test]
fn completions_generate_script() {
    let home = TempDir::new().unwrap();
    scriptcut(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scriptcut"));
}
