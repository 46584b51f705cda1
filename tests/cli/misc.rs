use crate::cli::support::{build_index, notespark, setup_distant_vault, write_config};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Exit codes and error envelopes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    notespark()
        .args(["--format", "yaml", "index"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_command_exit_code_2() {
    notespark().arg("nonexistent").assert().code(2);
}

#[test]
fn test_usage_error_json_envelope() {
    notespark()
        .args(["--format", "json", "pick", "--attempts", "none"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""))
        .stderr(predicate::str::contains("\"code\":2"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempfile::tempdir().unwrap();

    notespark()
        .arg("--vault")
        .arg(dir.path().join("missing"))
        .args(["--quiet", "index"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error:").not());
}

#[test]
fn test_vault_not_found_json_envelope() {
    let dir = tempfile::tempdir().unwrap();

    notespark()
        .arg("--vault")
        .arg(dir.path().join("missing"))
        .args(["--format", "json", "index"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"vault_not_found\""));
}

// ============================================================================
// Configuration discovery
// ============================================================================

#[test]
fn test_malformed_config_fails() {
    let dir = setup_distant_vault();
    write_config(dir.path(), "[selection\nbroken");

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .arg("index")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_explicit_config_overrides_vault_config() {
    let dir = setup_distant_vault();
    build_index(dir.path());
    write_config(
        dir.path(),
        "[selection]\nmin_note_length = 100000\n\n[keyword_mapping]\n",
    );

    let explicit = dir.path().join("explicit.toml");
    fs::write(&explicit, "[keyword_mapping]\n").unwrap();

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .arg("--config")
        .arg(&explicit)
        .arg("pick")
        .assert()
        .success();

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .arg("pick")
        .assert()
        .code(3);
}

#[test]
fn test_global_config_is_used_without_vault_config() {
    let dir = setup_distant_vault();
    fs::remove_file(dir.path().join(".notespark/config.toml")).unwrap();

    let global = tempfile::tempdir().unwrap();
    fs::write(
        global.path().join("config.toml"),
        "[selection]\nmin_note_length = 100000\n",
    )
    .unwrap();

    notespark()
        .env("NOTESPARK_CONFIG_DIR", global.path())
        .arg("--vault")
        .arg(dir.path())
        .arg("pick")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("0 eligible note(s)"));
}

#[test]
fn test_vault_from_config_file() {
    let dir = setup_distant_vault();
    let elsewhere = tempfile::tempdir().unwrap();
    let config = elsewhere.path().join("notespark.toml");
    fs::write(
        &config,
        format!(
            "vault_path = {:?}\n\n[keyword_mapping]\n",
            dir.path().display().to_string()
        ),
    )
    .unwrap();

    notespark()
        .current_dir(elsewhere.path())
        .arg("--config")
        .arg(&config)
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 2 notes"));
}

#[test]
fn test_vault_from_environment() {
    let dir = setup_distant_vault();

    notespark()
        .env("NOTESPARK_VAULT", dir.path())
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 2 notes"));
}
