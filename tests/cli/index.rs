use crate::cli::support::{notespark, setup_distant_vault, setup_vault, write_config, write_note};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Index command tests
// ============================================================================

#[test]
fn test_index_reports_counts() {
    let dir = setup_distant_vault();

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 2 notes (6 keywords)"));
}

#[test]
fn test_index_writes_keyword_file() {
    let dir = setup_distant_vault();

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .arg("index")
        .assert()
        .success();

    let path = dir.path().join(".notespark/keywords.json");
    let index: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(index["identity"], serde_json::json!(["Philosophy/identity.md"]));
    assert_eq!(index["tech"], serde_json::json!(["Tech/ai.md"]));
    assert_eq!(index["self"], serde_json::json!(["Philosophy/identity.md"]));
}

#[test]
fn test_index_json_output() {
    let dir = setup_distant_vault();

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .args(["--format", "json", "index"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""))
        .stdout(predicate::str::contains("\"notes_indexed\": 2"))
        .stdout(predicate::str::contains("\"keywords_indexed\": 6"));
}

#[test]
fn test_index_skips_hidden_directories() {
    let dir = setup_distant_vault();
    write_note(dir.path(), ".trash/old.md", "#identity deleted note");

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 2 notes"));
}

#[test]
fn test_index_applies_keyword_mapping() {
    let dir = setup_vault();
    write_config(
        dir.path(),
        "[keyword_mapping]\n\"영화\" = [\"movie\", \"film\"]\n",
    );
    write_note(dir.path(), "Culture/weekend.md", "Watched an old Film noir.");

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .arg("index")
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join(".notespark/keywords.json")).unwrap();
    let index: serde_json::Value = serde_json::from_str(&content).unwrap();
    for keyword in ["영화", "movie", "film", "culture", "weekend"] {
        assert_eq!(
            index[keyword],
            serde_json::json!(["Culture/weekend.md"]),
            "keyword {}",
            keyword
        );
    }
}

#[test]
fn test_index_custom_extension() {
    let dir = setup_vault();
    write_config(dir.path(), "note_extension = \"txt\"\n[keyword_mapping]\n");
    write_note(dir.path(), "a.txt", "#alpha");
    write_note(dir.path(), "b.md", "#beta");

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 1 notes"));
}

#[test]
fn test_index_quiet_prints_nothing() {
    let dir = setup_distant_vault();

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .args(["--quiet", "index"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_index_missing_vault_exit_code_3() {
    let dir = tempfile::tempdir().unwrap();

    notespark()
        .arg("--vault")
        .arg(dir.path().join("missing"))
        .arg("index")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vault not found"));
}
