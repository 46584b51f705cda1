use crate::cli::support::{
    build_index, long_body, notespark, setup_distant_vault, setup_vault, stdout_json, write_note,
};
use predicates::prelude::*;

// ============================================================================
// Distance command tests
// ============================================================================

#[test]
fn test_distance_maximal_pair() {
    let dir = setup_distant_vault();
    build_index(dir.path());

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .args(["distance", "Philosophy/identity.md", "Tech/ai.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance: 100/100"))
        .stdout(predicate::str::contains("folder:   30"))
        .stdout(predicate::str::contains("tags:     40"))
        .stdout(predicate::str::contains("keywords: 30"));
}

#[test]
fn test_distance_identical_profile_is_zero() {
    let dir = setup_vault();
    write_note(dir.path(), "Journal/monday.md", &long_body("#daily #work #focus"));
    write_note(dir.path(), "Journal/tuesday.md", &long_body("#Daily #WORK"));
    // Hand-written index: both notes carry exactly the same keywords
    write_note(
        dir.path(),
        ".notespark/keywords.json",
        r#"{
  "journal": ["Journal/monday.md", "Journal/tuesday.md"],
  "routine": ["Journal/monday.md", "Journal/tuesday.md"]
}"#,
    );

    let json = stdout_json(
        notespark()
            .arg("--vault")
            .arg(dir.path())
            .args(["--format", "json", "distance", "Journal/monday.md", "Journal/tuesday.md"]),
    );

    assert_eq!(json["distance_score"], 0);
    assert_eq!(json["breakdown"]["folder"], 0);
    assert_eq!(json["breakdown"]["tags"], 0);
    assert_eq!(json["breakdown"]["keywords"], 0);
    assert_eq!(json["note_b"]["tags"], serde_json::json!(["daily", "work"]));
}

#[test]
fn test_distance_shared_top_level_folder() {
    let dir = setup_vault();
    write_note(dir.path(), "Projects/alpha/plan.md", "#planning #q1");
    write_note(dir.path(), "Projects/beta/plan.md", "#planning #review");

    let json = stdout_json(
        notespark()
            .arg("--vault")
            .arg(dir.path())
            .args([
                "--format",
                "json",
                "distance",
                "Projects/alpha/plan.md",
                "Projects/beta/plan.md",
            ]),
    );

    assert_eq!(json["breakdown"]["folder"], 15);
    assert_eq!(json["breakdown"]["tags"], 20);
    // No index yet: keyword sets are empty
    assert_eq!(json["breakdown"]["keywords"], 30);
    assert_eq!(json["distance_score"], 65);
}

#[test]
fn test_distance_uses_indexed_keywords() {
    let dir = setup_vault();
    write_note(dir.path(), "Projects/alpha/plan.md", "#planning");
    write_note(dir.path(), "Projects/beta/plan.md", "#planning");
    build_index(dir.path());

    // Same stem, top-level folder and tag: {plan, projects, planning} on both sides
    let json = stdout_json(
        notespark()
            .arg("--vault")
            .arg(dir.path())
            .args([
                "--format",
                "json",
                "distance",
                "Projects/alpha/plan.md",
                "Projects/beta/plan.md",
            ]),
    );
    assert_eq!(json["breakdown"]["keywords"], 0);
}

#[test]
fn test_distance_unknown_note_exit_code_3() {
    let dir = setup_distant_vault();

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .args(["distance", "Philosophy/identity.md", "Nowhere/missing.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note not found: Nowhere/missing.md"));
}

#[test]
fn test_distance_missing_argument_exit_code_2() {
    notespark()
        .args(["distance", "only-one.md"])
        .assert()
        .code(2);
}

#[test]
fn test_distance_rejects_paths_outside_vault() {
    let dir = setup_vault();
    write_note(dir.path(), "outside.md", &long_body("#secret"));
    write_note(dir.path(), "vault/Tech/ai.md", &long_body("#ai"));

    notespark()
        .arg("--vault")
        .arg(dir.path().join("vault"))
        .args(["distance", "../outside.md", "Tech/ai.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note not found: ../outside.md"));
}

#[test]
fn test_distance_lowercases_hand_edited_index() {
    let dir = setup_vault();
    write_note(dir.path(), "Journal/monday.md", "#daily");
    write_note(dir.path(), "Journal/tuesday.md", "#daily");
    write_note(
        dir.path(),
        ".notespark/keywords.json",
        r#"{"Routine": ["Journal/monday.md", "Journal/monday.md"], "routine": ["Journal/tuesday.md"]}"#,
    );

    let json = stdout_json(
        notespark()
            .arg("--vault")
            .arg(dir.path())
            .args(["--format", "json", "distance", "Journal/monday.md", "Journal/tuesday.md"]),
    );

    assert_eq!(json["note_a"]["keywords"], serde_json::json!(["routine"]));
    assert_eq!(json["breakdown"]["keywords"], 0);
}
