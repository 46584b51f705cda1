use crate::cli::support::{
    build_index, long_body, notespark, setup_distant_vault, setup_vault, stdout_json, write_config,
    write_note,
};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Pick command tests
// ============================================================================

#[test]
fn test_pick_two_note_vault_scores_maximum() {
    let dir = setup_distant_vault();
    build_index(dir.path());

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .args(["pick", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Distance: 100/100 (folder 30, tags 40, keywords 30)",
        ))
        .stdout(predicate::str::contains("Philosophy/identity.md"))
        .stdout(predicate::str::contains("Tech/ai.md"));
}

#[test]
fn test_pick_json_output() {
    let dir = setup_distant_vault();
    build_index(dir.path());

    let json = stdout_json(
        notespark()
            .arg("--vault")
            .arg(dir.path())
            .args(["--format", "json", "pick", "--seed", "3"]),
    );

    assert_eq!(json["mode"], "vault");
    assert_eq!(json["eligible_notes"], 2);
    assert_eq!(json["distance_score"], 100);
    assert_eq!(json["threshold_met"], true);
    assert_eq!(json["attempts"], 1);
    assert_eq!(json["breakdown"]["folder"], 30);
    assert_eq!(json["breakdown"]["tags"], 40);
    assert_eq!(json["breakdown"]["keywords"], 30);
    assert_ne!(json["note_a"]["path"], json["note_b"]["path"]);

    let keywords_a = json["note_a"]["keywords"].as_array().unwrap();
    assert!(!keywords_a.is_empty());
}

#[test]
fn test_pick_threshold_unreachable_uses_full_budget() {
    let dir = setup_vault();
    write_note(dir.path(), "Journal/a.md", &long_body("#daily #work"));
    write_note(dir.path(), "Journal/b.md", &long_body("#daily #work"));

    let json = stdout_json(
        notespark()
            .arg("--vault")
            .arg(dir.path())
            .args(["--format", "json", "pick", "--attempts", "4", "--min-distance", "100"]),
    );

    assert_eq!(json["attempts"], 4);
    assert_eq!(json["threshold_met"], false);
    assert_eq!(json["breakdown"]["folder"], 0);
    assert_eq!(json["breakdown"]["tags"], 0);
}

#[test]
fn test_pick_seed_is_reproducible() {
    let dir = setup_vault();
    for (path, tag) in [
        ("Work/a.md", "#alpha"),
        ("Work/b.md", "#beta"),
        ("Home/c.md", "#gamma"),
        ("Home/d.md", "#delta"),
        ("e.md", "#epsilon"),
    ] {
        write_note(dir.path(), path, &long_body(tag));
    }

    let run = || {
        notespark()
            .arg("--vault")
            .arg(dir.path())
            .args(["--format", "json", "pick", "--seed", "42"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_pick_skips_short_notes() {
    let dir = setup_vault();
    write_note(dir.path(), "Philosophy/identity.md", &long_body("#identity"));
    write_note(dir.path(), "Tech/ai.md", "too short #ai");

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .arg("pick")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "insufficient corpus: 1 eligible note(s), at least 2 required",
        ));
}

#[test]
fn test_pick_min_note_length_from_config() {
    let dir = setup_vault();
    write_config(
        dir.path(),
        "[selection]\nmin_note_length = 5\n\n[keyword_mapping]\n",
    );
    write_note(dir.path(), "a.md", "short #one");
    write_note(dir.path(), "b.md", "short #two");

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .arg("pick")
        .assert()
        .success();
}

#[test]
fn test_pick_empty_vault_json_error() {
    let dir = setup_vault();

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .args(["--format", "json", "pick"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"insufficient_corpus\""))
        .stderr(predicate::str::contains("\"current\":0"))
        .stderr(predicate::str::contains("\"required\":2"));
}

#[test]
fn test_pick_from_index_only() {
    let dir = setup_distant_vault();
    build_index(dir.path());

    let json = stdout_json(
        notespark()
            .arg("--vault")
            .arg(dir.path())
            .args(["--format", "json", "pick", "--from-index", "--seed", "9"]),
    );

    assert_eq!(json["mode"], "index");
    // Tags are unknown without note text
    assert_eq!(json["breakdown"]["tags"], 40);
    let summary = json["note_a"]["summary"].as_str().unwrap();
    assert!(summary.starts_with("Keyword-only note: "));
}

#[test]
fn test_pick_falls_back_to_index_when_vault_missing() {
    let dir = setup_distant_vault();
    build_index(dir.path());

    let vault = dir.path().join("gone");
    let index = dir.path().join(".notespark/keywords.json");
    let config = dir.path().join("index-only.toml");
    fs::write(
        &config,
        format!(
            "index_path = {:?}\n\n[keyword_mapping]\n",
            index.display().to_string()
        ),
    )
    .unwrap();

    let json = stdout_json(
        notespark()
            .arg("--vault")
            .arg(&vault)
            .arg("--config")
            .arg(&config)
            .args(["--format", "json", "pick"]),
    );

    assert_eq!(json["mode"], "index");
    assert_eq!(json["distance_score"], 100);
}

#[test]
fn test_pick_rejects_zero_attempts() {
    let dir = setup_distant_vault();

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .args(["pick", "--attempts", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_pick_invalid_config_exit_code_2() {
    let dir = setup_distant_vault();
    write_config(
        dir.path(),
        "[selection]\nmax_attempts = 0\n\n[keyword_mapping]\n",
    );

    notespark()
        .arg("--vault")
        .arg(dir.path())
        .arg("pick")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("selection.max_attempts"));
}
