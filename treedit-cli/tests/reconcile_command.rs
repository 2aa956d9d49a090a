//! Tests for `treedit reconcile`, the full edit flow.

mod common;

use common::{child, TestEnv, PROJECT_TEXT};
use predicates::prelude::*;

/// `docs/` retyped as `src/`, so two `src` folders merge.
const MERGE_TEXT: &str = "project/
├── src/
│   ├── main.rs
│   └── lib.rs
├── src/
│   └── guide.md
└── README.md
";

/// `lib.rs` retyped as `main.rs`.
const DUPLICATE_TEXT: &str = "project/
├── src/
│   ├── main.rs
│   └── main.rs
├── docs/
│   └── guide.md
└── README.md
";

#[test]
fn test_reconcile_unchanged_text() {
    let env = TestEnv::new();
    let snapshot = env.snapshot();
    let text = env.text(PROJECT_TEXT);

    let hand_off = env.json_output(&[
        "reconcile",
        snapshot.to_str().unwrap(),
        text.to_str().unwrap(),
    ]);

    assert_eq!(hand_off["original"], hand_off["modified"]);
    assert_eq!(hand_off["original"]["name"], "project");
}

#[test]
fn test_reconcile_rename_hand_off() {
    let env = TestEnv::new();
    let snapshot = env.snapshot();
    let text = env.text(&PROJECT_TEXT.replace("guide.md", "manual.md"));

    let hand_off = env.json_output(&[
        "reconcile",
        snapshot.to_str().unwrap(),
        text.to_str().unwrap(),
    ]);

    let original = child(child(&hand_off["original"], "docs"), "guide.md");
    assert!(original.get("old_path").is_none());

    let renamed = child(child(&hand_off["modified"], "docs"), "manual.md");
    assert_eq!(renamed["id"], "guide");
    assert_eq!(renamed["old_path"], "project/docs/guide.md");
    assert_eq!(renamed["new_path"], "project/docs/manual.md");
}

#[test]
fn test_reconcile_refuses_duplicate_files() {
    let env = TestEnv::new();
    let snapshot = env.snapshot();
    let text = env.text(DUPLICATE_TEXT);

    env.command()
        .arg("reconcile")
        .arg(&snapshot)
        .arg(&text)
        .arg("--yes")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Cannot apply changes: Duplicate files detected.",
        ))
        .stderr(predicate::str::contains(
            "Directory \"project/src\" has 2 duplicate files with name: main.rs",
        ));
}

#[test]
fn test_reconcile_conflict_report_as_json() {
    let env = TestEnv::new();
    let snapshot = env.snapshot();
    let text = env.text(DUPLICATE_TEXT);

    let output = env
        .command()
        .arg("reconcile")
        .arg(&snapshot)
        .arg(&text)
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let start = stderr.find('{').expect("JSON report on stderr");
    let end = stderr.rfind('}').expect("JSON report on stderr") + 1;
    let report: serde_json::Value = serde_json::from_str(&stderr[start..end]).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["file_errors"][0]["kind"], "same_directory");
}

#[test]
fn test_reconcile_merge_needs_confirmation() {
    let env = TestEnv::new();
    let snapshot = env.snapshot();
    let text = env.text(MERGE_TEXT);

    env.command()
        .arg("reconcile")
        .arg(&snapshot)
        .arg(&text)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "The following folders will be merged:",
        ))
        .stderr(predicate::str::contains(
            "Directory \"project\" has folders that will be merged: src, src",
        ))
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn test_reconcile_merge_with_yes() {
    let env = TestEnv::new();
    let snapshot = env.snapshot();
    let text = env.text(MERGE_TEXT);

    let hand_off = env.json_output(&[
        "reconcile",
        snapshot.to_str().unwrap(),
        text.to_str().unwrap(),
        "--yes",
    ]);

    let renamed = &hand_off["modified"]["children"][1];
    assert_eq!(renamed["id"], "docs");
    assert_eq!(renamed["name"], "src");
    assert_eq!(renamed["old_path"], "project/docs");
    assert_eq!(renamed["new_path"], "project/src");
}

#[test]
fn test_reconcile_merge_confirmed_by_project_config() {
    let env = TestEnv::new();
    let snapshot = env.snapshot();
    let text = env.text(MERGE_TEXT);
    env.write("treedit.yaml", "confirm_merges: true\n");

    env.command()
        .arg("reconcile")
        .arg(&snapshot)
        .arg(&text)
        .assert()
        .success();
}

#[test]
fn test_reconcile_merge_confirmed_by_environment() {
    let env = TestEnv::new();
    let snapshot = env.snapshot();
    let text = env.text(MERGE_TEXT);

    env.command()
        .env("TREEDIT_CONFIRM_MERGES", "true")
        .arg("reconcile")
        .arg(&snapshot)
        .arg(&text)
        .assert()
        .success();
}

#[test]
fn test_reconcile_restores_root_line() {
    let env = TestEnv::new();
    let snapshot = env.snapshot();
    let text = env.text(&PROJECT_TEXT.replacen("project/", "renamed/", 1));

    let output = env
        .command()
        .arg("reconcile")
        .arg(&snapshot)
        .arg(&text)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning: Root name cannot be changed"));

    let hand_off: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(hand_off["modified"]["name"], "project");
    assert_eq!(hand_off["modified"]["id"], "root");
}

#[test]
fn test_reconcile_quiet_hides_root_warning() {
    let env = TestEnv::new();
    let snapshot = env.snapshot();
    let text = env.text(&PROJECT_TEXT.replacen("project/", "renamed/", 1));

    env.command()
        .arg("--quiet")
        .arg("reconcile")
        .arg(&snapshot)
        .arg(&text)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_reconcile_strict_identity_refuses_guess() {
    let env = TestEnv::new();
    let snapshot = env.snapshot();
    let text = env.text(&PROJECT_TEXT.replace("README.md", "README.txt"));

    env.command()
        .env("TREEDIT_STRICT_IDENTITY", "true")
        .arg("reconcile")
        .arg(&snapshot)
        .arg(&text)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Identities that were guessed:"))
        .stderr(predicate::str::contains("project/README.txt (readme)"))
        .stderr(predicate::str::contains("Refusing to reconcile"));
}

#[test]
fn test_reconcile_guess_allowed_without_strict_identity() {
    let env = TestEnv::new();
    let snapshot = env.snapshot();
    let text = env.text(&PROJECT_TEXT.replace("README.md", "README.txt"));

    let hand_off = env.json_output(&[
        "reconcile",
        snapshot.to_str().unwrap(),
        text.to_str().unwrap(),
    ]);

    let readme = child(&hand_off["modified"], "README.txt");
    assert_eq!(readme["id"], "readme");
    assert_eq!(readme["new_path"], "project/README.txt");
}

#[test]
fn test_reconcile_empty_text() {
    let env = TestEnv::new();
    let snapshot = env.snapshot();
    let text = env.text("");

    env.command()
        .arg("reconcile")
        .arg(&snapshot)
        .arg(&text)
        .assert()
        .failure()
        .code(1);
}
