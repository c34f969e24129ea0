//! Command-line tests run against the built `litreading` binary.

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn litreading() -> Command {
    Command::cargo_bin("litreading").unwrap()
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

const READINGS_JSONL: &str = r#"{"id": "r1", "prompt": "The cat sat on the mat.", "asr_transcript": "the cat sat on the mat", "scored_duration": 60, "human_wcpm": 6}
{"id": "r2", "prompt": "a b c d e f g h", "asr_transcript": "a b x d e f g h", "scored_duration": "60", "human_wcpm": 8}
"#;

#[test]
fn test_features_text_output() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "readings.jsonl", READINGS_JSONL);

    litreading()
        .arg("features")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading r1"))
        .stdout(predicate::str::contains("Reading r2"))
        .stdout(predicate::str::contains("Replaced: c → x"));
}

#[test]
fn test_features_json_output() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "readings.jsonl", READINGS_JSONL);

    let output = litreading()
        .args(["--format", "json", "features"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "r1");
    assert_eq!(rows[0]["correct_words_pm"], 6.0);
    assert_eq!(rows[1]["replaced_words_pm"], 1.0);
    assert_eq!(rows[1]["error_pairs"][0]["reference"], "c");
}

#[test]
fn test_features_tsv_input_and_output() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "readings.tsv",
        "id\tprompt\tasr_transcript\tscored_duration\n\
         r1\tone two three four\tone two three four\t30\n",
    );

    litreading()
        .args(["features", "--format", "tsv"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id\tcorrect_words_pm\t"))
        .stdout(predicate::str::contains("r1\t8.00\t0.00"));
}

#[test]
fn test_features_drop_non_finite() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "readings.jsonl",
        r#"{"id": "ok", "prompt": "a b c", "asr_transcript": "a b c", "scored_duration": 60}
{"id": "zero", "prompt": "a b c", "asr_transcript": "a b c", "scored_duration": 0}
"#,
    );

    litreading()
        .args(["features", "--format", "tsv"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("zero\tinf"));

    litreading()
        .args(["features", "--format", "tsv", "--drop-non-finite"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok\t3.00"))
        .stdout(predicate::str::contains("zero").not());
}

#[test]
fn test_features_rejects_non_text_transcript() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "readings.jsonl",
        r#"{"prompt": "a b c", "asr_transcript": 42, "scored_duration": 60}"#,
    );

    litreading()
        .arg("features")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be text"));
}

#[test]
fn test_features_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "readings.xlsx", "");

    litreading()
        .arg("features")
        .arg(&input)
        .assert()
        .failure();
}

#[test]
fn test_compare_text_output() {
    litreading()
        .args([
            "compare",
            "The cat sat on the mat.",
            "the cat sat on a mat",
            "--duration",
            "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "5 correct, 0 added, 0 removed, 1 replaced",
        ))
        .stdout(predicate::str::contains("the → a"));
}

#[test]
fn test_compare_shows_trimmed_tail() {
    litreading()
        .args(["--format", "json", "compare", "one two three", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"edit_script\": []"))
        .stdout(predicate::str::contains("\"removed\": 0"));
}

#[test]
fn test_compare_asr_segments() {
    litreading()
        .args([
            "--format",
            "tsv",
            "compare",
            "--asr-segments",
            "one two three four",
            r#"[{"text": "one two"}, {"text": "three four"}]"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("count\tcorrect\t4"));
}

#[test]
fn test_grade_json_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "readings.jsonl", READINGS_JSONL);

    let output = litreading()
        .args(["grade", "--format", "json"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["grader"], "baseline");
    assert_eq!(result["predictions"].as_array().unwrap().len(), 2);
    assert_eq!(result["predictions"][1]["wcpm"], 7.0);
    assert_eq!(result["summary"]["labeled"], 2);
}

#[test]
fn test_features_csv_with_quoted_prompt() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "readings.csv",
        "id,prompt,asr_transcript,scored_duration\n\
         r1,\"Well, the cat sat, then slept.\",well the cat sat then slept,60\n",
    );

    litreading()
        .args(["features", "--format", "tsv"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("r1\t6.00\t0.00"));
}

#[test]
fn test_features_human_hypothesis() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "readings.jsonl",
        r#"{"id": "r1", "prompt": "a b c d e f", "asr_transcript": "a b c d e f", "human_transcript": "a b x d e f", "scored_duration": 60}
"#,
    );

    litreading()
        .args(["features", "--format", "tsv"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("r1\t6.00\t0.00\t0.00\t0.00"));

    litreading()
        .args(["features", "--format", "tsv", "--hypothesis", "human"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("r1\t5.00\t0.00\t0.00\t1.00"));
}

#[test]
fn test_human_hypothesis_needs_column() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "readings.jsonl", READINGS_JSONL);

    litreading()
        .args(["grade", "--hypothesis", "human"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no human transcript"));
}
