use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn thaiid(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("thaiid").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn process_json_fragments() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("card.json");
    fs::write(
        &input,
        r#"["เลขประจำตัวประชาชน", "1 2345 67890 12 3", "นาย สมชาย ใจดี", "Name Mr. Somchai"]"#,
    )
    .unwrap();

    thaiid(&dir)
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""citizen_id":"1234567890123""#))
        .stdout(predicate::str::contains(r#""name_en":"Somchai""#))
        .stdout(predicate::str::contains(r#""province":null"#));
}

#[test]
fn process_empty_input_gives_all_nulls() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.json");
    fs::write(&input, "[]").unwrap();

    let output = thaiid(&dir).arg("process").arg(&input).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["full_text"], "");
    let fields = json["fields"].as_object().unwrap();
    assert_eq!(fields.len(), 15);
    assert!(fields.values().all(|v| v.is_null()));
}

#[test]
fn process_rejects_null_fragment() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.json");
    fs::write(&input, r#"["a", null]"#).unwrap();

    thaiid(&dir)
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("fragment 1 is null"));
}

#[test]
fn process_lines_from_stdin_as_text() {
    let dir = TempDir::new().unwrap();

    thaiid(&dir)
        .args(["process", "-", "--format", "text"])
        .write_stdin("1 2345 67890 12 3\nศาสนา พุทธ\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Citizen ID: 1234567890123"))
        .stdout(predicate::str::contains("Religion: พุทธ"));
}

#[test]
fn process_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    thaiid(&dir)
        .args(["process", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    let inputs = dir.path().join("in");
    let outputs = dir.path().join("out");
    fs::create_dir_all(&inputs).unwrap();
    fs::write(inputs.join("a.json"), r#"["1 2345 67890 12 3"]"#).unwrap();
    fs::write(inputs.join("b.txt"), "นาย สมชาย ใจดี\n").unwrap();
    fs::write(inputs.join("c.json"), r#"[null]"#).unwrap();

    let pattern = format!("{}/*", inputs.display());
    thaiid(&dir)
        .args(["batch", &pattern, "--summary", "--continue-on-error", "-o"])
        .arg(&outputs)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful, 1 failed"));

    let a = fs::read_to_string(outputs.join("a.json")).unwrap();
    assert!(a.contains("1234567890123"));
    assert!(outputs.join("b.json").exists());
    assert!(!outputs.join("c.json").exists());

    let summary = fs::read_to_string(outputs.join("summary.csv")).unwrap();
    assert!(summary.starts_with("filename,status,citizen_id"));
    assert!(summary.contains("a.json,success,1234567890123"));
    assert!(summary.contains("c.json,error"));
}

#[test]
fn batch_stops_on_first_error_by_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.json"), r#"{"fragments": 3}"#).unwrap();

    let pattern = format!("{}/*.json", dir.path().display());
    thaiid(&dir)
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing failed"));
}

#[test]
fn config_get_reads_defaults() {
    let dir = TempDir::new().unwrap();

    thaiid(&dir)
        .args(["config", "get", "extraction.use_fallbacks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));
}

#[test]
fn config_commands_use_global_config_path() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.json");
    fs::write(&config, r#"{"input": {"min_confidence": 0.5}}"#).unwrap();

    thaiid(&dir)
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "input.min_confidence"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.5"));

    thaiid(&dir)
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "extraction.use_fallbacks", "true"])
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config).unwrap()).unwrap();
    assert_eq!(saved["extraction"]["use_fallbacks"], true);
    assert_eq!(saved["input"]["min_confidence"], 0.5);

    thaiid(&dir)
        .args(["config", "get", "extraction.use_fallbacks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));
}

#[test]
fn config_file_enables_fallbacks() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("thaiid.json");
    fs::write(&config, r#"{"extraction": {"use_fallbacks": true}}"#).unwrap();
    let input = dir.path().join("card.txt");
    fs::write(&input, "เกิดวันที่ 12 ม.ค. 2530\n").unwrap();

    thaiid(&dir)
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""dob":null"#));

    thaiid(&dir)
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""dob":"12 ม.ค. 2530""#));
}
