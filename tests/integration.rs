// Integration tests for the repscore CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and side effects.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to build a Command for the repscore binary.
fn repscore() -> Command {
    Command::cargo_bin("repscore").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    repscore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("repscore"));
}

#[test]
fn cli_help_flag() {
    repscore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reputation scoring"));
}

#[test]
fn score_requires_input() {
    repscore()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn inspect_requires_input() {
    repscore()
        .arg("inspect")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_rejects_missing_input_path() {
    let dir = TempDir::new().expect("temp dir should be created");
    repscore()
        .current_dir(dir.path())
        .args(["score", "absent.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn score_rejects_missing_config_path() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("batch.json"), "[]").expect("batch should write");

    repscore()
        .current_dir(dir.path())
        .args(["score", "batch.json", "--config", "absent.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn score_rejects_quiet_with_verbose() {
    repscore()
        .args(["score", "batch.json", "--quiet", "-v"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn inspect_summarizes_statuses_and_roles() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("batch.json"),
        r#"[
            {"status":"Valid","identityKey":"G1","role":"citizen","subRole":"POKT DAO","weight":17},
            {"status":"Expired","identityKey":"G1","role":"builder","subRole":"Bounty Hunter","weight":3},
            {"status":"Valid","identityKey":"G2","role":"staker","subRole":"Validator","weight":4}
        ]"#,
    )
    .expect("batch should write");

    repscore()
        .current_dir(dir.path())
        .args(["inspect", "batch.json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("batch: 3 record(s), 0 malformed skipped"))
        .stdout(predicate::str::contains(
            "status: valid=2 expired=1 revoked=0 suspended=0 unknown=0",
        ))
        .stdout(predicate::str::contains(
            "roles: citizen=1 builder=1 staker=1 unrecognized=0",
        ));
}

#[test]
fn inspect_warns_on_unrecognized_roles() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("batch.json"),
        r#"[{"status":"Valid","identityKey":"G1","role":"oracle","subRole":"Feeds","weight":1}]"#,
    )
    .expect("batch should write");

    repscore()
        .current_dir(dir.path())
        .args(["inspect", "batch.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("unrecognized=1"));
}

#[test]
fn score_exits_with_invalid_input_on_unknown_role() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("batch.json"),
        r#"[{"status":"Valid","identityKey":"G1","role":"unknown-x","subRole":"Feeds","weight":1}]"#,
    )
    .expect("batch should write");

    repscore()
        .current_dir(dir.path())
        .args(["score", "batch.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown role (unknown-x) exists"));
}

#[test]
fn score_exits_with_warnings_on_liquidity_provider_skip() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("batch.json"),
        r#"[{"status":"Valid","identityKey":"G1","role":"staker","subRole":"Liquidity Provider","weight":5}]"#,
    )
    .expect("batch should write");

    repscore()
        .current_dir(dir.path())
        .args(["score", "batch.json"])
        .assert()
        .code(1);
}

#[test]
fn score_succeeds_quietly_on_a_clean_batch() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("batch.json"),
        r#"[{"status":"Valid","identityKey":"G1","role":"staker","subRole":"Gateway","weight":5}]"#,
    )
    .expect("batch should write");

    repscore()
        .current_dir(dir.path())
        .args(["score", "batch.json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"gateway\""));
}

#[test]
fn score_rejects_invalid_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("batch.json"), "[]").expect("batch should write");
    fs::write(
        dir.path().join("repscore.toml"),
        r#"
[store]
base_url = "https://no-trailing-slash.example.net"
"#,
    )
    .expect("config should write");

    repscore()
        .current_dir(dir.path())
        .args(["score", "batch.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("end with '/'"));
}

#[test]
fn score_renders_markdown_when_requested() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("batch.json"),
        r#"[{"status":"Valid","identityKey":"G1","role":"citizen","subRole":"POKT DAO","weight":17}]"#,
    )
    .expect("batch should write");

    repscore()
        .current_dir(dir.path())
        .args(["score", "batch.json", "--format", "md"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Reputation Score Report"))
        .stdout(predicate::str::contains("### G1"));
}
