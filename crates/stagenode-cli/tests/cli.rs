use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("stagenode"))
}

#[test]
fn help_describes_the_node() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Art-Net").and(contains("--universe")));
}

#[test]
fn check_prints_resolved_config_json() {
    let assert = cmd()
        .arg("--check")
        .arg("--universe")
        .arg("3")
        .arg("--mode")
        .arg("strip:8")
        .arg("--mac")
        .arg("EC:DA:3B:AA:C1:60")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["universe"], 3);
    assert_eq!(value["mode"], "strip:8");
    assert_eq!(value["mac"], "EC:DA:3B:AA:C1:60");
    assert_eq!(value["artnet_port"], 6454);
}

#[test]
fn flags_override_config_file() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("node.json");
    std::fs::write(&path, r#"{"universe": 1, "mode": "lamp"}"#).expect("write config");

    let assert = cmd()
        .arg("--config")
        .arg(&path)
        .arg("--universe")
        .arg("2")
        .arg("--check")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["universe"], 2);
    assert_eq!(value["mode"], "lamp");
}

#[test]
fn missing_config_file_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.json");

    cmd()
        .arg("--config")
        .arg(missing)
        .arg("--check")
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn invalid_config_json_shows_error() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("node.json");
    std::fs::write(&path, "{not json").expect("write config");

    cmd()
        .arg("--config")
        .arg(path)
        .arg("--check")
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("invalid config file")));
}

#[test]
fn invalid_mode_shows_error_and_hint() {
    cmd()
        .arg("--mode")
        .arg("bananas")
        .arg("--check")
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn invalid_mac_shows_error_and_hint() {
    cmd()
        .arg("--mac")
        .arg("EC-DA-3B-AA-C1-60")
        .arg("--check")
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("XX:XX:XX:XX:XX:XX")));
}

#[test]
fn oversized_strip_count_is_rejected() {
    cmd()
        .arg("--mode")
        .arg("strip:200")
        .arg("--check")
        .assert()
        .failure()
        .stderr(contains("error:"));
}
