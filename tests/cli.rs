//! These only exercise paths that never reach the network.

use std::time::Duration;

use assert_cmd::Command;

fn desserts() -> Command {
    let mut cmd = Command::cargo_bin("desserts").unwrap();
    cmd
        // Prevent loading the config
        .args(&["--config", "/does/not/exist"])
        // Point to an api that cannot be parsed
        .args(&["--api", "not a url"])
        .args(&["--color", "never"])
        .timeout(Duration::from_secs(10));
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
pub fn cmd_desserts_help() {
    Command::cargo_bin("desserts")
        .unwrap()
        .arg("--help")
        .assert()
        .success();
}

#[test]
pub fn cmd_desserts_list_fails_gracefully() {
    let stdout = stdout_of(desserts().arg("list"));
    assert!(stdout.contains("Dessert Meals"));
    assert!(stdout.contains("Failed to fetch meals: malformed url"));
}

#[test]
pub fn cmd_desserts_list_json_reports_error() {
    let stdout = stdout_of(desserts().arg("--json").arg("list"));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let error = value["error"].as_str().unwrap();
    assert!(error.starts_with("Failed to fetch meals: "));
}

#[test]
pub fn cmd_desserts_show_fails_gracefully() {
    let stdout = stdout_of(desserts().args(&["show", "52768"]));
    assert!(stdout.contains("Meal Details"));
    assert!(stdout.contains("Failed to fetch meal details: malformed url"));
}

#[test]
pub fn cmd_desserts_browse_quits_on_q() {
    let stdout = stdout_of(desserts().arg("browse").write_stdin("q\n"));
    assert!(stdout.contains("Failed to fetch meals"));
}

#[test]
pub fn cmd_desserts_browse_quits_on_eof() {
    let stdout = stdout_of(desserts().arg("browse").write_stdin(""));
    assert!(stdout.contains("Failed to fetch meals"));
    assert!(stdout.ends_with("[q]uit: "));
}

#[test]
pub fn cmd_desserts_browse_rejects_json() {
    let assert = desserts()
        .args(&["--json", "browse"])
        .write_stdin("q\n")
        .assert()
        .failure();
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("JsonNotInteractive"));
}
