use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use std::process::Command;

/// Helper to create a Command for the `pulse` binary pointed at a dead
/// address, so no test ever reaches a real server.
fn pulse_cmd() -> Command {
  let mut cmd = Command::cargo_bin("pulse").expect("binary exists");
  cmd.env("PULSE_API_URL", "http://127.0.0.1:9/api");
  cmd.env("PULSE_TIMEOUT_SECS", "2");
  cmd
}

#[test]
fn help_lists_dashboard_commands() {
  pulse_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(contains("news").and(contains("insights")).and(contains("analyze")));
}

#[test]
fn analyze_rejects_unsupported_file_kind_locally() {
  let temp = tempfile::TempDir::new().unwrap();
  let file = temp.path().join("notes.txt");
  std::fs::write(&file, "plain text").unwrap();

  // The API address is unreachable: a validation failure must be
  // produced before any network activity for this to pass.
  pulse_cmd().arg("analyze").arg(&file).assert().failure().stderr(contains("PDF or image"));
}

#[test]
fn analyze_reports_unreadable_files() {
  let temp = tempfile::TempDir::new().unwrap();
  let missing = temp.path().join("missing.pdf");

  pulse_cmd().arg("analyze").arg(&missing).assert().failure().stderr(contains("could not read"));
}

#[test]
fn news_load_failure_renders_the_error_only() {
  pulse_cmd().arg("news").assert().failure().stderr(contains("Failed to load news"));
}

#[test]
fn insights_load_failure_renders_the_error_only() {
  pulse_cmd()
    .arg("insights")
    .assert()
    .failure()
    .stderr(contains("Failed to load industry insights"));
}
