//! End-to-end tests of the `notifier` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn notifier() -> Command {
    let mut cmd = Command::cargo_bin("notifier").unwrap();
    // RUST_LOG would override the configured log level.
    cmd.env_remove("RUST_LOG");
    cmd
}

fn empty_config() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "").unwrap();
    file
}

#[test]
fn test_sms_to_stdout_plain_text() {
    let config = empty_config();
    notifier()
        .args(["--config"])
        .arg(config.path())
        .args(["--channel", "sms", "--sink", "stdout", "--format", "plain-text"])
        .args(["+15551234567", "Alert", "Disk at 90%"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[sms] To: +15551234567"))
        .stdout(predicate::str::contains("Message: Alert - Disk at 90%"));
}

#[test]
fn test_slack_to_stdout_json() {
    let config = empty_config();
    let output = notifier()
        .args(["--config"])
        .arg(config.path())
        .args(["--channel", "slack", "--sink", "stdout", "--format", "json"])
        .args(["#ops", "Alert", "Disk at 90%"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let entry: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(entry["channel"], "slack");
    assert_eq!(entry["recipient"], "#ops");
    assert_eq!(entry["subject"], "Alert");
    assert_eq!(entry["message"], "Disk at 90%");
}

#[test]
fn test_empty_recipient_fails() {
    let config = empty_config();
    notifier()
        .args(["--config"])
        .arg(config.path())
        .args(["--sink", "stdout", "", "Alert", "Disk at 90%"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_legacy_email_path_logs_to_stderr() {
    let config = empty_config();
    notifier()
        .args(["--config"])
        .arg(config.path())
        .args(["--legacy-email", "ops@example.com", "Alert", "Disk at 90%"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Sending email notification..."));
}

#[test]
fn test_missing_arguments_is_usage_error() {
    notifier().args(["#ops"]).assert().failure();
}

#[test]
fn test_message_with_leading_hyphen() {
    let config = empty_config();
    notifier()
        .args(["--config"])
        .arg(config.path())
        .args(["--channel", "slack", "--sink", "stdout", "--format", "plain-text"])
        .args(["#ops", "Temp", "-5 degrees"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[slack] Channel: #ops"))
        .stdout(predicate::str::contains("-5 degrees"));
}

#[test]
fn test_log_sink_survives_quiet_log_level() {
    let config = empty_config();
    notifier()
        .args(["--config"])
        .arg(config.path())
        .args(["--log-level", "warn", "--channel", "sms"])
        .args(["+15551234567", "Alert", "Disk at 90%"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Sending sms notification..."))
        .stderr(predicate::str::contains("Configuration").not());
}

#[test]
fn test_log_sink_survives_rust_log_off() {
    let config = empty_config();
    notifier()
        .env("RUST_LOG", "off")
        .args(["--config"])
        .arg(config.path())
        .args(["--channel", "sms", "+15551234567", "Alert", "Disk at 90%"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Sending sms notification..."));
}

#[test]
fn test_slack_log_entry_keeps_line_breaks() {
    let config = empty_config();
    let output = notifier()
        .args(["--config"])
        .arg(config.path())
        .args(["--channel", "slack", "#ops", "Alert", "Disk at 90%"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.lines().any(|line| line == "Message: Alert"));
    assert!(stderr.lines().any(|line| line == "Disk at 90%"));
}

#[test]
fn test_failure_is_reported_once() {
    let config = empty_config();
    notifier()
        .args(["--config"])
        .arg(config.path())
        .args(["", "Alert", "Disk at 90%"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Notification failed"))
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn test_legacy_email_banner_omits_channel_settings() {
    let config = empty_config();
    notifier()
        .args(["--config"])
        .arg(config.path())
        .args(["--legacy-email", "ops@example.com", "Alert", "Disk at 90%"])
        .assert()
        .success()
        .stderr(predicate::str::contains("do not apply to the legacy email path"))
        .stderr(predicate::str::contains("Channel:").not());
}
