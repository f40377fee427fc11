//! Integration tests for gangway-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const SECRET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789ABCDEFGHIJKLMNOPQRSTUVWX";

fn gangway_cmd() -> Command {
    cargo_bin_cmd!("gangway")
}

/// Writes a config fixture and returns its path inside `dir`.
fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, body).expect("failed to write config fixture");
    path
}

fn default_config(dir: &Path) -> PathBuf {
    write_config(
        dir,
        &format!(r#"{{"secret": "{SECRET}", "spool_dir": "{}"}}"#, spool(dir)),
    )
}

fn spool(dir: &Path) -> String {
    dir.join("spool").display().to_string()
}

/// Builds a zip fixture with one member and returns its path.
fn write_zip(dir: &Path, member: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join("bundle.zip");
    let file = std::fs::File::create(&path).expect("failed to create zip fixture");
    let mut writer = ZipWriter::new(file);
    writer
        .start_file(member, SimpleFileOptions::default())
        .expect("failed to start zip member");
    writer.write_all(contents).expect("failed to write member");
    writer.finish().expect("failed to finish zip");
    path
}

#[test]
fn test_version_flag() {
    gangway_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gangway"));
}

#[test]
fn test_help_flag() {
    gangway_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy"));
}

#[test]
fn test_secret_outputs_credential() {
    let output = gangway_cmd().arg("secret").output().expect("run");
    assert!(output.status.success());
    let secret = String::from_utf8(output.stdout).expect("utf-8");
    let secret = secret.trim_end();
    assert_eq!(secret.len(), 60);
    assert!(
        secret
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    );
}

#[test]
fn test_check_allowed_command() {
    let temp = TempDir::new().expect("temp dir");
    let config = write_config(
        temp.path(),
        &format!(r#"{{"secret": "{SECRET}", "command_allowlist": ["ls .*"]}}"#),
    );

    gangway_cmd()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg("ls -la")
        .assert()
        .success()
        .stdout(predicate::str::contains("allowed: ls -la"));
}

#[test]
fn test_check_denied_command() {
    let temp = TempDir::new().expect("temp dir");
    let config = write_config(
        temp.path(),
        &format!(r#"{{"secret": "{SECRET}", "command_allowlist": ["ls .*"]}}"#),
    );

    gangway_cmd()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg("rm -rf /")
        .assert()
        .failure()
        .stdout(predicate::str::contains("denied: rm -rf /"));
}

#[test]
fn test_check_rejects_substring_match() {
    let temp = TempDir::new().expect("temp dir");
    let config = write_config(
        temp.path(),
        &format!(r#"{{"secret": "{SECRET}", "command_allowlist": ["ls"]}}"#),
    );

    gangway_cmd()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg("ls; rm -rf /")
        .assert()
        .failure();
}

#[test]
fn test_deploy_extracts_archive() {
    let temp = TempDir::new().expect("temp dir");
    let config = default_config(temp.path());
    let archive = write_zip(temp.path(), "site/index.html", b"<h1>hello</h1>");
    let dest = temp.path().join("deployed");

    gangway_cmd()
        .arg("--config")
        .arg(&config)
        .arg("deploy")
        .arg("--dest")
        .arg(&dest)
        .arg("--credential")
        .arg(SECRET)
        .arg("--file")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("received"));

    let deployed = std::fs::read_to_string(dest.join("site/index.html")).expect("read deployed");
    assert_eq!(deployed, "<h1>hello</h1>");
}

#[test]
fn test_deploy_wrong_credential_rejected() {
    let temp = TempDir::new().expect("temp dir");
    let config = default_config(temp.path());
    let archive = write_zip(temp.path(), "site/index.html", b"x");
    let dest = temp.path().join("deployed");

    gangway_cmd()
        .arg("--config")
        .arg(&config)
        .arg("deploy")
        .arg("--dest")
        .arg(&dest)
        .arg("--credential")
        .arg("wrong")
        .arg("--file")
        .arg(&archive)
        .assert()
        .failure()
        .stdout(predicate::str::contains("unauthorized"));

    assert!(!dest.exists());
}

#[test]
fn test_deploy_traversal_archive_rejected() {
    let temp = TempDir::new().expect("temp dir");
    let config = default_config(temp.path());
    let archive = write_zip(temp.path(), "../evil.txt", b"pwned");
    let dest = temp.path().join("deployed");

    gangway_cmd()
        .arg("--config")
        .arg(&config)
        .arg("deploy")
        .arg("--dest")
        .arg(&dest)
        .arg("--credential")
        .arg(SECRET)
        .arg("--file")
        .arg(&archive)
        .assert()
        .failure()
        .stdout(predicate::str::contains("unsafe archive member"));

    assert!(!temp.path().join("evil.txt").exists());
}

#[test]
fn test_deploy_disallowed_origin_rejected() {
    let temp = TempDir::new().expect("temp dir");
    let config = write_config(
        temp.path(),
        &format!(r#"{{"secret": "{SECRET}", "allowed_origins": ["10.0.0.7"]}}"#),
    );
    let archive = write_zip(temp.path(), "a.txt", b"x");

    gangway_cmd()
        .arg("--config")
        .arg(&config)
        .arg("deploy")
        .arg("--dest")
        .arg(temp.path().join("deployed"))
        .arg("--credential")
        .arg(SECRET)
        .arg("--file")
        .arg(&archive)
        .arg("--origin")
        .arg("192.168.1.50")
        .assert()
        .failure()
        .stdout(predicate::str::contains("origin not allowed: 192.168.1.50"));
}

#[test]
fn test_deploy_json_output() {
    let temp = TempDir::new().expect("temp dir");
    let config = default_config(temp.path());
    let archive = write_zip(temp.path(), "a.txt", b"x");

    gangway_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--json")
        .arg("deploy")
        .arg("--dest")
        .arg(temp.path().join("deployed"))
        .arg("--credential")
        .arg(SECRET)
        .arg("--file")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"http_status\": 201"));
}

#[test]
fn test_deploy_non_archive_rejected() {
    let temp = TempDir::new().expect("temp dir");
    let config = default_config(temp.path());
    let payload = temp.path().join("notes.txt");
    std::fs::write(&payload, "plain text").expect("write payload");

    gangway_cmd()
        .arg("--config")
        .arg(&config)
        .arg("deploy")
        .arg("--dest")
        .arg(temp.path().join("deployed"))
        .arg("--credential")
        .arg(SECRET)
        .arg("--file")
        .arg(&payload)
        .assert()
        .failure()
        .stdout(predicate::str::contains("not an archive"));
}

#[test]
fn test_deploy_missing_config_fails() {
    let temp = TempDir::new().expect("temp dir");
    let archive = write_zip(temp.path(), "a.txt", b"x");

    gangway_cmd()
        .arg("--config")
        .arg(temp.path().join("absent.json"))
        .arg("deploy")
        .arg("--dest")
        .arg(temp.path().join("deployed"))
        .arg("--credential")
        .arg(SECRET)
        .arg("--file")
        .arg(&archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}
