//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn voicelaunch_bin() -> Command {
    Command::cargo_bin("voicelaunch").expect("binary should build")
}

/// Environment that hides any real config file and desktop entries
fn isolated(cmd: &mut Command) -> &mut Command {
    cmd.env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .env("XDG_DATA_DIRS", "/nonexistent")
}

#[test]
fn help_output() {
    voicelaunch_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("launcher")
                .and(predicate::str::contains("--locale"))
                .and(predicate::str::contains("--pitch"))
                .and(predicate::str::contains("--rate"))
                .and(predicate::str::contains("--no-speech"))
                .and(predicate::str::contains("--cue"))
                .and(predicate::str::contains("--no-cue"))
                .and(predicate::str::contains("--notify"))
                .and(predicate::str::contains("--no-notify"))
                .and(predicate::str::contains("dispatch"))
                .and(predicate::str::contains("config")),
        );
}

#[test]
fn version_output() {
    voicelaunch_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("voicelaunch")
                .and(predicate::str::contains(env!("CARGO_PKG_VERSION"))),
        );
}

#[test]
fn config_path_command() {
    voicelaunch_bin()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("voicelaunch").and(predicate::str::contains("config.toml")),
        );
}

#[test]
fn config_help() {
    voicelaunch_bin()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("set"))
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("list"))
                .and(predicate::str::contains("path")),
        );
}

#[test]
fn dispatch_unrecognized_command() {
    isolated(&mut voicelaunch_bin())
        .args(["--no-speech", "dispatch", "bugün hava nasıl"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Komutu anlamadım"));
}

#[test]
fn dispatch_not_installed_app() {
    // With no desktop entries visible, a matched command reports the
    // app as not installed rather than failing.
    isolated(&mut voicelaunch_bin())
        .args(["--no-speech", "dispatch", "YouTube'u aç"])
        .assert()
        .success()
        .stderr(predicate::str::contains("YouTube yüklü değil"));
}

#[test]
fn dispatch_with_option_flags() {
    // The one-shot runner resolves top-level options alongside the
    // dispatch text.
    isolated(&mut voicelaunch_bin())
        .args([
            "--no-speech",
            "--locale",
            "en-US",
            "--engine-init-delay-ms",
            "0",
            "dispatch",
            "merhaba",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Komutu anlamadım"));
}

#[test]
fn dispatch_requires_text() {
    voicelaunch_bin().arg("dispatch").assert().failure();
}
