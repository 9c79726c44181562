//! Integration tests for top-level CLI behaviour and the config command

use predicates::prelude::*;

use crate::helpers::{run_ok, TestEnv};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("chapters"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn play_help_shows_options() {
    let env = TestEnv::new();
    env.cmd()
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--duration <TIME>"))
        .stdout(predicate::str::contains("--paused"))
        .stdout(predicate::str::contains("--speed"));
}

#[test]
fn version_flag_prints_version() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let env = TestEnv::new();
    env.cmd().assert().code(2);
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn bash_completions_mention_binary() {
    let env = TestEnv::new();
    let stdout = run_ok(&env, &["completions", "bash"]);
    assert!(stdout.contains("chapterbar"));
    assert!(stdout.contains("chapters"));
}

// ============================================================================
// Config Command
// ============================================================================

#[test]
fn config_path_honours_env_override() {
    let env = TestEnv::new();
    let stdout = run_ok(&env, &["config", "path"]);
    assert_eq!(stdout.trim(), env.config_path().display().to_string());
}

#[test]
fn config_show_prints_defaults() {
    let env = TestEnv::new();
    let stdout = run_ok(&env, &["config", "show"]);

    assert!(stdout.contains("[player]"));
    assert!(stdout.contains("seek_step_secs = 10.0"));
    assert!(stdout.contains("double_tap_ms = 300"));
    assert!(stdout.contains("[timeline]"));
    assert!(stdout.contains("safe_edge_percent = 0.6"));
    assert!(stdout.contains("theme = \"default\""));
}

#[test]
fn config_show_reflects_file_values() {
    let env = TestEnv::new();
    env.write(
        "config.toml",
        &format!(
            "[player]\nseek_step_secs = 5.0\n\n[log]\nfile = {:?}\n",
            env.log_path()
        ),
    );
    let stdout = run_ok(&env, &["config", "show"]);

    assert!(stdout.contains("seek_step_secs = 5.0"));
    // Fields missing from the file keep their defaults
    assert!(stdout.contains("double_tap_ms = 300"));
}

#[test]
fn invalid_config_file_is_reported() {
    let env = TestEnv::new();
    env.write("config.toml", "[player\nseek_step_secs = ");
    env.cmd()
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn commands_log_to_configured_file() {
    let env = TestEnv::new();
    run_ok(&env, &["chapters"]);

    let log = std::fs::read_to_string(env.log_path()).expect("log file should exist");
    assert!(log.contains("logging initialized"));
}
