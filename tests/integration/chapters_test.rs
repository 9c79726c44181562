//! Integration tests for the chapters command (CLI)

use predicates::prelude::*;

use crate::helpers::{arg, fixture, run_ok, TestEnv};

#[test]
fn demo_chapter_table() {
    let env = TestEnv::new();
    let output = env.cmd().arg("chapters").output().unwrap();
    let report = format!(
        "Exit code: {}\n\n{}",
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout)
    );

    insta::assert_snapshot!(report, @r"
Exit code: 0

  #  Start     End       Title
  1  0:00      1:12      Introduction
  2  1:12      5:57      Legacy VB.NET Inventory App
  3  5:57      7:54      Legacy application repository & pain points
  4  7:54      9:35      Solution: Controlled modernization
  5  9:35      10:26     Execution plan
  6  10:26     16:46     CodeFWD and CodeFWD demo
  7  16:46     18:06     Microservice API visualization
  8  18:06     19:47     Product vision
  9  19:47     21:18     What it solves?
 10  21:18     22:39     Coexistence with VB.NET
 11  22:39     24:00     Closing

11 chapters, 24:00 total
");
}

#[test]
fn toml_file_with_clock_times() {
    let env = TestEnv::new();
    let stdout = run_ok(&env, &["chapters", &arg(&fixture("talk.toml"))]);

    assert!(stdout.contains("  1  0:00      2:05      Welcome"));
    assert!(stdout.contains("  2  2:05      6:20      Architecture"));
    assert!(stdout.contains("  3  6:20      12:30     Live demo"));
    assert!(stdout.contains("3 chapters, 12:30 total"));
}

#[test]
fn bare_json_array_has_unknown_duration() {
    let env = TestEnv::new();
    let stdout = run_ok(&env, &["chapters", &arg(&fixture("bare.json"))]);

    assert!(stdout.contains("  2  4:10      1:02:05   Interview"));
    assert!(stdout.contains("  3  1:02:05   -         Credits"));
    assert!(stdout.contains("3 chapters, duration unknown"));
}

#[test]
fn json_object_form_reads_duration() {
    let env = TestEnv::new();
    let stdout = run_ok(&env, &["chapters", &arg(&fixture("full.json"))]);

    assert!(stdout.contains("  2  7:30      10:00     Teardown"));
    assert!(stdout.contains("2 chapters, 10:00 total"));
}

#[test]
fn duration_flag_overrides_file() {
    let env = TestEnv::new();
    let stdout = run_ok(
        &env,
        &["chapters", &arg(&fixture("bare.json")), "--duration", "1:05:00"],
    );

    assert!(stdout.contains("  3  1:02:05   1:05:00   Credits"));
    assert!(stdout.contains("3 chapters, 1:05:00 total"));
}

#[test]
fn missing_file_fails_with_path() {
    let env = TestEnv::new();
    env.cmd()
        .args(["chapters", "no-such-talk.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load chapters from"))
        .stderr(predicate::str::contains("no-such-talk.toml"));
}

#[test]
fn unsorted_chapters_are_rejected() {
    let env = TestEnv::new();
    env.cmd()
        .args(["chapters", &arg(&fixture("unsorted.toml"))])
        .assert()
        .failure()
        .stderr(predicate::str::contains("before the previous chapter"));
}

#[test]
fn empty_chapter_file_is_rejected() {
    let env = TestEnv::new();
    let path = env.write("empty.toml", "duration = 60\n");
    env.cmd()
        .args(["chapters", &arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Chapter list is empty"));
}

#[test]
fn unsupported_extension_is_rejected() {
    let env = TestEnv::new();
    let path = env.write("chapters.txt", "0:00 Intro\n");
    env.cmd()
        .args(["chapters", &arg(&path)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported chapter file extension 'txt'"));
}

#[test]
fn invalid_duration_flag_is_a_usage_error() {
    let env = TestEnv::new();
    env.cmd()
        .args(["chapters", "--duration", "later"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid time 'later'"));
}
