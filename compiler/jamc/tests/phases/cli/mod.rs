//! The `jam` binary.

use pretty_assertions::assert_eq;

use crate::common::{demo, jam, stderr, stdout};

fn demo_arg(name: &str) -> String {
    demo(name).to_string_lossy().into_owned()
}

#[test]
fn run_prints_the_value() {
    let output = jam(&["run", &demo_arg("append.jam")]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "(1 2 3 1 2 3)\n");
}

#[test]
fn policy_flags_select_lazy_lists() {
    let output = jam(&["run", &demo_arg("streams.jam"), "--lists=need"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "2\n");
}

#[test]
fn positional_policy_shorthand() {
    let path = demo_arg("streams.jam");
    let output = jam(&[path.as_str(), "value", "name"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "2\n");
}

#[test]
fn eval_takes_inline_source() {
    let output = jam(&["eval", "let x := 6; in x * 7"]);
    assert_eq!(stdout(&output), "42\n");
}

#[test]
fn stats_go_to_stderr() {
    let output = jam(&["run", &demo_arg("sharing.jam"), "--args=need", "--stats"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "9\n");
    let profile = stderr(&output);
    assert!(profile.contains("Evaluation profile:"), "{profile}");
    assert!(profile.contains("Suspensions forced:    1"), "{profile}");
}

#[test]
fn runtime_errors_are_diagnostics() {
    let output = jam(&["eval", "1 + 10 / 0"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    let report = stderr(&output);
    assert!(report.contains("E3005"), "{report}");
    assert!(report.contains("division by zero"), "{report}");
}

#[test]
fn all_fails_when_any_policy_fails() {
    let output = jam(&["all", &demo_arg("streams.jam"), "--max-depth=2000"]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 9);
    assert_eq!(out.lines().nth(2), Some("value/need: 2"));

    let output = jam(&["all", &demo_arg("factorial.jam")]);
    assert!(output.status.success());
    assert!(stdout(&output).lines().all(|line| line.ends_with(": 3628800")));
}

#[test]
fn check_and_parse() {
    let output = jam(&["check", &demo_arg("factorial.jam")]);
    assert_eq!(stdout(&output), "ok\n");

    let output = jam(&["parse", &demo_arg("sharing.jam")]);
    assert_eq!(stdout(&output), "let x := 1 + 2; in x + x + x\n");
}

#[test]
fn explain_prints_the_docs() {
    let output = jam(&["--explain", "E3008"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("# E3008"));

    let output = jam(&["--explain", "E9999"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn usage_errors_exit_non_zero() {
    assert_eq!(jam(&["run"]).status.code(), Some(1));
    assert_eq!(jam(&["eval", "1", "--args=lazy"]).status.code(), Some(1));
    assert_eq!(jam(&["frobnicate"]).status.code(), Some(1));
    let missing = jam(&["run", "no/such/file.jam"]);
    assert!(stderr(&missing).contains("cannot find file 'no/such/file.jam'"));
}
