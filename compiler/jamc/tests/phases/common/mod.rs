//! Shared test utilities for phase tests.

use std::path::PathBuf;
use std::process::{Command, Output};

use jam_eval::EvalPolicy;
use jamc::pipeline;
use jamc::{Problem, RunOptions};

/// Path of a program under the workspace `demos/` directory.
pub fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

pub fn demo_source(name: &str) -> String {
    std::fs::read_to_string(demo(name)).unwrap()
}

/// Run `source` under `policy` with a depth limit small enough for tests.
pub fn run(source: &str, policy: EvalPolicy) -> Result<String, Problem> {
    let options = RunOptions {
        policy,
        max_depth: Some(5000),
        ..RunOptions::default()
    };
    pipeline::run_source(source, &options).map(|output| output.rendered)
}

/// Invoke the `jam` binary.
pub fn jam(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jam"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn jam")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
