//! The `run`, `eval` and `all` commands.

use crate::options::RunOptions;
use crate::pipeline::{self, RunOutput};

use super::{fail, read_file};

/// Evaluate the program in `path` and print its value.
pub fn run_file(path: &str, options: &RunOptions) {
    let source = read_file(path);
    run_and_print(path, &source, options);
}

/// Evaluate a program given on the command line.
pub fn eval_inline(source: &str, options: &RunOptions) {
    run_and_print("<eval>", source, options);
}

/// Evaluate `path` under every policy, one line each.
///
/// Exits non-zero if any policy failed or the program did not check.
pub fn run_all_file(path: &str, options: &RunOptions) {
    let source = read_file(path);
    let outcomes = match pipeline::run_all(&source, options) {
        Ok(outcomes) => outcomes,
        Err(problem) => fail(&problem, path, &source),
    };
    for outcome in &outcomes {
        println!("{outcome}");
    }
    if outcomes.iter().any(|outcome| outcome.result.is_err()) {
        std::process::exit(1);
    }
}

fn run_and_print(name: &str, source: &str, options: &RunOptions) {
    match pipeline::run_source(source, options) {
        Ok(RunOutput { rendered, counters }) => {
            println!("{rendered}");
            if let Some(counters) = counters {
                eprintln!("{}", counters.report());
            }
        }
        Err(problem) => fail(&problem, name, source),
    }
}
