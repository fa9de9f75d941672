//! The `check` command: parse and context-check without evaluating.

use crate::options::RunOptions;
use crate::pipeline;

use super::{fail, read_file};

pub fn check_file(path: &str, options: &RunOptions) {
    let source = read_file(path);
    match pipeline::check_source(&source, options.check_config()) {
        Ok(()) => println!("ok"),
        Err(problem) => fail(&problem, path, &source),
    }
}
