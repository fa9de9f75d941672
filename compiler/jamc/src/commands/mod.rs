//! Command handlers for the `jam` CLI.
//!
//! Each submodule implements one command. Handlers print their result and
//! call `std::process::exit(1)` on failure. Shared helpers live here.

use std::io::IsTerminal;

use jam_diagnostic::emitter;

use crate::problem::Problem;

mod check;
mod debug;
mod explain;
mod run;

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use run::{eval_inline, run_all_file, run_file};

/// Read a source file, exiting with a readable message if it can't be read.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

/// Render `problem` against `source` on stderr and exit.
pub(crate) fn fail(problem: &Problem, path: &str, source: &str) -> ! {
    let colors = std::io::stderr().is_terminal();
    emitter::emit(&problem.to_diagnostic(), path, source, colors);
    std::process::exit(1);
}
