//! The `lex` and `parse` commands, for inspecting the front end.

use crate::pipeline;

use super::{fail, read_file};

/// Print the token stream of `path`.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    match pipeline::lex_to_string(&source) {
        Ok(listing) => {
            println!("Tokens for '{path}' ({} tokens):", listing.lines().count());
            print!("{listing}");
        }
        Err(problem) => fail(&problem, path, &source),
    }
}

/// Print the program in `path` back as concrete syntax.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    match pipeline::parse_to_string(&source) {
        Ok(printed) => println!("{printed}"),
        Err(problem) => fail(&problem, path, &source),
    }
}
