//! Front-end tests through the driver pipeline.

use pretty_assertions::assert_eq;

use jam_diagnostic::ErrorCode;
use jamc::pipeline::{lex_to_string, parse_to_string};

#[test]
fn printing_reaches_a_fixed_point() {
    for source in [
        "let x := 1; y := 2; in x + y",
        "map f, g to map x to f(g(x))",
        "if ~(a = b) then -a else (if c then 1 else 2) * 3",
        "(map x to x)(cons(1, null), null?)",
        "1 - (2 - 3) - 4",
    ] {
        let printed = parse_to_string(source).unwrap();
        assert_eq!(parse_to_string(&printed).unwrap(), printed, "from {source}");
    }
}

#[test]
fn printing_keeps_needed_parentheses() {
    assert_eq!(parse_to_string("1 - (2 - 3)").unwrap(), "1 - (2 - 3)");
    assert_eq!(parse_to_string("(1 - 2) - 3").unwrap(), "1 - 2 - 3");
}

#[test]
fn comments_and_whitespace_are_skipped() {
    let listing = lex_to_string("// leading comment\n  x\t// trailing\n").unwrap();
    let kinds: Vec<&str> = listing
        .lines()
        .map(|line| line.split_whitespace().nth(1).unwrap())
        .collect();
    assert_eq!(kinds, ["identifier", "end"]);
}

#[test]
fn lexer_errors_keep_their_codes() {
    assert_eq!(lex_to_string("a $ b").unwrap_err().code(), ErrorCode::E0001);
    assert_eq!(
        lex_to_string("99999999999999999999").unwrap_err().code(),
        ErrorCode::E0002
    );
}

#[test]
fn parser_errors_keep_their_codes() {
    assert_eq!(parse_to_string("1 +").unwrap_err().code(), ErrorCode::E1002);
    assert_eq!(parse_to_string("1 2").unwrap_err().code(), ErrorCode::E1003);
    assert_eq!(parse_to_string("let := 1; in 2").unwrap_err().code(), ErrorCode::E1001);
}
