//! Context-check tests through the driver pipeline.

use jam_check::{CheckConfig, ScopeMode};
use jam_diagnostic::ErrorCode;
use jamc::pipeline::check_source;

const LEXICAL: CheckConfig = CheckConfig {
    scope_mode: ScopeMode::Lexical,
};
const FLAT: CheckConfig = CheckConfig {
    scope_mode: ScopeMode::Flat,
};

#[test]
fn demos_pass_both_checks() {
    for name in ["append.jam", "streams.jam", "factorial.jam", "sharing.jam"] {
        let source = crate::common::demo_source(name);
        assert!(check_source(&source, LEXICAL).is_ok(), "{name}");
        assert!(check_source(&source, FLAT).is_ok(), "{name}");
    }
}

#[test]
fn let_definitions_do_not_see_their_siblings() {
    let source = "let a := 1; b := a; in b";
    assert_eq!(check_source(source, LEXICAL).unwrap_err().code(), ErrorCode::E2001);
    assert!(check_source(source, FLAT).is_ok());
}

#[test]
fn flat_names_leak_into_later_branches() {
    let source = "let f := map y to y; in f(1) + y";
    assert!(check_source(source, LEXICAL).is_err());
    assert!(check_source(source, FLAT).is_ok());
}

#[test]
fn duplicates_are_rejected_in_both_modes() {
    for config in [LEXICAL, FLAT] {
        assert_eq!(
            check_source("let a := 1; a := 2; in a", config).unwrap_err().code(),
            ErrorCode::E2002
        );
    }
}
