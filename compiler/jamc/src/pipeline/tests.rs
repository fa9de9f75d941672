use pretty_assertions::assert_eq;

use super::*;
use jam_check::ScopeMode;
use jam_diagnostic::ErrorCode;
use jam_eval::{Discipline, EvalErrorKind};

const STREAM: &str = "let mk := map self to cons(0, self(self)); in first(mk(mk))";

fn shallow() -> RunOptions {
    RunOptions {
        max_depth: Some(500),
        ..RunOptions::default()
    }
}

#[test]
fn run_renders_the_value() {
    let output = run_source("let x := 3; in x * 6", &RunOptions::default()).unwrap();
    assert_eq!(output.rendered, "18");
    assert_eq!(output.counters, None);
}

#[test]
fn run_reports_counters_when_asked() {
    let options = RunOptions {
        policy: EvalPolicy::new(Discipline::Need, Discipline::Value),
        stats: true,
        ..RunOptions::default()
    };
    let output = run_source("let x := 1 + 2; in x + x + x", &options).unwrap();
    assert_eq!(output.rendered, "9");
    assert_eq!(output.counters.unwrap().suspensions_forced, 1);
}

#[test]
fn problems_are_tagged_by_phase() {
    let options = RunOptions::default();

    let lex = run_source("1 # 2", &options).unwrap_err();
    assert!(matches!(lex, Problem::Parse(_)));
    assert_eq!(lex.code(), ErrorCode::E0001);

    let parse = run_source("1 +", &options).unwrap_err();
    assert!(matches!(parse, Problem::Parse(_)));

    let check = run_source("x + 1", &options).unwrap_err();
    assert_eq!(check.code(), ErrorCode::E2001);
    assert_eq!(check.summary(), "error[E2001]: `x` is a free variable");

    let eval = run_source("10 / (5 - 5)", &options).unwrap_err();
    assert_eq!(eval.code(), ErrorCode::E3005);
    assert_eq!(eval.summary(), "error[E3005]: division by zero");
    assert!(eval.to_diagnostic().primary_span().is_some());
}

#[test]
fn flat_scopes_relax_the_check() {
    let source = "if true then (map x to x) else x";
    assert!(run_source(source, &RunOptions::default()).is_err());

    let flat = RunOptions {
        scope_mode: ScopeMode::Flat,
        ..RunOptions::default()
    };
    assert!(check_source(source, flat.check_config()).is_ok());
    assert_eq!(run_source(source, &flat).unwrap().rendered, "(closure: map x to x)");
}

#[test]
fn all_policies_in_order() {
    let outcomes = run_all(STREAM, &shallow()).unwrap();
    let policies: Vec<_> = outcomes.iter().map(|outcome| outcome.policy).collect();
    assert_eq!(policies, EvalPolicy::ALL.to_vec());

    for outcome in &outcomes {
        if outcome.policy.lists == Discipline::Value {
            assert_eq!(
                outcome.result.as_ref().unwrap_err().kind,
                EvalErrorKind::RecursionLimit { limit: 500 }
            );
        } else {
            assert_eq!(outcome.result.as_deref(), Ok("0"));
        }
    }
}

#[test]
fn all_lines() {
    let outcomes = run_all(STREAM, &shallow()).unwrap();
    assert_eq!(
        outcomes[0].to_string(),
        "value/value: error[E3008]: maximum recursion depth of 500 exceeded"
    );
    assert_eq!(outcomes[1].to_string(), "value/name: 0");
    assert_eq!(outcomes[8].to_string(), "need/need: 0");
}

#[test]
fn all_stops_at_front_end_errors() {
    let err = run_all("map x, x to x", &RunOptions::default()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2002);
}

#[test]
fn parse_prints_concrete_syntax() {
    assert_eq!(parse_to_string("1+2*3").unwrap(), "1 + 2 * 3");
    assert_eq!(parse_to_string("(1 + 2) * 3").unwrap(), "(1 + 2) * 3");
    assert!(parse_to_string("let in").is_err());
}

#[test]
fn lex_lists_each_token() {
    let listing = lex_to_string("f(12)").unwrap();
    let lines: Vec<Vec<&str>> = listing
        .lines()
        .map(|line| line.split_whitespace().collect())
        .collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], ["0..1", "identifier", "f"]);
    assert_eq!(lines[1], ["1..2", "(", "("]);
    assert_eq!(lines[2], ["2..4", "integer", "12"]);
    assert_eq!(lines[4], ["5..5", "end", "of", "input"]);
}
