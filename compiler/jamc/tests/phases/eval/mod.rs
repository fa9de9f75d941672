//! The demo programs under every evaluation policy.

use pretty_assertions::assert_eq;

use jam_eval::{Discipline, EvalErrorKind, EvalPolicy};
use jamc::pipeline::{run_all, run_source};
use jamc::{Problem, RunOptions};

use crate::common::{demo_source, run};

#[test]
fn append_agrees_everywhere() {
    let source = demo_source("append.jam");
    for policy in EvalPolicy::ALL {
        assert_eq!(run(&source, policy).unwrap(), "(1 2 3 1 2 3)", "{policy}");
    }
}

#[test]
fn factorial_agrees_everywhere() {
    let source = demo_source("factorial.jam");
    for policy in EvalPolicy::ALL {
        assert_eq!(run(&source, policy).unwrap(), "3628800", "{policy}");
    }
}

#[test]
fn streams_need_lazy_lists() {
    let source = demo_source("streams.jam");
    for policy in EvalPolicy::ALL {
        match (policy.lists, run(&source, policy)) {
            (Discipline::Value, Err(Problem::Eval(err))) => {
                assert_eq!(err.kind, EvalErrorKind::RecursionLimit { limit: 5000 });
            }
            (Discipline::Name | Discipline::Need, Ok(value)) => assert_eq!(value, "2"),
            (_, other) => panic!("{policy}: unexpected {other:?}"),
        }
    }
}

#[test]
fn sharing_shows_in_the_profile() {
    let source = demo_source("sharing.jam");
    let forces = |args| {
        let options = RunOptions {
            policy: EvalPolicy::new(args, Discipline::Value),
            stats: true,
            ..RunOptions::default()
        };
        let output = run_source(&source, &options).unwrap();
        assert_eq!(output.rendered, "9");
        output.counters.unwrap().suspensions_forced
    };
    assert_eq!(forces(Discipline::Value), 0);
    assert_eq!(forces(Discipline::Name), 3);
    assert_eq!(forces(Discipline::Need), 1);
}

#[test]
fn all_renders_one_line_per_policy() {
    let options = RunOptions {
        max_depth: Some(3000),
        ..RunOptions::default()
    };
    let lines: Vec<String> = run_all(&demo_source("streams.jam"), &options)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    let expected: Vec<String> = EvalPolicy::ALL
        .iter()
        .map(|policy| match policy.lists {
            Discipline::Value => {
                format!("{policy}: error[E3008]: maximum recursion depth of 3000 exceeded")
            }
            Discipline::Name | Discipline::Need => format!("{policy}: 2"),
        })
        .collect();
    assert_eq!(lines, expected);
}
