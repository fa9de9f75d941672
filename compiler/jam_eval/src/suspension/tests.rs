use pretty_assertions::assert_eq;

use super::*;
use crate::{EvalConfig, EvalErrorKind};
use jam_check::{check, CheckConfig, CheckedProgram};
use jam_ir::SharedInterner;

fn program(source: &str) -> CheckedProgram {
    let interner = SharedInterner::new();
    let parsed = jam_parse::parse_source(source, &interner).unwrap();
    check(parsed, &interner, CheckConfig::default()).unwrap()
}

fn counting_evaluator(program: &CheckedProgram) -> Evaluator {
    Evaluator::for_program(program, &EvalConfig::builder().counters(true).build())
}

fn forces(evaluator: &Evaluator) -> u64 {
    evaluator.snapshot().unwrap().suspensions_forced
}

#[test]
fn by_name_reruns_every_force() {
    let program = program("1 + 2");
    let evaluator = counting_evaluator(&program);
    let thunk = Thunk::ByName(Suspension::new(program.root(), evaluator.clone()));
    assert_eq!(thunk.force().unwrap().as_int(), Some(3));
    assert_eq!(thunk.force().unwrap().as_int(), Some(3));
    assert_eq!(forces(&evaluator), 2);
    assert!(!thunk.is_forced());
}

#[test]
fn by_need_runs_once() {
    let program = program("1 + 2");
    let evaluator = counting_evaluator(&program);
    let cell = NeedCell::new(Suspension::new(program.root(), evaluator.clone()));
    assert!(!cell.is_forced());
    for _ in 0..3 {
        assert_eq!(cell.force().unwrap().as_int(), Some(3));
    }
    assert!(cell.is_forced());
    assert_eq!(forces(&evaluator), 1);
}

#[test]
fn ready_thunk_never_evaluates() {
    let program = program("0");
    let evaluator = counting_evaluator(&program);
    let thunk = Thunk::Ready(Value::Int(7));
    assert_eq!(thunk.force().unwrap().as_int(), Some(7));
    assert!(thunk.is_forced());
    assert_eq!(forces(&evaluator), 0);
}

#[test]
fn failed_need_force_stays_pending() {
    let program = program("1 / 0");
    let evaluator = counting_evaluator(&program);
    let cell = NeedCell::new(Suspension::new(program.root(), evaluator.clone()));
    let err = cell.force().unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert!(!cell.is_forced());
    assert!(cell.force().is_err());
    assert_eq!(forces(&evaluator), 2);
}

#[test]
fn suspension_remembers_its_expression() {
    let program = program("true");
    let evaluator = counting_evaluator(&program);
    let suspension = Suspension::new(program.root(), evaluator);
    assert_eq!(suspension.expr(), program.root());
    assert_eq!(suspension.force().unwrap().as_bool(), Some(true));
}

#[test]
fn take_list_detaches_only_cons_cells() {
    let mut empty = Thunk::Ready(Value::null());
    assert!(empty.take_list().is_none());
    let mut int = Thunk::Ready(Value::Int(1));
    assert!(int.take_list().is_none());
    let mut list = Thunk::Ready(Value::List(List::cons(Value::Int(1), List::Empty)));
    assert!(list.take_list().is_some());
    assert!(matches!(list, Thunk::Ready(Value::List(List::Empty))));
}
