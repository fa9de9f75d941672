//! Built-in functions.
//!
//! `cons` hands its argument expressions to the list discipline unevaluated.
//! Every other primitive takes exactly one argument, evaluated strictly.

use jam_ir::{ExprId, PrimFn};

use crate::diagnostics::EvalCounters;
use crate::errors::{self, EvalResult};
use crate::interpreter::Evaluator;
use crate::value::{ConsCell, List};
use crate::Value;

pub(crate) fn call_primitive(evaluator: &Evaluator, prim: PrimFn, args: &[ExprId]) -> EvalResult {
    evaluator.count(EvalCounters::count_primitive_call);
    match (prim, args) {
        (PrimFn::Cons, &[head, tail]) => evaluator
            .policy()
            .make_cons(head, tail, evaluator)
            .map(Value::List),
        (PrimFn::Cons, _) => Err(errors::prim_arity_mismatch(prim, args.len())),
        (_, &[arg]) => apply_unary_prim(prim, &evaluator.eval(arg)?),
        _ => Err(errors::prim_arity_mismatch(prim, args.len())),
    }
}

/// Apply a one-argument primitive to an evaluated argument.
pub fn apply_unary_prim(prim: PrimFn, arg: &Value) -> EvalResult {
    match prim {
        PrimFn::NumberP => Ok(Value::Bool(matches!(arg, Value::Int(_)))),
        PrimFn::FunctionP => Ok(Value::Bool(arg.is_function())),
        PrimFn::ListP => Ok(Value::Bool(matches!(arg, Value::List(_)))),
        PrimFn::ConsP => Ok(Value::Bool(matches!(arg, Value::List(List::Cons(_))))),
        PrimFn::NullP => Ok(Value::Bool(matches!(arg, Value::List(List::Empty)))),
        PrimFn::Arity => match arg {
            Value::Closure(closure) => Ok(arity_value(closure.arity())),
            Value::Prim(callee) => Ok(arity_value(callee.arity())),
            other => Err(errors::prim_type_mismatch(prim, "a function", other)),
        },
        PrimFn::First => cons_cell(prim, arg)?.head(),
        PrimFn::Rest => cons_cell(prim, arg)?.tail().map(Value::List),
        PrimFn::Cons => Err(errors::prim_arity_mismatch(prim, 1)),
    }
}

fn cons_cell(prim: PrimFn, arg: &Value) -> Result<&ConsCell, errors::EvalError> {
    match arg {
        Value::List(List::Cons(cell)) => Ok(cell),
        other => Err(errors::not_a_cons(prim, other)),
    }
}

fn arity_value(arity: usize) -> Value {
    Value::Int(i64::try_from(arity).unwrap_or(i64::MAX))
}
