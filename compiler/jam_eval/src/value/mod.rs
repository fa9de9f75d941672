//! Runtime values.
//!
//! `null` is [`List::Empty`]; there is no separate unit value. Closures and
//! list cells are reference-counted and never mutated after construction,
//! apart from the one-shot cache inside by-need suspensions.

mod list;

use std::fmt;
use std::rc::Rc;

use jam_ir::{ExprId, ParamRange, PrimFn};

use crate::environment::Env;
use crate::errors::EvalError;

pub use list::{ConsCell, List};

#[derive(Clone)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Prim(PrimFn),
    Closure(Rc<Closure>),
    List(List),
}

impl Value {
    #[inline]
    pub fn null() -> Value {
        Value::List(List::Empty)
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Value::Closure(_) | Value::Prim(_))
    }

    /// Shallow description for error messages. Never forces anything.
    pub fn describe(&self) -> String {
        match self {
            Value::Int(n) => format!("integer `{n}`"),
            Value::Bool(b) => format!("boolean `{b}`"),
            Value::Prim(prim) => format!("primitive `{prim}`"),
            Value::Closure(closure) => format!("a closure of arity {}", closure.arity()),
            Value::List(List::Empty) => "the empty list".to_string(),
            Value::List(List::Cons(_)) => "a non-empty list".to_string(),
        }
    }

    /// Structural equality as `=` sees it.
    ///
    /// Lists are compared cell by cell, forcing lazy heads and tails as it
    /// goes; a forcing error is returned as is. Two closures are equal when
    /// they come from the same `map` and their captured environments bind
    /// the same names to equal values, so re-evaluating one `map` in one
    /// environment yields equal closures whether or not the result was
    /// cached. Values of different kinds are simply unequal.
    pub fn equals(&self, other: &Value) -> Result<bool, EvalError> {
        enum Pending {
            Values(Value, Value),
            Tails(Rc<ConsCell>, Rc<ConsCell>),
            Envs(Env, Env),
        }

        let mut pending = vec![Pending::Values(self.clone(), other.clone())];
        while let Some(next) = pending.pop() {
            let (left, right) = match next {
                Pending::Values(left, right) => (left, right),
                Pending::Tails(left, right) => (
                    Value::List(left.tail()?),
                    Value::List(right.tail()?),
                ),
                Pending::Envs(left, right) => {
                    if left.ptr_eq(&right) {
                        continue;
                    }
                    let (Some((a, left_rest)), Some((b, right_rest))) =
                        (left.split_first(), right.split_first())
                    else {
                        return Ok(false);
                    };
                    if a.name() != b.name() {
                        return Ok(false);
                    }
                    let values = (a.resolve()?, b.resolve()?);
                    pending.push(Pending::Envs(left_rest.clone(), right_rest.clone()));
                    values
                }
            };
            match (left, right) {
                (Value::Int(a), Value::Int(b)) if a == b => {}
                (Value::Bool(a), Value::Bool(b)) if a == b => {}
                (Value::Prim(a), Value::Prim(b)) if a == b => {}
                (Value::Closure(a), Value::Closure(b)) if a.lambda == b.lambda => {
                    if !Rc::ptr_eq(&a, &b) {
                        pending.push(Pending::Envs(a.env.clone(), b.env.clone()));
                    }
                }
                (Value::List(List::Empty), Value::List(List::Empty)) => {}
                (Value::List(List::Cons(a)), Value::List(List::Cons(b))) => {
                    if Rc::ptr_eq(&a, &b) {
                        continue;
                    }
                    let heads = Pending::Values(a.head()?, b.head()?);
                    pending.push(Pending::Tails(a, b));
                    pending.push(heads);
                }
                _ => return Ok(false),
            }
        }
        Ok(true)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::List(list)
    }
}

// Shallow on purpose: a lazy list may be infinite.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Prim(prim) => f.debug_tuple("Prim").field(prim).finish(),
            Value::Closure(closure) => f.debug_tuple("Closure").field(closure).finish(),
            Value::List(List::Empty) => f.write_str("Null"),
            Value::List(List::Cons(_)) => f.write_str("Cons(..)"),
        }
    }
}

/// A `map` literal paired with the environment it was evaluated in.
pub struct Closure {
    /// The `map` expression itself, used for printing.
    pub lambda: ExprId,
    pub params: ParamRange,
    pub body: ExprId,
    pub env: Env,
}

impl Closure {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("lambda", &self.lambda)
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
