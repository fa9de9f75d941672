//! Delayed evaluation.
//!
//! A [`Suspension`] is an expression together with the evaluator (and so the
//! environment) it must run under. By-name bindings and cells re-run it on
//! every access; a [`NeedCell`] runs it at most once and keeps the result.

use std::cell::RefCell;
use std::rc::Rc;

use jam_ir::ExprId;
use tracing::trace;

use crate::diagnostics::EvalCounters;
use crate::errors::EvalResult;
use crate::interpreter::Evaluator;
use crate::value::{ConsCell, List};
use crate::Value;

#[derive(Clone)]
pub struct Suspension {
    expr: ExprId,
    evaluator: Evaluator,
}

impl Suspension {
    pub(crate) fn new(expr: ExprId, evaluator: Evaluator) -> Self {
        Suspension { expr, evaluator }
    }

    pub fn expr(&self) -> ExprId {
        self.expr
    }

    /// Run the suspended expression.
    pub fn force(&self) -> EvalResult {
        self.evaluator.count(EvalCounters::count_force);
        trace!(expr = self.expr.index(), "forcing suspension");
        self.evaluator.eval(self.expr)
    }
}

enum NeedState {
    Pending(Suspension),
    Ready(Value),
}

/// A suspension that caches its first successful result.
///
/// Once forced, the suspension and with it the captured environment are
/// released. A failed force leaves the cell pending.
pub struct NeedCell {
    state: RefCell<NeedState>,
}

impl NeedCell {
    pub fn new(suspension: Suspension) -> Self {
        NeedCell {
            state: RefCell::new(NeedState::Pending(suspension)),
        }
    }

    pub fn force(&self) -> EvalResult {
        // The borrow is released before forcing; the expression may read
        // other cells, or reach this one again through a longer path.
        let suspension = match &*self.state.borrow() {
            NeedState::Ready(value) => return Ok(value.clone()),
            NeedState::Pending(suspension) => suspension.clone(),
        };
        let value = suspension.force()?;
        let mut state = self.state.borrow_mut();
        if let NeedState::Ready(existing) = &*state {
            return Ok(existing.clone());
        }
        *state = NeedState::Ready(value.clone());
        Ok(value)
    }

    pub fn is_forced(&self) -> bool {
        matches!(&*self.state.borrow(), NeedState::Ready(_))
    }

    fn take_list(&self) -> Option<Rc<ConsCell>> {
        match &mut *self.state.borrow_mut() {
            NeedState::Ready(value) => take_list(value),
            NeedState::Pending(_) => None,
        }
    }
}

/// How a binding or a list-cell field holds its value.
pub enum Thunk {
    /// Evaluated when the thunk was built.
    Ready(Value),
    /// Re-evaluated on every force.
    ByName(Suspension),
    /// Evaluated on the first force, cached afterwards.
    ByNeed(NeedCell),
}

impl Thunk {
    pub fn force(&self) -> EvalResult {
        match self {
            Thunk::Ready(value) => Ok(value.clone()),
            Thunk::ByName(suspension) => suspension.force(),
            Thunk::ByNeed(cell) => cell.force(),
        }
    }

    /// Whether forcing would return a stored value without evaluating.
    pub fn is_forced(&self) -> bool {
        match self {
            Thunk::Ready(_) => true,
            Thunk::ByName(_) => false,
            Thunk::ByNeed(cell) => cell.is_forced(),
        }
    }

    /// Detach a stored cons cell, leaving the empty list in its place.
    pub(crate) fn take_list(&mut self) -> Option<Rc<ConsCell>> {
        match self {
            Thunk::Ready(value) => take_list(value),
            Thunk::ByName(_) => None,
            Thunk::ByNeed(cell) => cell.take_list(),
        }
    }
}

fn take_list(value: &mut Value) -> Option<Rc<ConsCell>> {
    match value {
        Value::List(list @ List::Cons(_)) => match std::mem::take(list) {
            List::Cons(cell) => Some(cell),
            List::Empty => None,
        },
        _ => None,
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
