//! Evaluation policies.
//!
//! A policy picks a [`Discipline`] on two independent axes: how application
//! arguments and `let` definitions become bindings, and how `cons` builds
//! its cells. The evaluator consults it at exactly three places:
//! `make_binding`, `make_cons` and `eval_let`. Operators, primitives other
//! than `cons`, and `if` tests are strict under every policy.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use jam_ir::{ExprId, LetDef, Name};

use crate::diagnostics::EvalCounters;
use crate::environment::Binding;
use crate::errors::{self, EvalError, EvalResult};
use crate::interpreter::Evaluator;
use crate::suspension::{NeedCell, Suspension, Thunk};
use crate::value::{ConsCell, List};
use crate::Value;

/// When a delayed expression is evaluated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Discipline {
    /// Immediately, exactly once.
    #[default]
    Value,
    /// On every access.
    Name,
    /// On first access, then cached.
    Need,
}

impl Discipline {
    pub const ALL: [Discipline; 3] = [Discipline::Value, Discipline::Name, Discipline::Need];

    pub fn as_str(self) -> &'static str {
        match self {
            Discipline::Value => "value",
            Discipline::Name => "name",
            Discipline::Need => "need",
        }
    }

    /// Wrap `expr` according to this discipline.
    fn delay(self, expr: ExprId, evaluator: &Evaluator) -> Result<Thunk, EvalError> {
        match self {
            Discipline::Value => evaluator.eval(expr).map(Thunk::Ready),
            Discipline::Name => Ok(Thunk::ByName(Suspension::new(expr, evaluator.clone()))),
            Discipline::Need => Ok(Thunk::ByNeed(NeedCell::new(Suspension::new(
                expr,
                evaluator.clone(),
            )))),
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown discipline `{0}` (expected `value`, `name` or `need`)")]
pub struct UnknownDiscipline(pub String);

impl FromStr for Discipline {
    type Err = UnknownDiscipline;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Discipline::ALL
            .into_iter()
            .find(|discipline| discipline.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDiscipline(s.to_string()))
    }
}

/// One of the nine evaluator configurations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EvalPolicy {
    /// Argument and `let` bindings.
    pub args: Discipline,
    /// `cons` cells.
    pub lists: Discipline,
}

impl EvalPolicy {
    /// Every combination, argument discipline major.
    pub const ALL: [EvalPolicy; 9] = [
        EvalPolicy::new(Discipline::Value, Discipline::Value),
        EvalPolicy::new(Discipline::Value, Discipline::Name),
        EvalPolicy::new(Discipline::Value, Discipline::Need),
        EvalPolicy::new(Discipline::Name, Discipline::Value),
        EvalPolicy::new(Discipline::Name, Discipline::Name),
        EvalPolicy::new(Discipline::Name, Discipline::Need),
        EvalPolicy::new(Discipline::Need, Discipline::Value),
        EvalPolicy::new(Discipline::Need, Discipline::Name),
        EvalPolicy::new(Discipline::Need, Discipline::Need),
    ];

    pub const fn new(args: Discipline, lists: Discipline) -> Self {
        EvalPolicy { args, lists }
    }

    /// Bind `name` to `expr`, evaluated under `evaluator`'s environment.
    pub(crate) fn make_binding(
        self,
        name: Name,
        expr: ExprId,
        evaluator: &Evaluator,
    ) -> Result<Binding, EvalError> {
        Ok(Binding::new(name, self.args.delay(expr, evaluator)?))
    }

    /// Build the cell for `cons(head, tail)`.
    ///
    /// Under the value discipline both parts are evaluated now, the head
    /// first, and a tail that is not a list fails here. Lazy cells defer
    /// that check to the first `tail()`.
    pub(crate) fn make_cons(
        self,
        head: ExprId,
        tail: ExprId,
        evaluator: &Evaluator,
    ) -> Result<List, EvalError> {
        let cell = match self.lists {
            Discipline::Value => {
                let head = evaluator.eval(head)?;
                match evaluator.eval(tail)? {
                    Value::List(tail) => ConsCell::eager(head, tail),
                    other => return Err(errors::cons_tail_not_a_list(&other)),
                }
            }
            lazy @ (Discipline::Name | Discipline::Need) => ConsCell::new(
                lazy.delay(head, evaluator)?,
                lazy.delay(tail, evaluator)?,
            ),
        };
        evaluator.count(EvalCounters::count_cons);
        Ok(List::Cons(Rc::new(cell)))
    }

    /// Evaluate `let defs in body`.
    ///
    /// All definitions are bound against the environment outside the `let`,
    /// so none of them sees itself or a sibling. The environment is then
    /// extended once with the whole group.
    pub(crate) fn eval_let(self, defs: &[LetDef], body: ExprId, evaluator: &Evaluator) -> EvalResult {
        let bindings = defs
            .iter()
            .map(|def| self.make_binding(def.name, def.init, evaluator))
            .collect::<Result<Vec<_>, _>>()?;
        evaluator
            .with_env(evaluator.env().extend(bindings))
            .eval(body)
    }
}

impl fmt::Display for EvalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.args, self.lists)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
