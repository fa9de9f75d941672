#![deny(clippy::arithmetic_side_effects)]
//! Jam Eval - tree-walking evaluator for checked Jam programs.
//!
//! # Architecture
//!
//! - [`Interpreter`] evaluates a [`CheckedProgram`](jam_check::CheckedProgram)
//!   under an [`EvalConfig`]
//! - [`EvalPolicy`] selects one [`Discipline`] for bindings and one for
//!   `cons` cells, nine combinations in all
//! - [`Env`]: persistent, `Rc`-shared environment of [`Binding`]s
//! - [`Thunk`], [`Suspension`] and [`NeedCell`]: the three binding kinds
//! - [`List`] and [`ConsCell`]: list cells whose head and tail are thunks
//! - `evaluate_binary` and `evaluate_unary`: operator dispatch on evaluated
//!   values
//! - [`render_value`]: printing, bounded on infinite lists
//!
//! Every phase error converts to a [`jam_diagnostic::Diagnostic`] through
//! `to_diagnostic`; [`EvalError::code`] gives its stable code.

mod diagnostics;
pub mod entry;
mod environment;
pub mod errors;
mod format;
mod interpreter;
mod operators;
mod policy;
mod primitives;
mod suspension;
mod unary_operators;
mod value;

pub use diagnostics::EvalCounters;
pub use environment::{Binding, Bindings, Env};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use format::render_value;
pub use interpreter::{
    EvalConfig, EvalConfigBuilder, Interpreter, DEFAULT_MAX_DEPTH, DEFAULT_PRINT_DEPTH,
};
pub use operators::evaluate_binary;
pub use policy::{Discipline, EvalPolicy, UnknownDiscipline};
pub use primitives::apply_unary_prim;
pub use suspension::{NeedCell, Suspension, Thunk};
pub use unary_operators::evaluate_unary;
pub use value::{Closure, ConsCell, List, Value};

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
