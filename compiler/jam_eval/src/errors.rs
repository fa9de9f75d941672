//! Evaluation errors and the constructors the evaluator raises them through.
//!
//! Every failure aborts the enclosing evaluation and travels unchanged to the
//! entry point; nothing here is caught or retried. The span of the innermost
//! expression that was being evaluated is attached on the way out.

use jam_diagnostic::{Diagnostic, ErrorCode};
use jam_ir::{BinaryOp, PrimFn, Span, UnaryOp};

use crate::Value;

pub type EvalResult = Result<Value, EvalError>;

#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "thiserror passes format arguments by reference"
)]
fn plural_s(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String },
    #[error("{value} is not a function")]
    NotAFunction { value: String },
    #[error("{callee} expects {expected} argument{}, found {found}", plural_s(.expected))]
    ArityMismatch {
        callee: String,
        expected: usize,
        found: usize,
    },
    #[error("`{op}` expects {expected}, found {found}")]
    TypeMismatch {
        op: String,
        expected: &'static str,
        found: String,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("`{op}` expects {expected}, found {found}")]
    ListShapeViolation {
        op: &'static str,
        expected: &'static str,
        found: String,
    },
    #[error("integer overflow in `{op}`")]
    IntegerOverflow { op: &'static str },
    #[error("maximum recursion depth of {limit} exceeded")]
    RecursionLimit { limit: usize },
}

/// A failed evaluation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Innermost expression under evaluation when the error was raised.
    pub span: Option<Span>,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already set.
    #[must_use]
    pub fn with_span_if_absent(self, span: Span) -> Self {
        if self.span.is_some() {
            self
        } else {
            self.with_span(span)
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::UnboundVariable { .. } => ErrorCode::E3001,
            EvalErrorKind::NotAFunction { .. } => ErrorCode::E3002,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E3003,
            EvalErrorKind::TypeMismatch { .. } => ErrorCode::E3004,
            EvalErrorKind::DivisionByZero => ErrorCode::E3005,
            EvalErrorKind::ListShapeViolation { .. } => ErrorCode::E3006,
            EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E3007,
            EvalErrorKind::RecursionLimit { .. } => ErrorCode::E3008,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.to_string());
        if let Some(span) = self.span {
            diag = diag.with_label(span, label_for(&self.kind));
        }
        match &self.kind {
            EvalErrorKind::UnboundVariable { .. } => diag.with_note(
                "the context check was skipped or run with flat scopes; \
                 run `jam check` to see where the name escapes its binder",
            ),
            EvalErrorKind::RecursionLimit { .. } => diag
                .with_note("an eager `cons` over a self-referential definition never terminates")
                .with_note("try `--lists=name` or `--lists=need`, or raise `--max-depth`"),
            _ => diag,
        }
    }
}

fn label_for(kind: &EvalErrorKind) -> &'static str {
    match kind {
        EvalErrorKind::UnboundVariable { .. } => "not bound here",
        EvalErrorKind::NotAFunction { .. } => "applied here",
        EvalErrorKind::ArityMismatch { .. } => "called here",
        EvalErrorKind::TypeMismatch { .. } => "in this expression",
        EvalErrorKind::DivisionByZero => "divisor is zero",
        EvalErrorKind::ListShapeViolation { .. } => "in this list operation",
        EvalErrorKind::IntegerOverflow { .. } => "result does not fit in 64 bits",
        EvalErrorKind::RecursionLimit { .. } => "while evaluating this",
    }
}

// Variable and application errors

#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_a_function(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction {
        value: value.describe(),
    })
}

/// A closure applied to the wrong number of arguments.
#[cold]
pub fn closure_arity_mismatch(expected: usize, found: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        callee: "closure".to_string(),
        expected,
        found,
    })
}

#[cold]
pub fn prim_arity_mismatch(prim: PrimFn, found: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        callee: format!("`{prim}`"),
        expected: prim.arity(),
        found,
    })
}

// Type errors

#[cold]
pub fn binary_type_mismatch(op: BinaryOp, expected: &'static str, found: &Value) -> EvalError {
    type_mismatch(op.as_symbol(), expected, found)
}

#[cold]
pub fn unary_type_mismatch(op: UnaryOp, expected: &'static str, found: &Value) -> EvalError {
    type_mismatch(op.as_symbol(), expected, found)
}

#[cold]
pub fn prim_type_mismatch(prim: PrimFn, expected: &'static str, found: &Value) -> EvalError {
    type_mismatch(prim.name(), expected, found)
}

#[cold]
pub fn if_test_not_boolean(found: &Value) -> EvalError {
    type_mismatch("if", "a boolean", found)
}

fn type_mismatch(op: &str, expected: &'static str, found: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        op: op.to_string(),
        expected,
        found: found.describe(),
    })
}

// Arithmetic errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(op: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { op })
}

// List errors

/// `first` or `rest` applied to something other than a cons cell.
#[cold]
pub fn not_a_cons(prim: PrimFn, found: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ListShapeViolation {
        op: prim.name(),
        expected: "a non-empty list",
        found: found.describe(),
    })
}

/// A cons cell whose tail is not a list.
#[cold]
pub fn cons_tail_not_a_list(found: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ListShapeViolation {
        op: "cons",
        expected: "a list as its tail",
        found: found.describe(),
    })
}

// Resource errors

#[cold]
pub fn recursion_limit(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}

#[cfg(test)]
mod tests;
