use std::fmt;

use jam_diagnostic::{Diagnostic, ErrorCode};
use jam_ir::Span;

/// Which binding form introduced a duplicated name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinderKind {
    Map,
    Let,
}

impl fmt::Display for BinderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinderKind::Map => f.write_str("map"),
            BinderKind::Let => f.write_str("let"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CheckErrorKind {
    #[error("`{name}` is a free variable")]
    FreeVariable { name: String },
    #[error("`{name}` is repeated in {binder}")]
    DuplicateBinding {
        name: String,
        binder: BinderKind,
        /// The earlier occurrence in the same group.
        first: Span,
    },
}

/// A program that is syntactically valid but not well-scoped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct CheckError {
    pub kind: CheckErrorKind,
    pub span: Span,
}

impl CheckError {
    #[cold]
    pub fn free_variable(name: &str, span: Span) -> Self {
        CheckError {
            kind: CheckErrorKind::FreeVariable {
                name: name.to_string(),
            },
            span,
        }
    }

    #[cold]
    pub fn duplicate_binding(name: &str, binder: BinderKind, first: Span, span: Span) -> Self {
        CheckError {
            kind: CheckErrorKind::DuplicateBinding {
                name: name.to_string(),
                binder,
                first,
            },
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            CheckErrorKind::FreeVariable { .. } => ErrorCode::E2001,
            CheckErrorKind::DuplicateBinding { .. } => ErrorCode::E2002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match &self.kind {
            CheckErrorKind::FreeVariable { .. } => diag
                .with_label(self.span, "not bound by any enclosing `map` or `let`")
                .with_note("`let` definitions cannot see the names bound by their own `let`"),
            CheckErrorKind::DuplicateBinding { first, .. } => diag
                .with_label(self.span, "bound again here")
                .with_secondary_label(*first, "first bound here"),
        }
    }
}
