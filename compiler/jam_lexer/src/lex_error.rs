use jam_diagnostic::{Diagnostic, ErrorCode};
use jam_ir::Span;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),
    #[error("integer literal `{0}` does not fit in 64 bits")]
    IntegerOutOfRange(String),
}

/// The first lexically invalid position of a source text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    #[cold]
    pub fn unexpected_char(c: char, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedChar(c),
            span,
        }
    }

    #[cold]
    pub fn integer_out_of_range(literal: &str, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::IntegerOutOfRange(literal.to_string()),
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnexpectedChar(_) => ErrorCode::E0001,
            LexErrorKind::IntegerOutOfRange(_) => ErrorCode::E0002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self.kind {
            LexErrorKind::UnexpectedChar('!') => diag
                .with_label(self.span, "not a token on its own")
                .with_note("did you mean `!=`?"),
            LexErrorKind::UnexpectedChar(':') => diag
                .with_label(self.span, "not a token on its own")
                .with_note("did you mean `:=`?"),
            LexErrorKind::UnexpectedChar(_) => diag.with_label(self.span, "not valid here"),
            LexErrorKind::IntegerOutOfRange(_) => diag
                .with_label(self.span, "literal too large")
                .with_note(format!("the largest integer literal is {}", i64::MAX)),
        }
    }
}

#[cfg(test)]
mod tests;
