//! Parse errors.

use jam_diagnostic::{Diagnostic, ErrorCode};
use jam_ir::{Span, StringInterner, TokenKind};
use jam_lexer::LexError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: &'static str },
    #[error("unexpected {found} after the end of the expression")]
    TrailingInput { found: String },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    /// The token at `span` was not what the grammar allows here.
    #[cold]
    pub fn unexpected(
        expected: &'static str,
        found: TokenKind,
        span: Span,
        interner: &StringInterner,
    ) -> Self {
        let kind = if found == TokenKind::Eof {
            ParseErrorKind::UnexpectedEof { expected }
        } else {
            ParseErrorKind::UnexpectedToken {
                expected,
                found: describe(found, interner),
            }
        };
        ParseError { kind, span }
    }

    #[cold]
    pub fn trailing(found: TokenKind, span: Span, interner: &StringInterner) -> Self {
        ParseError {
            kind: ParseErrorKind::TrailingInput {
                found: describe(found, interner),
            },
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            ParseErrorKind::Lex(err) => err.code(),
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::UnexpectedEof { .. } => ErrorCode::E1002,
            ParseErrorKind::TrailingInput { .. } => ErrorCode::E1003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match &self.kind {
            ParseErrorKind::Lex(err) => err.to_diagnostic(),
            ParseErrorKind::UnexpectedToken { expected, .. }
            | ParseErrorKind::UnexpectedEof { expected } => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(self.span, format!("expected {expected}")),
            ParseErrorKind::TrailingInput { .. } => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(self.span, "the program already ended before this")
                .with_note("a Jam program is a single expression"),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let span = err.span;
        ParseError {
            kind: ParseErrorKind::Lex(err),
            span,
        }
    }
}

/// Human-readable token for messages, resolving identifier text.
fn describe(kind: TokenKind, interner: &StringInterner) -> String {
    match kind {
        TokenKind::Int(n) => format!("integer `{n}`"),
        TokenKind::Ident(name) => format!("identifier `{}`", interner.lookup(name)),
        TokenKind::Prim(prim) => format!("primitive `{prim}`"),
        TokenKind::Eof => "end of input".to_string(),
        other => format!("`{}`", other.display_name()),
    }
}
