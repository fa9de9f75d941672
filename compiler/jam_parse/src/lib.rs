//! Recursive descent parser for Jam.
//!
//! Produces a flat [`ExprArena`] with a single root expression. The whole
//! input must be consumed; anything after the root is an error.

mod cursor;
mod error;
mod grammar;

use jam_ir::{ExprArena, ExprId, StringInterner, TokenKind, TokenList};
use tracing::debug;

use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

/// A successfully parsed program.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub arena: ExprArena,
    pub root: ExprId,
}

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a TokenList, interner: &'a StringInterner, source_len: usize) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::with_capacity(source_len),
        }
    }

    fn parse_program(mut self) -> Result<ParseOutput, ParseError> {
        let root = self.parse_expr()?;
        let next = self.cursor.peek();
        if next.kind != TokenKind::Eof {
            return Err(ParseError::trailing(
                next.kind,
                next.span,
                self.cursor.interner(),
            ));
        }
        Ok(ParseOutput {
            arena: self.arena,
            root,
        })
    }
}

/// Parse a lexed token list.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    let source_len = tokens
        .as_slice()
        .last()
        .map_or(0, |eof| eof.span.end as usize);
    let output = Parser::new(tokens, interner, source_len).parse_program()?;
    debug!(nodes = output.arena.len(), "parsed");
    Ok(output)
}

/// Lex and parse `source`.
pub fn parse_source(source: &str, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    let tokens = jam_lexer::lex(source, interner)?;
    parse(&tokens, interner)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
