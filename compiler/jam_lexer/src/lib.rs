//! Lexer for Jam.
//!
//! `logos` recognizes token shapes; [`lex`] then classifies words through the
//! keyword table, interns identifiers and parses integer literals. Lexing
//! stops at the first invalid character.

mod lex_error;
mod raw_token;

use jam_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use logos::Logos;
use tracing::trace;

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Tokenize `source`. The returned list always ends with [`TokenKind::Eof`].
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    let mut tokens = TokenList::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let slice = lexer.slice();
        let Ok(raw) = result else {
            let c = slice.chars().next().unwrap_or('\0');
            return Err(LexError::unexpected_char(c, span));
        };
        let kind = convert(raw, slice, span, interner)?;
        trace!(?kind, ?span, "token");
        tokens.push(Token::new(kind, span));
    }

    let end = Span::from_range(source.len()..source.len());
    tokens.push(Token::new(TokenKind::Eof, end));
    Ok(tokens)
}

fn convert(
    raw: RawToken,
    slice: &str,
    span: Span,
    interner: &StringInterner,
) -> Result<TokenKind, LexError> {
    let kind = match raw {
        RawToken::Int => match slice.parse::<i64>() {
            Ok(n) => TokenKind::Int(n),
            Err(_) => return Err(LexError::integer_out_of_range(slice, span)),
        },
        RawToken::Word => {
            TokenKind::keyword(slice).unwrap_or_else(|| TokenKind::Ident(interner.intern(slice)))
        }
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Define => TokenKind::Define,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semi => TokenKind::Semi,
    };
    Ok(kind)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
