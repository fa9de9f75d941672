use jam_ir::{StringInterner, Token, TokenKind, TokenList};

use crate::ParseError;

/// Read position over a [`TokenList`]. Never moves past the trailing `Eof`.
pub(crate) struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Token {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Consume the next token if it is `kind`.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume `kind` or fail naming `expected`.
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<Token, ParseError> {
        self.eat(kind).ok_or_else(|| self.error(expected))
    }

    /// Error at the current token.
    #[cold]
    pub(crate) fn error(&self, expected: &'static str) -> ParseError {
        let token = self.peek();
        ParseError::unexpected(expected, token.kind, token.span, self.interner)
    }

    pub(crate) fn interner(&self) -> &'a StringInterner {
        self.interner
    }
}
