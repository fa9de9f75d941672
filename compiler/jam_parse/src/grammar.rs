//! Expression grammar.
//!
//! ```text
//! exp     ::= if exp then exp else exp
//!           | let (id := exp ;)+ in exp
//!           | map [id (, id)*] to exp
//!           | binary
//! binary  ::= term (binop operand)*
//! operand ::= term | if ... | let ... | map ...
//! term    ::= unop term | constant | factor ( '(' [exp (, exp)*] ')' )*
//! factor  ::= '(' exp ')' | prim | id
//! ```
//!
//! Binary operators are left-associative and climb by
//! [`BinaryOp::precedence`]. An `if`, `let` or `map` in operand position
//! extends as far right as possible.

use jam_ir::{BinaryOp, Expr, ExprId, ExprKind, LetDef, Param, Span, TokenKind, UnaryOp};
use jam_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Eq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::GtEq => BinaryOp::GtEq,
        TokenKind::Amp => BinaryOp::And,
        TokenKind::Pipe => BinaryOp::Or,
        _ => return None,
    };
    Some(op)
}

fn unary_op(kind: TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Plus => Some(UnaryOp::Pos),
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Tilde => Some(UnaryOp::Not),
        _ => None,
    }
}

/// Forms that begin with a keyword and extend to the right.
fn starts_open_form(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::If | TokenKind::Let | TokenKind::Map)
}

impl Parser<'_> {
    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }

    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| match self.cursor.peek_kind() {
            TokenKind::If => self.parse_if(),
            TokenKind::Let => self.parse_let(),
            TokenKind::Map => self.parse_map(),
            _ => self.parse_binary(0),
        })
    }

    fn parse_binary(&mut self, min_prec: u8) -> Result<ExprId, ParseError> {
        let mut left = self.parse_term()?;
        while let Some(op) = binary_op(self.cursor.peek_kind()) {
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.cursor.advance();
            let right = if starts_open_form(self.cursor.peek_kind()) {
                self.parse_expr()?
            } else {
                ensure_sufficient_stack(|| self.parse_binary(prec + 1))?
            };
            let span = self.span_of(left).merge(self.span_of(right));
            left = self.alloc(ExprKind::Binary { op, left, right }, span);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| {
            let token = self.cursor.peek();
            if let Some(op) = unary_op(token.kind) {
                self.cursor.advance();
                let operand = self.parse_term()?;
                let span = token.span.merge(self.span_of(operand));
                return Ok(self.alloc(ExprKind::Unary { op, operand }, span));
            }

            let constant = match token.kind {
                TokenKind::Int(n) => Some(ExprKind::Int(n)),
                TokenKind::True => Some(ExprKind::Bool(true)),
                TokenKind::False => Some(ExprKind::Bool(false)),
                TokenKind::Null => Some(ExprKind::Null),
                _ => None,
            };
            if let Some(kind) = constant {
                self.cursor.advance();
                return Ok(self.alloc(kind, token.span));
            }

            let mut expr = self.parse_factor()?;
            while self.cursor.check(TokenKind::LParen) {
                expr = self.parse_call(expr)?;
            }
            Ok(expr)
        })
    }

    fn parse_factor(&mut self) -> Result<ExprId, ParseError> {
        let token = self.cursor.peek();
        match token.kind {
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(TokenKind::RParen, "`)`")?;
                Ok(inner)
            }
            TokenKind::Prim(prim) => {
                self.cursor.advance();
                Ok(self.alloc(ExprKind::Prim(prim), token.span))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(self.alloc(ExprKind::Ident(name), token.span))
            }
            _ => Err(self.cursor.error("an expression")),
        }
    }

    /// `func(args...)`, with the `(` not yet consumed.
    fn parse_call(&mut self, func: ExprId) -> Result<ExprId, ParseError> {
        self.cursor.expect(TokenKind::LParen, "`(`")?;
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if self.cursor.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        let close = self.cursor.expect(TokenKind::RParen, "`,` or `)`")?;
        let args = self.arena.alloc_expr_list(args);
        let span = self.span_of(func).merge(close.span);
        Ok(self.alloc(ExprKind::App { func, args }, span))
    }

    fn parse_if(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.expect(TokenKind::If, "`if`")?.span;
        let cond = self.parse_expr()?;
        self.cursor.expect(TokenKind::Then, "`then`")?;
        let then_branch = self.parse_expr()?;
        self.cursor.expect(TokenKind::Else, "`else`")?;
        let else_branch = self.parse_expr()?;
        let span = start.merge(self.span_of(else_branch));
        Ok(self.alloc(
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    fn parse_let(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.expect(TokenKind::Let, "`let`")?.span;
        let mut defs = Vec::new();
        loop {
            let token = self.cursor.peek();
            let TokenKind::Ident(name) = token.kind else {
                if defs.is_empty() {
                    return Err(self.cursor.error("a definition name"));
                }
                break;
            };
            self.cursor.advance();
            self.cursor.expect(TokenKind::Define, "`:=`")?;
            let init = self.parse_expr()?;
            self.cursor.expect(TokenKind::Semi, "`;`")?;
            trace!(name = self.cursor.interner().lookup(name), "let definition");
            defs.push(LetDef {
                name,
                span: token.span,
                init,
            });
        }
        self.cursor.expect(TokenKind::In, "`in` or another definition")?;
        let body = self.parse_expr()?;
        let defs = self.arena.alloc_defs(defs);
        let span = start.merge(self.span_of(body));
        Ok(self.alloc(ExprKind::Let { defs, body }, span))
    }

    fn parse_map(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.expect(TokenKind::Map, "`map`")?.span;
        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::To) {
            loop {
                let token = self.cursor.peek();
                let TokenKind::Ident(name) = token.kind else {
                    return Err(self.cursor.error("a parameter name"));
                };
                self.cursor.advance();
                params.push(Param {
                    name,
                    span: token.span,
                });
                if self.cursor.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::To, "`to`")?;
        let body = self.parse_expr()?;
        let params = self.arena.alloc_params(params);
        let span = start.merge(self.span_of(body));
        Ok(self.alloc(ExprKind::Map { params, body }, span))
    }
}
