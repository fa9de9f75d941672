//! Render a syntax tree back to Jam concrete syntax.
//!
//! Output re-parses to the same tree. Parentheses are emitted only where
//! precedence or an open-ended form (`if`, `let`, `map`) requires them.

use std::fmt::Write as _;

use jam_stack::ensure_sufficient_stack;

use crate::{ExprArena, ExprId, ExprKind, StringInterner};

/// Precedence context: accepts anything, including open forms.
const ANY: u8 = 0;
const UNARY: u8 = 6;
/// Operator position of an application; only atoms and applications fit.
const POSTFIX: u8 = 7;

/// Render the expression `id` as source text.
pub fn print_expr(arena: &ExprArena, interner: &StringInterner, id: ExprId) -> String {
    let mut printer = ExprPrinter {
        arena,
        interner,
        out: String::new(),
    };
    printer.expr(id, ANY);
    printer.out
}

struct ExprPrinter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    out: String,
}

impl ExprPrinter<'_> {
    fn expr(&mut self, id: ExprId, min_prec: u8) {
        ensure_sufficient_stack(|| self.expr_inner(id, min_prec));
    }

    fn expr_inner(&mut self, id: ExprId, min_prec: u8) {
        let arena = self.arena;
        match &arena.get_expr(id).kind {
            ExprKind::Int(n) => {
                let _ = write!(self.out, "{n}");
            }
            ExprKind::Bool(b) => {
                let _ = write!(self.out, "{b}");
            }
            ExprKind::Null => self.out.push_str("null"),
            ExprKind::Ident(name) => self.out.push_str(self.interner.lookup(*name)),
            ExprKind::Prim(prim) => self.out.push_str(prim.name()),
            ExprKind::Unary { op, operand } => {
                self.parenthesized(min_prec > UNARY, |p| {
                    p.out.push_str(op.as_symbol());
                    p.expr(*operand, UNARY);
                });
            }
            ExprKind::Binary { op, left, right } => {
                let prec = op.precedence();
                self.parenthesized(prec < min_prec, |p| {
                    p.expr(*left, prec);
                    let _ = write!(p.out, " {op} ");
                    p.expr(*right, prec + 1);
                });
            }
            ExprKind::App { func, args } => {
                // Constants take no argument list of their own: `(5)(1)`.
                let constant_callee = matches!(
                    arena.get_expr(*func).kind,
                    ExprKind::Int(_) | ExprKind::Bool(_) | ExprKind::Null
                );
                self.parenthesized(constant_callee, |p| p.expr(*func, POSTFIX));
                self.out.push('(');
                for (i, arg) in arena.get_expr_list(*args).iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.expr(*arg, ANY);
                }
                self.out.push(')');
            }
            ExprKind::Map { params, body } => {
                self.parenthesized(min_prec > ANY, |p| {
                    p.out.push_str("map ");
                    for (i, param) in arena.get_params(*params).iter().enumerate() {
                        if i > 0 {
                            p.out.push_str(", ");
                        }
                        p.out.push_str(p.interner.lookup(param.name));
                    }
                    if !params.is_empty() {
                        p.out.push(' ');
                    }
                    p.out.push_str("to ");
                    p.expr(*body, ANY);
                });
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.parenthesized(min_prec > ANY, |p| {
                    p.out.push_str("if ");
                    p.expr(*cond, ANY);
                    p.out.push_str(" then ");
                    p.expr(*then_branch, ANY);
                    p.out.push_str(" else ");
                    p.expr(*else_branch, ANY);
                });
            }
            ExprKind::Let { defs, body } => {
                self.parenthesized(min_prec > ANY, |p| {
                    p.out.push_str("let ");
                    for def in arena.get_defs(*defs) {
                        p.out.push_str(p.interner.lookup(def.name));
                        p.out.push_str(" := ");
                        p.expr(def.init, ANY);
                        p.out.push_str("; ");
                    }
                    p.out.push_str("in ");
                    p.expr(*body, ANY);
                });
            }
        }
    }

    fn parenthesized(&mut self, wrap: bool, f: impl FnOnce(&mut Self)) {
        if wrap {
            self.out.push('(');
        }
        f(self);
        if wrap {
            self.out.push(')');
        }
    }
}
