//! Block-scoped checking with a push/truncate scope stack.

use jam_ir::{ExprArena, ExprId, ExprKind, Name, StringInterner};
use jam_stack::ensure_sufficient_stack;

use crate::{check_distinct, BinderKind, CheckError};

pub(crate) fn check(
    arena: &ExprArena,
    interner: &StringInterner,
    root: ExprId,
) -> Result<(), CheckError> {
    ScopeChecker {
        arena,
        interner,
        scope: Vec::new(),
    }
    .check_expr(root)
}

struct ScopeChecker<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    /// Names in scope, innermost last.
    scope: Vec<Name>,
}

impl ScopeChecker<'_> {
    fn check_expr(&mut self, id: ExprId) -> Result<(), CheckError> {
        ensure_sufficient_stack(|| self.check_expr_inner(id))
    }

    fn check_expr_inner(&mut self, id: ExprId) -> Result<(), CheckError> {
        let arena = self.arena;
        let expr = arena.get_expr(id);
        match &expr.kind {
            ExprKind::Int(_) | ExprKind::Bool(_) | ExprKind::Null | ExprKind::Prim(_) => Ok(()),
            ExprKind::Ident(name) => {
                if self.scope.contains(name) {
                    Ok(())
                } else {
                    Err(CheckError::free_variable(
                        self.interner.lookup(*name),
                        expr.span,
                    ))
                }
            }
            ExprKind::Unary { operand, .. } => self.check_expr(*operand),
            ExprKind::Binary { left, right, .. } => {
                self.check_expr(*left)?;
                self.check_expr(*right)
            }
            ExprKind::App { func, args } => {
                self.check_expr(*func)?;
                arena
                    .get_expr_list(*args)
                    .iter()
                    .try_for_each(|arg| self.check_expr(*arg))
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.check_expr(*cond)?;
                self.check_expr(*then_branch)?;
                self.check_expr(*else_branch)
            }
            ExprKind::Map { params, body } => {
                let params = arena.get_params(*params);
                check_distinct(
                    params.iter().map(|p| (p.name, p.span)),
                    BinderKind::Map,
                    self.interner,
                )?;
                self.scoped(params.iter().map(|p| p.name), *body)
            }
            ExprKind::Let { defs, body } => {
                let defs = arena.get_defs(*defs);
                check_distinct(
                    defs.iter().map(|d| (d.name, d.span)),
                    BinderKind::Let,
                    self.interner,
                )?;
                // Right-hand sides see only the enclosing scope.
                for def in defs {
                    self.check_expr(def.init)?;
                }
                self.scoped(defs.iter().map(|d| d.name), *body)
            }
        }
    }

    /// Check `body` with `names` pushed, popping them afterwards.
    fn scoped(
        &mut self,
        names: impl Iterator<Item = Name>,
        body: ExprId,
    ) -> Result<(), CheckError> {
        let mark = self.scope.len();
        self.scope.extend(names);
        let result = self.check_expr(body);
        self.scope.truncate(mark);
        result
    }
}
