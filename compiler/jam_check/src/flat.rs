//! Breadth-first checking over one accumulating set of known names.

use std::collections::VecDeque;

use jam_ir::{ExprArena, ExprId, ExprKind, Name, StringInterner};
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::{check_distinct, BinderKind, CheckError};

pub(crate) fn check(
    arena: &ExprArena,
    interner: &StringInterner,
    root: ExprId,
) -> Result<(), CheckError> {
    let mut known: FxHashSet<Name> = FxHashSet::default();
    let mut worklist = VecDeque::from([root]);

    while let Some(id) = worklist.pop_front() {
        let expr = arena.get_expr(id);
        match &expr.kind {
            ExprKind::Int(_) | ExprKind::Bool(_) | ExprKind::Null | ExprKind::Prim(_) => {}
            ExprKind::Ident(name) => {
                if !known.contains(name) {
                    return Err(CheckError::free_variable(interner.lookup(*name), expr.span));
                }
            }
            ExprKind::Unary { operand, .. } => worklist.push_back(*operand),
            ExprKind::Binary { left, right, .. } => worklist.extend([*left, *right]),
            // Only the arguments of an application are walked.
            ExprKind::App { args, .. } => {
                worklist.extend(arena.get_expr_list(*args).iter().copied());
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => worklist.extend([*cond, *then_branch, *else_branch]),
            ExprKind::Map { params, body } => {
                let params = arena.get_params(*params);
                check_distinct(
                    params.iter().map(|p| (p.name, p.span)),
                    BinderKind::Map,
                    interner,
                )?;
                known.extend(params.iter().map(|p| p.name));
                worklist.push_back(*body);
            }
            ExprKind::Let { defs, body } => {
                let defs = arena.get_defs(*defs);
                check_distinct(
                    defs.iter().map(|d| (d.name, d.span)),
                    BinderKind::Let,
                    interner,
                )?;
                known.extend(defs.iter().map(|d| d.name));
                worklist.extend(defs.iter().map(|d| d.init));
                worklist.push_back(*body);
            }
        }
    }
    trace!(known = known.len(), "flat scope walk finished");
    Ok(())
}
