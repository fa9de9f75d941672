use super::*;
use crate::{ExprKind, Name, Span};

fn int(arena: &mut ExprArena, value: i64) -> ExprId {
    arena.alloc_expr(Expr::new(ExprKind::Int(value), Span::DUMMY))
}

#[test]
fn test_alloc_and_get_expr() {
    let mut arena = ExprArena::new();
    let a = int(&mut arena, 1);
    let b = int(&mut arena, 2);
    assert_ne!(a, b);
    assert_eq!(arena.get_expr(b).kind, ExprKind::Int(2));
    assert_eq!(arena.len(), 2);
}

#[test]
fn test_expr_lists_are_independent_runs() {
    let mut arena = ExprArena::new();
    let ids: Vec<_> = (0..4).map(|i| int(&mut arena, i)).collect();
    let first = arena.alloc_expr_list(ids[..1].iter().copied());
    let second = arena.alloc_expr_list(ids[1..].iter().copied());
    assert_eq!(arena.get_expr_list(first), &ids[..1]);
    assert_eq!(arena.get_expr_list(second), &ids[1..]);
    assert!(arena.get_expr_list(ExprRange::EMPTY).is_empty());
}

#[test]
fn test_params_and_defs() {
    let mut arena = ExprArena::new();
    let init = int(&mut arena, 7);
    let params = arena.alloc_params([
        Param {
            name: Name::from_raw(1),
            span: Span::new(4, 5),
        },
        Param {
            name: Name::from_raw(2),
            span: Span::new(7, 8),
        },
    ]);
    let defs = arena.alloc_defs([LetDef {
        name: Name::from_raw(3),
        span: Span::new(0, 1),
        init,
    }]);
    assert_eq!(params.len(), 2);
    assert_eq!(arena.get_params(params)[1].name, Name::from_raw(2));
    assert_eq!(arena.get_defs(defs)[0].init, init);
}
