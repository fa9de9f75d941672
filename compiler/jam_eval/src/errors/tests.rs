use pretty_assertions::assert_eq;

use super::*;

#[test]
fn messages_name_the_offending_value() {
    let cases = [
        (unbound_variable("x"), "unbound variable `x`"),
        (not_a_function(&Value::Int(5)), "integer `5` is not a function"),
        (
            closure_arity_mismatch(1, 2),
            "closure expects 1 argument, found 2",
        ),
        (
            prim_arity_mismatch(PrimFn::Cons, 1),
            "`cons` expects 2 arguments, found 1",
        ),
        (
            binary_type_mismatch(BinaryOp::Add, "an integer", &Value::Bool(true)),
            "`+` expects an integer, found boolean `true`",
        ),
        (
            unary_type_mismatch(UnaryOp::Not, "a boolean", &Value::Int(0)),
            "`~` expects a boolean, found integer `0`",
        ),
        (
            if_test_not_boolean(&Value::null()),
            "`if` expects a boolean, found the empty list",
        ),
        (division_by_zero(), "division by zero"),
        (
            not_a_cons(PrimFn::First, &Value::null()),
            "`first` expects a non-empty list, found the empty list",
        ),
        (
            cons_tail_not_a_list(&Value::Int(2)),
            "`cons` expects a list as its tail, found integer `2`",
        ),
        (integer_overflow("*"), "integer overflow in `*`"),
        (recursion_limit(50), "maximum recursion depth of 50 exceeded"),
    ];
    for (err, message) in cases {
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn codes_follow_the_kind() {
    assert_eq!(unbound_variable("x").code(), ErrorCode::E3001);
    assert_eq!(not_a_function(&Value::Bool(false)).code(), ErrorCode::E3002);
    assert_eq!(closure_arity_mismatch(0, 1).code(), ErrorCode::E3003);
    assert_eq!(
        prim_type_mismatch(PrimFn::Arity, "a function", &Value::Int(1)).code(),
        ErrorCode::E3004
    );
    assert_eq!(division_by_zero().code(), ErrorCode::E3005);
    assert_eq!(cons_tail_not_a_list(&Value::Int(1)).code(), ErrorCode::E3006);
    assert_eq!(integer_overflow("+").code(), ErrorCode::E3007);
    assert_eq!(recursion_limit(1).code(), ErrorCode::E3008);
    for code in [ErrorCode::E3001, ErrorCode::E3008] {
        assert!(code.is_eval_error());
    }
}

#[test]
fn the_first_span_attached_wins() {
    let inner = Span::new(4, 9);
    let outer = Span::new(0, 12);
    let err = division_by_zero()
        .with_span_if_absent(inner)
        .with_span_if_absent(outer);
    assert_eq!(err.span, Some(inner));
}

#[test]
fn diagnostic_labels_the_span() {
    let diag = division_by_zero()
        .with_span(Span::new(2, 7))
        .to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E3005);
    assert_eq!(diag.message, "division by zero");
    assert_eq!(diag.primary_span(), Some(Span::new(2, 7)));
}

#[test]
fn diagnostic_without_span_has_no_labels() {
    let diag = unbound_variable("y").to_diagnostic();
    assert!(diag.labels.is_empty());
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn recursion_limit_suggests_lazy_lists() {
    let diag = recursion_limit(10).to_diagnostic();
    assert!(diag.notes.iter().any(|note| note.contains("--lists=need")));
}
