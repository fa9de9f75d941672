use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use jam_diagnostic::ErrorCode;
use jam_ir::printer::print_expr;
use jam_ir::{BinaryOp, ExprKind, PrimFn, Span};

fn parse_ok(source: &str) -> (ParseOutput, StringInterner) {
    let interner = StringInterner::new();
    let output = parse_source(source, &interner).unwrap();
    (output, interner)
}

/// Parse and print back in canonical form.
fn reprint(source: &str) -> String {
    let (output, interner) = parse_ok(source);
    print_expr(&output.arena, &interner, output.root)
}

fn parse_err(source: &str) -> ParseError {
    let interner = StringInterner::new();
    parse_source(source, &interner).unwrap_err()
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let (output, _) = parse_ok("2 * 3 + 12");
    let ExprKind::Binary { op, left, .. } = output.arena.get_expr(output.root).kind else {
        panic!("expected a binary root");
    };
    assert_eq!(op, BinaryOp::Add);
    assert!(matches!(
        output.arena.get_expr(left).kind,
        ExprKind::Binary {
            op: BinaryOp::Mul,
            ..
        }
    ));
}

#[test]
fn test_operator_precedence_ladder() {
    assert_eq!(reprint("a | b & c = d + e * f"), "a | b & c = d + e * f");
    assert_eq!(reprint("(a | b) & c"), "(a | b) & c");
    assert_eq!(reprint("1 - 2 - 3"), "1 - 2 - 3");
    assert_eq!(reprint("1 - (2 - 3)"), "1 - (2 - 3)");
    assert_eq!(reprint("((1))"), "1");
}

#[test]
fn test_unary_binds_tighter_than_binary() {
    assert_eq!(reprint("-1 + 2"), "-1 + 2");
    assert_eq!(reprint("-(1 + 2)"), "-(1 + 2)");
    assert_eq!(reprint("~ ~true"), "~~true");
}

#[test]
fn test_let_with_several_definitions() {
    let (output, interner) = parse_ok("let x := 1; y := x + 1; in y");
    let ExprKind::Let { defs, .. } = output.arena.get_expr(output.root).kind else {
        panic!("expected let");
    };
    let names: Vec<_> = output
        .arena
        .get_defs(defs)
        .iter()
        .map(|d| interner.lookup(d.name))
        .collect();
    assert_eq!(names, vec!["x", "y"]);
    assert_eq!(output.arena.get_defs(defs)[1].span, Span::new(12, 13));
}

#[test]
fn test_map_forms() {
    assert_eq!(reprint("map x, y to x"), "map x, y to x");
    assert_eq!(reprint("map to 5"), "map to 5");
    assert_eq!(reprint("(map to 5)()"), "(map to 5)()");
}

#[test]
fn test_application_chains() {
    assert_eq!(reprint("f(1)(2, 3)"), "f(1)(2, 3)");
    let (output, _) = parse_ok("cons(1, null)");
    let ExprKind::App { func, args } = output.arena.get_expr(output.root).kind else {
        panic!("expected application");
    };
    assert_eq!(output.arena.get_expr(func).kind, ExprKind::Prim(PrimFn::Cons));
    assert_eq!(args.len(), 2);
}

#[test]
fn test_open_form_as_right_operand_extends_right() {
    assert_eq!(
        reprint("1 + if b then 2 else 3 + 4"),
        "1 + (if b then 2 else 3 + 4)"
    );
}

#[test]
fn test_spans_cover_whole_expression() {
    let (output, _) = parse_ok("f(1, 2)");
    assert_eq!(output.arena.get_expr(output.root).span, Span::new(0, 7));
    let (output, _) = parse_ok("if a then b else c");
    assert_eq!(output.arena.get_expr(output.root).span, Span::new(0, 18));
}

#[test]
fn test_dangling_operator_is_rejected() {
    let err = parse_err("1 +");
    assert_eq!(err.code(), ErrorCode::E1002);
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedEof {
            expected: "an expression"
        }
    );
}

#[test]
fn test_trailing_input_is_rejected() {
    let err = parse_err("1 2");
    assert_eq!(err.code(), ErrorCode::E1003);
    assert_eq!(err.span, Span::new(2, 3));
}

#[test]
fn test_let_requires_a_definition() {
    let err = parse_err("let in 5");
    assert_eq!(err.code(), ErrorCode::E1001);
}

#[test]
fn test_let_definition_requires_semicolon() {
    let err = parse_err("let x := 1 in x");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "`;`",
            found: "`in`".to_string()
        }
    );
}

#[test]
fn test_map_parameters_must_be_identifiers() {
    let err = parse_err("map 1 to 2");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "a parameter name",
            found: "integer `1`".to_string()
        }
    );
}

#[test]
fn test_unclosed_paren() {
    let err = parse_err("(1 + 2");
    assert_eq!(err.code(), ErrorCode::E1002);
}

#[test]
fn test_constants_are_not_callable_syntax() {
    // `5(1)` is a constant followed by stray input, not an application.
    assert_eq!(parse_err("5(1)").code(), ErrorCode::E1003);
}

#[test]
fn test_lex_errors_surface_through_parse_source() {
    assert_eq!(parse_err("1 # 2").code(), ErrorCode::E0001);
}

#[test]
fn test_deeply_nested_parens() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(reprint(&source), "1");
}

fn arb_expr() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0..100i64).prop_map(|n| n.to_string()),
        Just("x".to_string()),
        Just("true".to_string()),
        Just("null".to_string()),
        Just("first".to_string()),
    ];
    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), "[-+*/=<>&|]", inner.clone())
                .prop_map(|(a, op, b)| format!("{a} {op} {b}")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a})({b})")),
            inner.clone().prop_map(|a| format!("-({a})")),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(c, t, e)| format!("if {c} then {t} else {e}")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("let x := {a}; in {b}")),
            inner.prop_map(|b| format!("map x to {b}")),
        ]
    })
}

proptest! {
    #[test]
    fn prop_printed_tree_reparses_to_itself(source in arb_expr()) {
        let once = reprint(&source);
        let twice = reprint(&once);
        prop_assert_eq!(once, twice);
    }
}
