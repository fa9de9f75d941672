use super::*;
use crate::ErrorCode;

#[test]
fn test_render_includes_code_message_and_label() {
    let source = "let x := 1 / 0; in x";
    let diag = Diagnostic::error(ErrorCode::E3005)
        .with_message("division by zero")
        .with_label(Span::new(9, 14), "divisor evaluated to 0");
    let text = render(&diag, "div.jam", source, false);
    assert!(text.contains("E3005"), "{text}");
    assert!(text.contains("division by zero"), "{text}");
    assert!(text.contains("divisor evaluated to 0"), "{text}");
    assert!(text.contains("div.jam"), "{text}");
}

#[test]
fn test_render_includes_notes() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("`y` is a free variable")
        .with_label(Span::new(9, 10), "not bound by any enclosing `map` or `let`")
        .with_note("bind it with `let` or add it to the parameter list");
    let text = render(&diag, "free.jam", "map x to y", false);
    assert!(text.contains("bind it with `let`"), "{text}");
}

#[test]
fn test_char_index_counts_characters_not_bytes() {
    let source = "// é\nx";
    assert_eq!(char_index(source, source.len()), 6);
    assert_eq!(char_index(source, 1000), 6);
    assert_eq!(char_range(source, Span::new(6, 7)), 5..6);
}
