use super::*;

#[test]
fn test_codes_by_kind() {
    let span = Span::new(0, 1);
    assert_eq!(LexError::unexpected_char('#', span).code(), ErrorCode::E0001);
    assert_eq!(
        LexError::integer_out_of_range("99999999999999999999", span).code(),
        ErrorCode::E0002
    );
}

#[test]
fn test_bang_suggests_not_equal() {
    let diag = LexError::unexpected_char('!', Span::new(2, 3)).to_diagnostic();
    assert_eq!(diag.message, "unexpected character `!`");
    assert_eq!(diag.primary_span(), Some(Span::new(2, 3)));
    assert_eq!(diag.notes, vec!["did you mean `!=`?".to_string()]);
}
