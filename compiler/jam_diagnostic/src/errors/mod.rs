//! Long-form explanations for `jam explain <code>`.
//!
//! Each code has a markdown file in this directory, embedded at compile time.

use crate::ErrorCode;

pub struct ErrorDocs;

impl ErrorDocs {
    /// Markdown documentation for `code`, if written.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Lexer (E0xxx)
    (ErrorCode::E0001, include_str!("E0001.md")),
    (ErrorCode::E0002, include_str!("E0002.md")),
    // Parser (E1xxx)
    (ErrorCode::E1001, include_str!("E1001.md")),
    (ErrorCode::E1002, include_str!("E1002.md")),
    (ErrorCode::E1003, include_str!("E1003.md")),
    // Context check (E2xxx)
    (ErrorCode::E2001, include_str!("E2001.md")),
    (ErrorCode::E2002, include_str!("E2002.md")),
    // Evaluation (E3xxx)
    (ErrorCode::E3001, include_str!("E3001.md")),
    (ErrorCode::E3002, include_str!("E3002.md")),
    (ErrorCode::E3003, include_str!("E3003.md")),
    (ErrorCode::E3004, include_str!("E3004.md")),
    (ErrorCode::E3005, include_str!("E3005.md")),
    (ErrorCode::E3006, include_str!("E3006.md")),
    (ErrorCode::E3007, include_str!("E3007.md")),
    (ErrorCode::E3008, include_str!("E3008.md")),
];
