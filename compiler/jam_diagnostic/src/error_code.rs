use std::fmt;

/// Stable codes for every diagnostic the toolchain can produce.
///
/// The first digit names the phase:
/// - E0xxx: lexer
/// - E1xxx: parser
/// - E2xxx: context check
/// - E3xxx: evaluation
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Character that starts no token
    E0001,
    /// Integer literal does not fit in 64 bits
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Input ended in the middle of an expression
    E1002,
    /// Tokens left over after a complete expression
    E1003,

    // Context Check Errors (E2xxx)
    /// Variable not bound by any enclosing `map` or `let`
    E2001,
    /// Same name bound twice in one parameter or definition list
    E2002,

    // Evaluation Errors (E3xxx)
    /// Variable unbound at run time
    E3001,
    /// Applied a value that is not a function
    E3002,
    /// Wrong number of arguments
    E3003,
    /// Operator or primitive given a value of the wrong kind
    E3004,
    /// Division by zero
    E3005,
    /// List operation given something that is not a (non-empty) list
    E3006,
    /// Integer arithmetic overflowed
    E3007,
    /// Evaluation nested deeper than the configured limit
    E3008,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E3004,
        ErrorCode::E3005,
        ErrorCode::E3006,
        ErrorCode::E3007,
        ErrorCode::E3008,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
            ErrorCode::E3007 => "E3007",
            ErrorCode::E3008 => "E3008",
        }
    }

    /// One-line summary, used as the fallback diagnostic title.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unexpected character",
            ErrorCode::E0002 => "integer literal out of range",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "unexpected end of input",
            ErrorCode::E1003 => "unexpected input after expression",
            ErrorCode::E2001 => "free variable",
            ErrorCode::E2002 => "duplicate binding",
            ErrorCode::E3001 => "unbound variable",
            ErrorCode::E3002 => "not a function",
            ErrorCode::E3003 => "arity mismatch",
            ErrorCode::E3004 => "type mismatch",
            ErrorCode::E3005 => "division by zero",
            ErrorCode::E3006 => "list shape violation",
            ErrorCode::E3007 => "integer overflow",
            ErrorCode::E3008 => "recursion limit exceeded",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Raised by the static context check, before evaluation starts.
    pub fn is_check_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    pub fn is_eval_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
