//! Failures from any phase of the pipeline.

use jam_check::CheckError;
use jam_diagnostic::{Diagnostic, ErrorCode};
use jam_eval::EvalError;
use jam_parse::ParseError;

/// The first error a run hit, tagged by phase.
///
/// Lexer errors arrive wrapped in [`ParseError`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Problem {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Check(#[from] CheckError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Problem {
    pub fn code(&self) -> ErrorCode {
        match self {
            Problem::Parse(err) => err.code(),
            Problem::Check(err) => err.code(),
            Problem::Eval(err) => err.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Problem::Parse(err) => err.to_diagnostic(),
            Problem::Check(err) => err.to_diagnostic(),
            Problem::Eval(err) => err.to_diagnostic(),
        }
    }

    /// One-line summary: `error[E3005]: division by zero`.
    pub fn summary(&self) -> String {
        format!("error[{}]: {self}", self.code())
    }
}
