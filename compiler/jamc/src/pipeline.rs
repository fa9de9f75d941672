//! Source text in, text or a [`Problem`] out.
//!
//! Each entry point builds its own interner, so calls are independent.

use std::fmt::{self, Write as _};

use jam_check::{check, CheckConfig, CheckedProgram};
use jam_eval::{EvalCounters, EvalError, EvalPolicy, Interpreter};
use jam_ir::printer::print_expr;
use jam_ir::{SharedInterner, TokenKind};
use tracing::debug;

use crate::options::RunOptions;
use crate::problem::Problem;

/// Parse and check `source`.
pub fn frontend(source: &str, config: CheckConfig) -> Result<CheckedProgram, Problem> {
    let interner = SharedInterner::new();
    let parsed = jam_parse::parse_source(source, &interner)?;
    Ok(check(parsed, &interner, config)?)
}

/// Result of evaluating a program and rendering its value.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOutput {
    pub rendered: String,
    /// Present when [`RunOptions::stats`] was set.
    pub counters: Option<EvalCounters>,
}

#[tracing::instrument(level = "debug", skip_all, fields(policy = %options.policy))]
pub fn run_source(source: &str, options: &RunOptions) -> Result<RunOutput, Problem> {
    let program = frontend(source, options.check_config())?;
    let interpreter = Interpreter::new(options.eval_config());
    let rendered = interpreter.run(&program)?;
    Ok(RunOutput {
        rendered,
        counters: interpreter.counters(),
    })
}

/// The outcome of one policy in [`run_all`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyOutcome {
    pub policy: EvalPolicy,
    pub result: Result<String, EvalError>,
}

impl fmt::Display for PolicyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(rendered) => write!(f, "{}: {rendered}", self.policy),
            Err(err) => write!(f, "{}: error[{}]: {err}", self.policy, err.code()),
        }
    }
}

/// Evaluate `source` under all nine policies, argument discipline major.
///
/// The program is parsed and checked once. A front-end failure is returned
/// as the outer error; evaluation errors are recorded per policy.
pub fn run_all(source: &str, options: &RunOptions) -> Result<Vec<PolicyOutcome>, Problem> {
    let program = frontend(source, options.check_config())?;
    let outcomes = EvalPolicy::ALL
        .into_iter()
        .map(|policy| {
            let config = RunOptions { policy, ..*options }.eval_config();
            let result = Interpreter::new(config).run(&program);
            debug!(%policy, ok = result.is_ok(), "policy finished");
            PolicyOutcome { policy, result }
        })
        .collect();
    Ok(outcomes)
}

pub fn check_source(source: &str, config: CheckConfig) -> Result<(), Problem> {
    frontend(source, config).map(|_| ())
}

/// Parse `source` and print it back as concrete syntax.
pub fn parse_to_string(source: &str) -> Result<String, Problem> {
    let interner = SharedInterner::new();
    let parsed = jam_parse::parse_source(source, &interner)?;
    Ok(print_expr(&parsed.arena, &interner, parsed.root))
}

/// One line per token: span, kind, source text.
pub fn lex_to_string(source: &str) -> Result<String, Problem> {
    let interner = SharedInterner::new();
    let tokens = jam_lexer::lex(source, &interner).map_err(jam_parse::ParseError::from)?;
    let mut out = String::new();
    for token in &tokens {
        let text = match token.kind {
            TokenKind::Eof => "",
            _ => source.get(token.span.to_range()).unwrap_or_default(),
        };
        let span = format!("{:?}", token.span);
        let line = format!("{span:<10} {:<12} {text}", token.kind.display_name());
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", line.trim_end());
    }
    Ok(out)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
