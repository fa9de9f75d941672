//! Flags shared by the evaluating commands.

use jam_check::{CheckConfig, ScopeMode};
use jam_eval::{
    Discipline, EvalConfig, EvalPolicy, UnknownDiscipline, DEFAULT_MAX_DEPTH, DEFAULT_PRINT_DEPTH,
};

/// Everything `run`, `eval` and `all` can be told on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub policy: EvalPolicy,
    /// `None` lifts the limit.
    pub max_depth: Option<usize>,
    pub print_depth: usize,
    pub scope_mode: ScopeMode,
    /// Print the evaluation profile to stderr after the result.
    pub stats: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            policy: EvalPolicy::default(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
            print_depth: DEFAULT_PRINT_DEPTH,
            scope_mode: ScopeMode::Lexical,
            stats: false,
        }
    }
}

impl RunOptions {
    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig::builder()
            .policy(self.policy)
            .max_depth(self.max_depth)
            .print_depth(self.print_depth)
            .counters(self.stats)
            .build()
    }

    pub fn check_config(&self) -> CheckConfig {
        CheckConfig {
            scope_mode: self.scope_mode,
        }
    }

    /// Override the policy with positional `[args] [lists]` disciplines.
    pub fn apply_positional_policy(&mut self, positionals: &[String]) -> Result<(), OptionError> {
        match positionals {
            [] => {}
            [args] => self.policy.args = args.parse()?,
            [args, lists] => {
                self.policy.args = args.parse()?;
                self.policy.lists = lists.parse()?;
            }
            [_, _, extra, ..] => return Err(OptionError::UnexpectedArgument(extra.clone())),
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error(transparent)]
    Discipline(#[from] UnknownDiscipline),
    #[error("invalid value `{value}` for `{flag}` (expected {expected})")]
    InvalidValue {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Split `args` into positional arguments and [`RunOptions`].
///
/// Flags may appear anywhere. Later flags override earlier ones.
pub fn parse_run_args(args: &[String]) -> Result<(Vec<String>, RunOptions), OptionError> {
    let mut options = RunOptions::default();
    let mut positionals = Vec::new();

    for arg in args {
        if !arg.starts_with("--") {
            positionals.push(arg.clone());
            continue;
        }
        if let Some(value) = arg.strip_prefix("--args=") {
            options.policy.args = value.parse::<Discipline>()?;
        } else if let Some(value) = arg.strip_prefix("--lists=") {
            options.policy.lists = value.parse::<Discipline>()?;
        } else if let Some(value) = arg.strip_prefix("--max-depth=") {
            options.max_depth = if value.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(parse_count("--max-depth", value, "a positive integer or `none`")?)
            };
        } else if let Some(value) = arg.strip_prefix("--print-depth=") {
            options.print_depth = parse_count("--print-depth", value, "a positive integer")?;
        } else if arg == "--flat-scopes" {
            options.scope_mode = ScopeMode::Flat;
        } else if arg == "--stats" {
            options.stats = true;
        } else {
            return Err(OptionError::UnknownOption(arg.clone()));
        }
    }

    Ok((positionals, options))
}

fn parse_count(flag: &'static str, value: &str, expected: &'static str) -> Result<usize, OptionError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(OptionError::InvalidValue {
            flag,
            value: value.to_string(),
            expected,
        }),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
